use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    body: String,
}

impl Response {
    pub fn for_path(path: &str) -> Self {
        Self {
            body: format!("<h1>Path: {path}</h1>"),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Writes the fixed `200 OK` header block followed by the body.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseEncoder;

impl Encoder<Response> for ResponseEncoder {
    type Error = anyhow::Error;

    fn encode(&mut self, item: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let body = item.body.as_bytes();
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n",
            body.len()
        );
        dst.reserve(head.len() + body.len());
        dst.put_slice(head.as_bytes());
        dst.put_slice(body);
        Ok(())
    }
}
