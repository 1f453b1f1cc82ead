use bytes::BytesMut;
use std::str::FromStr;
use tokio_util::codec::Decoder;

/// Path reported for an empty or malformed request line.
pub const INVALID_PATH: &str = "Invalid";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub path: String,
}

impl FromStr for Request {
    type Err = anyhow::Error;

    /// Only the first `\r\n`-terminated line is looked at, as `<METHOD> <PATH> <VERSION>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.split("\r\n").next().unwrap_or_default();
        if line.is_empty() {
            return Ok(Self::invalid());
        }
        match line.split(' ').nth(1) {
            Some(path) if !path.is_empty() => Ok(Self {
                path: path.to_string(),
            }),
            _ => Ok(Self::invalid()),
        }
    }
}

impl Request {
    fn invalid() -> Self {
        Self {
            path: INVALID_PATH.to_string(),
        }
    }
}

/// Turns everything buffered by one read into a single request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestDecoder;

impl Decoder for RequestDecoder {
    type Item = Request;

    type Error = anyhow::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }
        let chunk = src.split();
        let chunk = String::from_utf8_lossy(&chunk);
        tracing::trace!("Decoding chunk: {chunk:?}");
        Request::from_str(&chunk).map(Some)
    }
}
