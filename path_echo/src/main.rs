use anyhow::Context;
use arguments::Arguments;
use clap::Parser;
use futures::{Sink, SinkExt, Stream, StreamExt};
use request::{Request, RequestDecoder};
use response::{Response, ResponseEncoder};
use tokio::net::TcpListener;
use tokio_util::codec::{FramedRead, FramedWrite};

mod arguments;
mod request;
mod response;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let listener = TcpListener::bind(args.socket)
        .await
        .with_context(|| format!("Failed to bind to {}", args.socket))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    serve(listener).await
}

async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    loop {
        let (inbound, addr) = listener
            .accept()
            .await
            .context("Failed to accept connection")?;
        tracing::info!("Client connected: {addr}");
        let (reader, writer) = inbound.into_split();
        let reader = FramedRead::new(reader, RequestDecoder);
        let writer = FramedWrite::new(writer, ResponseEncoder);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(reader, writer).await {
                tracing::warn!("Connection to {addr} failed: {e:#}");
            }
        });
    }
}

/// Answers the first chunk received, then closes.
async fn handle_connection<R, W>(mut reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: Stream<Item = Result<Request, anyhow::Error>> + Unpin,
    W: Sink<Response, Error = anyhow::Error> + Unpin,
{
    let Some(request) = reader.next().await else {
        tracing::info!("Client closed before sending data");
        return Ok(());
    };
    let request = request.context("Failed to read request")?;
    tracing::info!("Received data");
    tracing::debug!("Requested path: {}", request.path);

    writer.send(Response::for_path(&request.path)).await?;
    writer.close().await?;
    Ok(())
}
