use clap::Parser;
use std::net::SocketAddr;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version)]
pub struct Arguments {
    /// Socket to bind on
    #[arg(short, long, default_value = "0.0.0.0:8000")]
    pub socket: SocketAddr,

    /// Maximum log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value_t = Level::INFO)]
    pub log_level: Level,
}
