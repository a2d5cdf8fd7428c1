//! Command line and environment configuration for the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// The default file that debug level logs are appended to.
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// The REST API server for the expense tracker.
///
/// Every option can also be set through the environment variable named in its
/// help text. The configuration is read once at startup.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Connection string for the SQLite database, i.e. a file path or ":memory:".
    #[arg(long, env = "EXPENSES_DATABASE_PATH")]
    pub db_path: String,

    /// The address to serve the API from.
    #[arg(long, env = "EXPENSES_ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub address: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, env = "EXPENSES_PORT", default_value_t = 3000)]
    pub port: u16,

    /// File that debug level logs are appended to.
    #[arg(long, env = "EXPENSES_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,
}

impl Config {
    /// The socket address the server should bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
