//! # Server Configuration
//!
//! Command-line flags with environment fallbacks. Every setting has a
//! default, so the server starts with no configuration at all.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Runtime configuration for the usuarios server
#[derive(Debug, Clone, Parser)]
#[command(name = "usuarios-backend", about = "In-memory usuarios REST API", version)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Directory served for requests that match no API route
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Single origin allowed by CORS; any origin when unset
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            static_dir: PathBuf::from("public"),
            cors_origin: None,
        }
    }
}
