use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use web_analyser_core::FetchConfig;

/// Server settings, read from flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "web-analyser-server")]
#[command(version)]
#[command(about = "Serve web page summaries over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "SERVER_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log at debug level, including one line per request
    #[arg(long, env = "SERVER_DEBUG")]
    pub debug: bool,

    /// Upper bound for handling one request, in seconds
    #[arg(long, env = "SERVER_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Timeout for fetching the page being analysed, in seconds
    #[arg(long, env = "CLIENT_TIMEOUT", default_value_t = 10)]
    pub client_timeout: u64,

    /// User-Agent sent when fetching pages
    #[arg(long, env = "CLIENT_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig {
            timeout: self.client_timeout,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    /// `debug` when the debug flag is set, `info` otherwise.
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
