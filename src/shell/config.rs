use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::EnvFilter;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
}

impl Config {
    /// Reads `BIND_HOST`, `PORT` and `DEBUG`, after loading a `.env` file if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("reading .env");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("BIND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .parse()
            .with_context(|| format!("BIND_HOST {host:?} is not an IP address"))?;
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT {port:?} is not a valid port"))?,
            None => DEFAULT_PORT,
        };
        let debug = lookup("DEBUG").is_some_and(|value| value.eq_ignore_ascii_case("true"));
        Ok(Self { host, port, debug })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// `RUST_LOG` wins when set; otherwise `debug` or `info` depending on `DEBUG`.
    pub fn env_filter(&self) -> EnvFilter {
        let fallback = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}
