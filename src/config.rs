// Configuration module
// Resolves the listening port once at startup; the value is passed into
// server construction and never mutated afterwards.

use std::net::SocketAddr;

/// Listening port used when `PORT` is absent or unparseable
pub const DEFAULT_PORT: u16 = 8080;

/// Resolved application configuration
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// The only recognized setting is the `PORT` environment variable.
    /// Resolution never fails: a missing or unparseable value falls back to
    /// [`DEFAULT_PORT`].
    pub fn load() -> Self {
        let raw = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .ok()
            .and_then(|settings| settings.get_string("port").ok());

        Self {
            port: parse_port(raw.as_deref()),
        }
    }

    /// Bind address for the listener. All interfaces, always.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Parse a raw port value, falling back to the default on any failure
/// (non-numeric, negative, out of `u16` range).
fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        Some(value) => value.parse().unwrap_or(DEFAULT_PORT),
        None => DEFAULT_PORT,
    }
}
