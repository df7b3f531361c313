use std::net::SocketAddr;
use std::path::PathBuf;

/// Port used when none is given on the command line.
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub port: u16,
    pub root: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
        }
    }
}

impl ServeConfig {
    /// Reads positional arguments: `arserve [port] [root]`.
    /// Anything that fails to parse falls back to the defaults.
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let port = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let root = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { port, root }
    }

    /// Bind address covering all local interfaces.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
