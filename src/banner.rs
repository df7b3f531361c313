use std::fmt::Write;
use std::net::Ipv4Addr;

use crate::config::ServeConfig;

const BAR: &str = "======================================================================";

/// Startup banner with the access URLs. The LAN block is dropped entirely
/// when no local address could be discovered.
pub fn startup(config: &ServeConfig, lan_ip: Option<Ipv4Addr>) -> String {
    let port = config.port;
    let mut out = String::new();

    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(out, "  AR TEST SERVER STARTED");
    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Server running on port {port}");
    let _ = writeln!(out, "Serving [{}]", config.root.display());
    let _ = writeln!(out);
    let _ = writeln!(out, "  Local (this computer):");
    let _ = writeln!(out, "  -> http://localhost:{port}/");
    let _ = writeln!(out, "  -> http://127.0.0.1:{port}/");

    if let Some(ip) = lan_ip {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Mobile/tablet (same WiFi network):");
        let _ = writeln!(out, "  -> http://{ip}:{port}/");
        let _ = writeln!(out);
        let _ = writeln!(out, "  Note: camera access may require HTTPS.");
        let _ = writeln!(
            out,
            "  If the camera does not start, use ngrok or static hosting instead."
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(out, "Press Ctrl+C to stop the server");
    let _ = write!(out, "{BAR}");
    out
}

pub fn shutdown() -> String {
    format!("{BAR}\nServer stopped\n{BAR}")
}

/// Diagnostic for the one bind failure an operator can fix on the spot.
pub fn port_in_use(port: u16) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(out, "ERROR: port {port} is already in use");
    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Try one of these:");
    let _ = writeln!(out, "  1. Stop the process using port {port}");
    let _ = writeln!(out, "  2. Run with a different port: arserve <port>");
    let _ = write!(out, "  3. Wait a moment and try again");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> ServeConfig {
        ServeConfig {
            port: 8000,
            root: PathBuf::from("."),
        }
    }

    #[test]
    fn startup_lists_loopback_urls() {
        let text = startup(&config(), None);
        assert!(text.contains("http://localhost:8000/"));
        assert!(text.contains("http://127.0.0.1:8000/"));
        assert!(text.contains("Press Ctrl+C to stop the server"));
    }

    #[test]
    fn startup_with_lan_ip_adds_mobile_block() {
        let text = startup(&config(), Some(Ipv4Addr::new(192, 168, 1, 23)));
        assert!(text.contains("http://192.168.1.23:8000/"));
        assert!(text.contains("camera access may require HTTPS"));
    }

    #[test]
    fn startup_without_lan_ip_omits_mobile_block() {
        let text = startup(&config(), None);
        assert!(!text.contains("Mobile/tablet"));
        assert!(!text.contains("HTTPS"));
    }

    #[test]
    fn port_in_use_names_the_port() {
        let text = port_in_use(8000);
        assert!(text.contains("port 8000 is already in use"));
        assert!(text.contains("Stop the process using port 8000"));
    }

    #[test]
    fn shutdown_confirms_stop() {
        assert!(shutdown().contains("Server stopped"));
    }
}
