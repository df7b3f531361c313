use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

// Connecting a UDP socket never sends a packet; it only asks the OS which
// interface would route to the target. Any public address works as a target.
const PROBE_TARGET: (Ipv4Addr, u16) = (Ipv4Addr::new(8, 8, 8, 8), 80);

/// Best-effort lookup of the LAN-facing IPv4 address, for display only.
/// Returns `None` when the host has no usable route.
pub fn discover() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect(SocketAddr::from(PROBE_TARGET)).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) if !ip.is_loopback() && !ip.is_unspecified() => Some(ip),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_never_panics() {
        // Hosts without a network still have to start up cleanly, so both
        // outcomes are acceptable here.
        if let Some(ip) = discover() {
            assert!(!ip.is_loopback());
            assert!(!ip.is_unspecified());
        }
    }
}
