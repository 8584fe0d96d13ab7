use std::io;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use tracing::debug;

/// Address of the interface that would route to `probe`, for display only.
///
/// Connecting a UDP socket sends nothing; it only asks the kernel to pick a
/// route. Any failure falls back to loopback.
pub fn local_ip(probe: &str) -> IpAddr {
    match outbound_ip(probe) {
        Ok(ip) => ip,
        Err(e) => {
            debug!(probe, error = %e, "local address discovery failed, using loopback");
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }
}

fn outbound_ip(probe: &str) -> io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(probe)?;
    let ip = socket.local_addr()?.ip();
    if ip.is_unspecified() {
        return Err(io::Error::new(io::ErrorKind::AddrNotAvailable, "no route"));
    }
    Ok(ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_probe_falls_back_to_loopback() {
        assert_eq!(local_ip("not an address"), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn loopback_probe_resolves_to_loopback() {
        assert!(local_ip("127.0.0.1:9").is_loopback());
    }
}
