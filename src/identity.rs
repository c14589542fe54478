//! Local Host Identity
//!
//! Daemons running on the queried host report their location as the
//! literal `localhost`. Results are rewritten with an address other peers
//! can reach: the first non-loopback IPv4 address the hostname resolves
//! to, else the first non-loopback IPv4 interface, else the fully-qualified
//! host name.

use crate::domain::ports::LocalIdentity;
use if_addrs::{get_if_addrs, IfAddr};
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};
use tracing::{debug, warn};

/// Identity discovered from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl SystemIdentity {
    pub fn new() -> Self {
        Self
    }

    fn hostname() -> String {
        gethostname::gethostname().to_string_lossy().to_string()
    }

    fn resolve(hostname: &str) -> Vec<IpAddr> {
        match (hostname, 0u16).to_socket_addrs() {
            Ok(addrs) => addrs.map(|a| a.ip()).collect(),
            Err(e) => {
                debug!("Failed to resolve {}: {}", hostname, e);
                Vec::new()
            }
        }
    }

    fn interface_addresses() -> Vec<Ipv4Addr> {
        match get_if_addrs() {
            Ok(addrs) => addrs
                .into_iter()
                .filter(|a| !a.is_loopback())
                .filter_map(|a| match a.addr {
                    IfAddr::V4(v4) => Some(v4.ip),
                    IfAddr::V6(_) => None,
                })
                .collect(),
            Err(e) => {
                debug!("Failed to enumerate network interfaces: {}", e);
                Vec::new()
            }
        }
    }

    /// Names the resolved addresses map back to
    fn reverse_names(resolved: &[IpAddr]) -> Vec<String> {
        resolved
            .iter()
            .filter_map(|ip| match dns_lookup::lookup_addr(ip) {
                Ok(name) => Some(name),
                Err(e) => {
                    debug!("Reverse lookup of {} failed: {}", ip, e);
                    None
                }
            })
            .collect()
    }
}

impl LocalIdentity for SystemIdentity {
    fn local_address(&self) -> String {
        let hostname = Self::hostname();
        let resolved = Self::resolve(&hostname);
        let address = match routable_address(&resolved, Self::interface_addresses) {
            Some(ip) => ip.to_string(),
            None => {
                let name = qualified_name(&hostname, Self::reverse_names(&resolved));
                warn!("No routable IPv4 address found, falling back to host name {}", name);
                name
            }
        };
        debug!("Local address for {} is {}", hostname, address);
        address
    }
}

/// First non-loopback IPv4 address of this host
///
/// `interfaces` is only consulted when the hostname yields nothing usable.
pub fn routable_address<F>(resolved: &[IpAddr], interfaces: F) -> Option<Ipv4Addr>
where
    F: FnOnce() -> Vec<Ipv4Addr>,
{
    let from_dns = resolved.iter().find_map(|ip| match ip {
        IpAddr::V4(v4) if v4.octets()[0] != 127 => Some(*v4),
        _ => None,
    });
    from_dns.or_else(|| interfaces().into_iter().find(|ip| !ip.is_loopback()))
}

/// Fully-qualified form of `hostname`
///
/// The first dotted name wins, starting with the hostname itself; a bare
/// hostname is returned when nothing qualifies.
pub fn qualified_name<I>(hostname: &str, names: I) -> String
where
    I: IntoIterator<Item = String>,
{
    if hostname.contains('.') {
        return hostname.to_string();
    }
    names
        .into_iter()
        .find(|name| name.contains('.'))
        .unwrap_or_else(|| hostname.to_string())
}

/// Identity pinned to a known address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdentity {
    address: String,
}

impl FixedIdentity {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl LocalIdentity for FixedIdentity {
    fn local_address(&self) -> String {
        self.address.clone()
    }
}
