//! Client-IP resolution, privacy-preserving anonymization, and coarse geo
//! header lookup for inbound contact submissions.
//!
//! The site runs behind a CDN/proxy, so the client address arrives in
//! headers, not the socket peer. Resolution consults direct-client headers
//! first, then walks the `x-forwarded-for` chain preferring the first
//! public address. Everything here is total: malformed input yields `None`,
//! never an error.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// Headers that carry the client address directly, in priority order.
pub const DIRECT_IP_HEADERS: &[&str] = &["cf-connecting-ip", "x-real-ip"];

/// Header carrying the comma-separated proxy chain.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Coarse geo headers, in priority order. Proxy-dependent and optional.
pub const GEO_COUNTRY_HEADERS: &[&str] = &["cf-ipcountry", "x-vercel-ip-country"];
pub const GEO_REGION_HEADERS: &[&str] = &["x-vercel-ip-country-region"];
pub const GEO_CITY_HEADERS: &[&str] = &["x-vercel-ip-city"];

/// Parse a single header token into an IP address.
///
/// Tolerates surrounding whitespace, `[addr]:port` bracket notation, a
/// trailing `:port` on IPv4, and IPv6 zone identifiers (`fe80::1%eth0`).
pub fn parse_ip(raw: &str) -> Option<IpAddr> {
    let mut s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Bracketed IPv6, with or without a port.
    if s.starts_with('[') {
        if let Ok(sock) = s.parse::<SocketAddr>() {
            return Some(sock.ip());
        }
        s = s.strip_prefix('[')?;
        s = match s.find(']') {
            Some(end) => &s[..end],
            None => return None,
        };
    }

    // Zone identifier (link-local scope id) is not part of the address.
    if let Some(pct) = s.find('%') {
        s = &s[..pct];
    }

    if let Ok(ip) = s.parse::<IpAddr>() {
        return Some(ip);
    }

    // IPv4 with a port suffix ("203.0.113.9:51234").
    if let Ok(sock) = s.parse::<SocketAddr>() {
        return Some(sock.ip());
    }

    None
}

/// Whether an address falls in a private or reserved range.
///
/// Covers RFC1918, loopback, link-local, CGNAT (100.64/10), IPv6
/// unique-local (fc00::/7), and IPv4-mapped IPv6 forms of the same.
pub fn is_private(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_private_v4(v4),
        IpAddr::V6(v6) => {
            if let Some(mapped) = v6.to_ipv4_mapped() {
                return is_private_v4(&mapped);
            }
            let seg0 = v6.segments()[0];
            v6.is_loopback()
                || v6.is_unspecified()
                // unique-local fc00::/7
                || (seg0 & 0xfe00) == 0xfc00
                // link-local fe80::/10
                || (seg0 & 0xffc0) == 0xfe80
        }
    }
}

fn is_private_v4(ip: &Ipv4Addr) -> bool {
    let [a, b, _, _] = ip.octets();
    ip.is_private()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_unspecified()
        // CGNAT 100.64.0.0/10
        || (a == 100 && (64..=127).contains(&b))
}

/// Resolve the client IP from proxy-supplied header values.
///
/// `direct` holds the raw values of [`DIRECT_IP_HEADERS`] that were present,
/// in priority order; `forwarded` is the raw `x-forwarded-for` value. The
/// first parseable direct header wins. Within the forwarded chain the first
/// public address wins, falling back to the first parseable entry when the
/// whole chain is private.
pub fn resolve_client_ip<'a, I>(direct: I, forwarded: Option<&str>) -> Option<IpAddr>
where
    I: IntoIterator<Item = &'a str>,
{
    for value in direct {
        if let Some(ip) = parse_ip(value) {
            return Some(ip);
        }
    }

    let chain = forwarded?;
    let mut first_parsed = None;
    for entry in chain.split(',') {
        if let Some(ip) = parse_ip(entry) {
            if !is_private(&ip) {
                return Some(ip);
            }
            if first_parsed.is_none() {
                first_parsed = Some(ip);
            }
        }
    }
    first_parsed
}

/// Anonymize an address by zeroing its most specific bits.
///
/// IPv4 keeps the first three octets (/24). IPv6 is expanded to eight
/// zero-padded hextets (resolving `::` compression and embedded IPv4
/// tails) and keeps the first three (/48). One-way and lossy: the
/// original address cannot be reconstructed from the result.
pub fn anonymize_ip(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => {
            let [a, b, c, _] = v4.octets();
            format!("{a}.{b}.{c}.0")
        }
        IpAddr::V6(v6) => anonymize_v6(v6),
    }
}

fn anonymize_v6(ip: &Ipv6Addr) -> String {
    let seg = ip.segments();
    format!(
        "{:04x}:{:04x}:{:04x}:0000:0000:0000:0000:0000",
        seg[0], seg[1], seg[2]
    )
}
