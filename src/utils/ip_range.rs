use std::net::{AddrParseError, Ipv4Addr, Ipv6Addr};

pub fn ipv4_to_int(address: &str) -> Result<u32, AddrParseError> {
    let address: Ipv4Addr = address.trim().parse()?;
    Ok(u32::from(address))
}

/// Accepts a bare address or a prefix such as `2001:db8::/64`; the prefix
/// length is ignored.
pub fn ipv6_to_int(address: &str) -> Result<u128, AddrParseError> {
    let address = address.trim();
    let address = address.split_once('/').map_or(address, |(addr, _)| addr);
    let address: Ipv6Addr = address.parse()?;
    Ok(u128::from(address))
}

/// Decimal form of an IPv4 range bound. A bound already given as a decimal
/// `u32` is kept as is.
pub fn ipv4_bound_to_decimal(bound: &str) -> Result<String, AddrParseError> {
    let bound = bound.trim();
    if let Some(value) = decimal::<u32>(bound) {
        return Ok(value.to_string());
    }
    ipv4_to_int(bound).map(|value| value.to_string())
}

/// Decimal form of an IPv6 range bound. A bound already given as a decimal
/// `u128` is kept as is.
pub fn ipv6_bound_to_decimal(bound: &str) -> Result<String, AddrParseError> {
    let bound = bound.trim();
    if let Some(value) = decimal::<u128>(bound) {
        return Ok(value.to_string());
    }
    ipv6_to_int(bound).map(|value| value.to_string())
}

fn decimal<T: std::str::FromStr>(bound: &str) -> Option<T> {
    if bound.is_empty() || !bound.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    bound.parse().ok()
}
