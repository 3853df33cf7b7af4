//! Record type names accepted in the `type` query parameter.
//!
//! Upstreams take either the mnemonic or the numeric code, so the query API
//! keeps record types as plain strings; these constants cover the common ones.

pub const A: &str = "A";
pub const AAAA: &str = "AAAA";
pub const CNAME: &str = "CNAME";
pub const MX: &str = "MX";
pub const NS: &str = "NS";
pub const PTR: &str = "PTR";
pub const SOA: &str = "SOA";
pub const SRV: &str = "SRV";
pub const TXT: &str = "TXT";
pub const CAA: &str = "CAA";
pub const DS: &str = "DS";
pub const DNSKEY: &str = "DNSKEY";
pub const HTTPS: &str = "HTTPS";
pub const SVCB: &str = "SVCB";
pub const ANY: &str = "ANY";

/// Numeric code for a record type mnemonic, as used in JSON answers.
pub fn to_u16(name: &str) -> Option<u16> {
    let code = match name.trim().to_ascii_uppercase().as_str() {
        "A" => 1,
        "NS" => 2,
        "CNAME" => 5,
        "SOA" => 6,
        "PTR" => 12,
        "MX" => 15,
        "TXT" => 16,
        "AAAA" => 28,
        "SRV" => 33,
        "DS" => 43,
        "DNSKEY" => 48,
        "SVCB" => 64,
        "HTTPS" => 65,
        "ANY" => 255,
        "CAA" => 257,
        other => return other.parse().ok(),
    };
    Some(code)
}
