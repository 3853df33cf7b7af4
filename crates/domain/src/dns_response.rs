use crate::errors::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// A DNS answer in the `application/dns-json` shape served by public DoH
/// resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct DnsResponse {
    /// Adapter that produced this answer. Never trusted from the wire.
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,

    /// Absent means 0, like any other unset field.
    #[serde(rename = "Status", default, deserialize_with = "null_as_default")]
    pub status: i32,

    #[serde(rename = "TC", default, deserialize_with = "null_as_default")]
    pub truncated: bool,

    #[serde(rename = "RD", default, deserialize_with = "null_as_default")]
    pub recursion_desired: bool,

    #[serde(rename = "RA", default, deserialize_with = "null_as_default")]
    pub recursion_available: bool,

    #[serde(rename = "AD", default, deserialize_with = "null_as_default")]
    pub authenticated_data: bool,

    #[serde(rename = "CD", default, deserialize_with = "null_as_default")]
    pub checking_disabled: bool,

    #[serde(rename = "Question", default, deserialize_with = "null_as_default")]
    pub question: Vec<DnsQuestion>,

    #[serde(rename = "Answer", default, deserialize_with = "null_as_default")]
    pub answer: Vec<DnsAnswer>,

    #[serde(rename = "Authority", default, deserialize_with = "null_as_default")]
    pub authority: Vec<DnsAnswer>,

    #[serde(rename = "Additional", default, deserialize_with = "null_as_default")]
    pub additional: Vec<DnsAnswer>,

    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edns_client_subnet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsAnswer {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL", default, deserialize_with = "null_as_default")]
    pub ttl: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: String,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DnsResponse {
    /// Decodes a JSON body. Absent or `null` fields take their zero value.
    pub fn from_json(body: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(body).map_err(|e| DomainError::Decode(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// `data` of every answer record whose type matches `record_type`.
    pub fn answer_data(&self, record_type: u16) -> impl Iterator<Item = &str> {
        self.answer
            .iter()
            .filter(move |a| a.record_type == record_type)
            .map(|a| a.data.as_str())
    }

    pub fn min_ttl(&self) -> Option<u32> {
        self.answer.iter().map(|a| a.ttl).min()
    }
}
