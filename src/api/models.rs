use serde::{Deserialize, Serialize};

/// A record as the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderRecord {
    pub id: u64,
    pub r#type: String,
    pub name: String,
    pub data: String,
    #[serde(default)]
    pub ttl: u32,
}

#[derive(Debug, Serialize)]
pub struct CreateRecordRequest<'a> {
    pub r#type: &'a str,
    pub name: &'a str,
    pub data: &'a str,
    pub ttl: u32,
}

#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub domain_record: ProviderRecord,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
}
