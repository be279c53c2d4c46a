use super::{client::DnsProvider, models::*};
use crate::config::models::DIGITALOCEAN_API_URL;
use crate::dns::ResolvedDnsRecord;
use anyhow::Result;
use async_trait::async_trait;

pub struct DigitalOceanClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
}

#[async_trait]
impl DnsProvider for DigitalOceanClient {
    async fn get_record(&self, domain: &str, record_id: &str) -> Result<ProviderRecord> {
        let response = self
            .client
            .get(format!(
                "{}/domains/{}/records/{}",
                self.base_url, domain, record_id
            ))
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        Self::parse_record(response).await
    }

    async fn create_record(&self, record: &ResolvedDnsRecord) -> Result<ProviderRecord> {
        let response = self
            .client
            .post(format!("{}/domains/{}/records", self.base_url, record.domain))
            .bearer_auth(&self.api_token)
            .json(&CreateRecordRequest {
                r#type: record.record_type.as_str(),
                name: &record.name,
                data: &record.value,
                ttl: record.ttl,
            })
            .send()
            .await?;

        Self::parse_record(response).await
    }
}

impl DigitalOceanClient {
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, DIGITALOCEAN_API_URL.to_string())
    }

    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn parse_record(response: reqwest::Response) -> Result<ProviderRecord> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| format!("{}: {}", e.id, e.message))
                .unwrap_or(text);
            return Err(anyhow::anyhow!(
                "DNS API request failed ({}): {}",
                status,
                message
            ));
        }

        let parsed: RecordResponse = serde_json::from_str(&text).map_err(|e| {
            anyhow::anyhow!("Failed to parse API response: {}. Response: {}", e, text)
        })?;
        Ok(parsed.domain_record)
    }
}
