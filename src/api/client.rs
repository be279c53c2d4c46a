use super::models::ProviderRecord;
use crate::dns::ResolvedDnsRecord;
use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait DnsProvider: Send + Sync {
    async fn get_record(&self, domain: &str, record_id: &str) -> Result<ProviderRecord>;
    async fn create_record(&self, record: &ResolvedDnsRecord) -> Result<ProviderRecord>;
}
