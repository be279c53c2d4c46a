use super::client::DnsProvider;
use super::models::ProviderRecord;
use crate::dns::ResolvedDnsRecord;
use anyhow::{Context, Result};
use log::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    Adopted(ProviderRecord),
    Created(ProviderRecord),
}

/// Hands resolved records to the provider in order. Records with an import
/// binding are looked up and adopted, never created again.
pub async fn sync_records<P: DnsProvider + ?Sized>(
    provider: &P,
    records: &[ResolvedDnsRecord],
) -> Result<Vec<SyncAction>> {
    let mut actions = Vec::with_capacity(records.len());

    for record in records {
        let action = match record.import_id() {
            Some(import_id) => {
                let existing = provider
                    .get_record(&record.domain, import_id)
                    .await
                    .with_context(|| format!("Failed to adopt {}", record.resource_key))?;
                info!("Adopted {} (id {})", record.resource_key, existing.id);
                SyncAction::Adopted(existing)
            }
            None => match provider.create_record(record).await {
                Ok(created) => {
                    info!("Created {} (id {})", record.resource_key, created.id);
                    SyncAction::Created(created)
                }
                Err(e) => {
                    error!("Failed to create {}: {}", record.resource_key, e);
                    return Err(e.context(format!("Failed to create {}", record.resource_key)));
                }
            },
        };
        actions.push(action);
    }

    Ok(actions)
}
