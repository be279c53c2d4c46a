pub mod client;
pub mod digitalocean;
pub mod models;
pub mod sync;

pub use client::DnsProvider;
pub use digitalocean::DigitalOceanClient;
pub use sync::{sync_records, SyncAction};
