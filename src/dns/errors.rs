//! DNS record resolution errors

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnsError {
    #[error("Invalid DNS record list: {0}")]
    InvalidRecordList(String),

    #[error("No live value for {stack}.{output} required by record {record}")]
    MissingLiveValue {
        record: String,
        stack: String,
        output: String,
    },

    #[error("Duplicate DNS resource keys: {}", format_collisions(.0))]
    Collision(Vec<KeyCollision>),
}

/// Every declaration that derived the same resource key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub resource_key: String,
    /// Positions in the input list, with a short description of each.
    pub records: Vec<(usize, String)>,
}

impl fmt::Display for KeyCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- ", self.resource_key)?;
        let entries: Vec<String> = self
            .records
            .iter()
            .map(|(index, record)| format!("#{} ({})", index, record))
            .collect();
        f.write_str(&entries.join(", "))
    }
}

fn format_collisions(collisions: &[KeyCollision]) -> String {
    collisions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
