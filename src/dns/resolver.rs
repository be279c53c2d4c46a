use super::errors::{DnsError, KeyCollision};
use super::identity::{build_import_binding, derive_resource_key};
use super::models::{DnsRecordSpec, NamingConvention, RecordValue, ResolvedDnsRecord};
use crate::validation::StackOutputs;
use log::{debug, info};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Live values from other stacks, keyed by stack and output name.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    values: HashMap<(String, String), String>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        stack: impl Into<String>,
        output: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.values
            .insert((stack.into(), output.into()), value.into());
    }

    pub fn with_value(
        mut self,
        stack: impl Into<String>,
        output: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(stack, output, value);
        self
    }

    /// Copies every output of `stack` that coerces to a string.
    pub fn extend_from_outputs(&mut self, stack: &str, outputs: &StackOutputs) {
        for key in outputs.keys() {
            if let Some(value) = outputs.get_string(key) {
                self.insert(stack, key.as_str(), value);
            }
        }
    }

    pub fn get(&self, stack: &str, output: &str) -> Option<&str> {
        self.values
            .get(&(stack.to_string(), output.to_string()))
            .map(String::as_str)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordEnvelope {
    value: Vec<DnsRecordSpec>,
}

/// Accepts a bare list of declarations or one wrapped as `{value: [...]}`.
pub fn parse_record_list(raw: serde_yaml::Value) -> Result<Vec<DnsRecordSpec>, DnsError> {
    let invalid = |e: serde_yaml::Error| DnsError::InvalidRecordList(e.to_string());
    match raw {
        serde_yaml::Value::Null => Err(DnsError::InvalidRecordList(
            "no DNS records configured".to_string(),
        )),
        serde_yaml::Value::Sequence(_) => serde_yaml::from_value(raw).map_err(invalid),
        serde_yaml::Value::Mapping(_) => serde_yaml::from_value::<RecordEnvelope>(raw)
            .map(|envelope| envelope.value)
            .map_err(invalid),
        other => Err(DnsError::InvalidRecordList(format!(
            "expected a list of records or {{value: [...]}}, found {:?}",
            other
        ))),
    }
}

/// Literal values pass through; live references are looked up in `context`.
pub fn resolve_value(spec: &DnsRecordSpec, context: &ResolutionContext) -> Result<String, DnsError> {
    match &spec.value {
        RecordValue::Literal(value) => Ok(value.clone()),
        RecordValue::LiveReference { stack, output } => context
            .get(stack, output)
            .map(str::to_string)
            .ok_or_else(|| DnsError::MissingLiveValue {
                record: format!("{} {} {}", spec.domain, spec.name, spec.record_type),
                stack: stack.clone(),
                output: output.clone(),
            }),
    }
}

pub struct DnsResolver {
    convention: NamingConvention,
}

impl DnsResolver {
    /// `convention` applies to root records that don't pick their own.
    pub fn new(convention: NamingConvention) -> Self {
        Self { convention }
    }

    pub fn resolve(
        &self,
        spec: &DnsRecordSpec,
        context: &ResolutionContext,
    ) -> Result<ResolvedDnsRecord, DnsError> {
        let value = resolve_value(spec, context)?;
        let resource_key = derive_resource_key(spec, self.convention);
        let import_binding = build_import_binding(spec);

        Ok(ResolvedDnsRecord {
            resource_key,
            domain: spec.domain.clone(),
            name: spec.name.clone(),
            record_type: spec.record_type,
            value,
            ttl: spec.ttl,
            import_binding,
        })
    }

    /// Resolves every declaration in order.
    ///
    /// Nothing is returned unless all values resolve and every resource key
    /// is unique; a collision reports all declarations sharing a key.
    pub fn resolve_all(
        &self,
        specs: &[DnsRecordSpec],
        context: &ResolutionContext,
    ) -> Result<Vec<ResolvedDnsRecord>, DnsError> {
        let mut by_key: BTreeMap<String, Vec<(usize, String)>> = BTreeMap::new();
        for (index, spec) in specs.iter().enumerate() {
            by_key
                .entry(derive_resource_key(spec, self.convention))
                .or_default()
                .push((index, spec.to_string()));
        }

        let collisions: Vec<KeyCollision> = by_key
            .into_iter()
            .filter(|(_, records)| records.len() > 1)
            .map(|(resource_key, records)| KeyCollision {
                resource_key,
                records,
            })
            .collect();
        if !collisions.is_empty() {
            return Err(DnsError::Collision(collisions));
        }

        let resolved = specs
            .iter()
            .map(|spec| self.resolve(spec, context))
            .collect::<Result<Vec<_>, _>>()?;

        for record in &resolved {
            if let Some(binding) = &record.import_binding {
                info!(
                    "Importing DNS record: {} with import ID: {}",
                    record.resource_key, binding
                );
            }
        }
        debug!("Resolved {} DNS records", resolved.len());
        Ok(resolved)
    }
}

/// Read-only view of resolved records per domain, for display.
pub fn group_by_domain(records: &[ResolvedDnsRecord]) -> BTreeMap<&str, Vec<&ResolvedDnsRecord>> {
    let mut groups: BTreeMap<&str, Vec<&ResolvedDnsRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.domain.as_str()).or_default().push(record);
    }
    groups
}
