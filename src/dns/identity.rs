use super::models::{DnsRecordSpec, NamingConvention};

/// Stable resource key for a declaration.
///
/// An explicit `resourceName` wins. Otherwise the key is built from the
/// domain, the record name and the lowercased type:
///
/// - `@` becomes `{domain}---{type}` or `{domain}-root-{type}` depending on
///   the convention in effect (the record's own, else `default`)
/// - `*.sub` becomes `{domain}-star-sub-{type}`
/// - anything else has its dots replaced by dashes
///
/// A `suffix` is appended to derived keys as given.
pub fn derive_resource_key(spec: &DnsRecordSpec, default: NamingConvention) -> String {
    if let Some(resource_name) = &spec.resource_name {
        return resource_name.clone();
    }

    let record_type = spec.record_type.as_str().to_lowercase();
    let mut key = if spec.name == "@" {
        match spec.naming.unwrap_or(default) {
            NamingConvention::Legacy => format!("{}---{}", spec.domain, record_type),
            NamingConvention::Root => format!("{}-root-{}", spec.domain, record_type),
        }
    } else if let Some(rest) = spec.name.strip_prefix("*.") {
        format!("{}-star-{}-{}", spec.domain, rest, record_type)
    } else {
        format!(
            "{}-{}-{}",
            spec.domain,
            spec.name.replace('.', "-"),
            record_type
        )
    };

    if let Some(suffix) = &spec.suffix {
        key.push_str(suffix);
    }
    key
}

/// `{domain},{importId}` when the record adopts an existing one.
pub fn build_import_binding(spec: &DnsRecordSpec) -> Option<String> {
    spec.import_id
        .as_ref()
        .map(|import_id| format!("{},{}", spec.domain, import_id))
}
