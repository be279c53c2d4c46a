use serde::{Deserialize, Serialize};
use std::fmt;

/// TTL applied when a declaration leaves it out. Managed records carry 3601
/// so they can be told apart from hand-made ones at 3600.
pub const DEFAULT_TTL: u32 = 3601;

/// Reserved value that stands for the platform load balancer's address.
pub const LOAD_BALANCER_PLACEHOLDER: &str = "LOAD_BALANCER_IP";

pub const PLATFORM_STACK: &str = "platform";
pub const LOAD_BALANCER_OUTPUT: &str = "loadBalancerIp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Caa,
    Cname,
    Mx,
    Ns,
    Srv,
    Txt,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Caa => "CAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Srv => "SRV",
            RecordType::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a root (`@`) record is named. Both conventions exist among adopted
/// resources and renaming one forces the provider to recreate it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingConvention {
    /// `{domain}---{type}`
    #[default]
    Legacy,
    /// `{domain}-root-{type}`
    Root,
}

/// The value of a record as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawValue", into = "RawValue")]
pub enum RecordValue {
    Literal(String),
    /// Output of another stack, filled in at synthesis time.
    LiveReference { stack: String, output: String },
}

impl RecordValue {
    pub fn load_balancer() -> Self {
        RecordValue::LiveReference {
            stack: PLATFORM_STACK.to_string(),
            output: LOAD_BALANCER_OUTPUT.to_string(),
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Literal(value) => f.write_str(value),
            RecordValue::LiveReference { stack, output } => write!(f, "<{}.{}>", stack, output),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Reference { stack: String, output: String },
}

impl From<RawValue> for RecordValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Text(text) if text == LOAD_BALANCER_PLACEHOLDER => RecordValue::load_balancer(),
            RawValue::Text(text) => RecordValue::Literal(text),
            RawValue::Reference { stack, output } => RecordValue::LiveReference { stack, output },
        }
    }
}

impl From<RecordValue> for RawValue {
    fn from(value: RecordValue) -> Self {
        match value {
            RecordValue::Literal(text) => RawValue::Text(text),
            RecordValue::LiveReference { stack, output }
                if stack == PLATFORM_STACK && output == LOAD_BALANCER_OUTPUT =>
            {
                RawValue::Text(LOAD_BALANCER_PLACEHOLDER.to_string())
            }
            RecordValue::LiveReference { stack, output } => RawValue::Reference { stack, output },
        }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

/// One declared DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DnsRecordSpec {
    pub domain: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: RecordValue,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
    /// Explicit resource key, used verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Appended to the derived key, e.g. `-2` for a second TXT at the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming: Option<NamingConvention>,
}

impl DnsRecordSpec {
    pub fn new(
        domain: impl Into<String>,
        name: impl Into<String>,
        record_type: RecordType,
        value: RecordValue,
    ) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            record_type,
            value,
            ttl: DEFAULT_TTL,
            import_id: None,
            resource_name: None,
            suffix: None,
            naming: None,
        }
    }

    pub fn with_import_id(mut self, import_id: impl Into<String>) -> Self {
        self.import_id = Some(import_id.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = Some(resource_name.into());
        self
    }

    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = Some(naming);
        self
    }
}

impl fmt::Display for DnsRecordSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.domain, self.name, self.record_type, self.value
        )
    }
}

/// A record ready to hand to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDnsRecord {
    pub resource_key: String,
    pub domain: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: String,
    pub ttl: u32,
    /// `{domain},{externalId}` when an existing record is adopted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_binding: Option<String>,
}

impl ResolvedDnsRecord {
    /// The provider-side id from the import binding, if any.
    pub fn import_id(&self) -> Option<&str> {
        self.import_binding
            .as_deref()
            .and_then(|binding| binding.split_once(','))
            .map(|(_, id)| id)
    }
}
