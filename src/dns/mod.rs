pub mod errors;
pub mod identity;
pub mod models;
pub mod resolver;

pub use errors::{DnsError, KeyCollision};
pub use identity::{build_import_binding, derive_resource_key};
pub use models::{
    DnsRecordSpec, NamingConvention, RecordType, RecordValue, ResolvedDnsRecord, DEFAULT_TTL,
};
pub use resolver::{group_by_domain, parse_record_list, resolve_value, DnsResolver, ResolutionContext};
