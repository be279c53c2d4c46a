#[cfg(test)]
mod tests {
    use crate::config::{load_config, parse_config};
    use crate::dns::NamingConvention;
    use crate::outputs::StackKind;
    use std::fs;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    const CONFIG: &str = r#"
        environment: dev
        naming_convention: root
        probe_timeout_secs: 8
        report_dir: reports
        stacks:
          organization: democracy
          foundation: democracy-foundation
          platform: democracy-platform
        provider:
          api_token: "test_token"
        dns_records:
          value:
            - domain: democracy-app.de
              name: "@"
              type: A
              value: LOAD_BALANCER_IP
    "#;

    #[test]
    fn test_config_deserialization() {
        let config = parse_config(CONFIG).unwrap();
        assert_eq!(config.environment, "dev");
        assert_eq!(config.naming_convention, NamingConvention::Root);
        assert_eq!(config.probe_timeout(), Duration::from_secs(8));
        let provider = config.provider.as_ref().unwrap();
        assert_eq!(provider.api_token, "test_token");
        assert_eq!(provider.base_url, "https://api.digitalocean.com/v2");

        let stack = config.stack_ref(StackKind::Platform, None);
        assert_eq!(stack.to_string(), "democracy/democracy-platform/dev");
        let stack = config.stack_ref(StackKind::Foundation, Some("production"));
        assert_eq!(stack.to_string(), "democracy/democracy-foundation/production");
    }

    #[test]
    fn test_config_defaults() {
        let config = parse_config("environment: staging").unwrap();
        assert_eq!(config.naming_convention, NamingConvention::Legacy);
        assert_eq!(config.probe_timeout_secs, 5);
        assert!(config.provider.is_none());
        assert!(config.dns_records.is_null());
        assert_eq!(
            config.stack_ref(StackKind::Foundation, None).to_string(),
            "democracy-foundation/staging"
        );
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config("naming_convention: legacy").is_err());
        assert!(parse_config("environment: \"\"").is_err());
        assert!(parse_config("environment: dev\nprobe_timeout_secs: 0").is_err());
        assert!(parse_config("environment: dev\nprovider:\n  api_token: \"\"").is_err());
        assert!(parse_config("environment: dev\nnaming_convention: newest").is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, CONFIG).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.environment, "dev");

        let missing = load_config(std::path::Path::new("/nonexistent/config.yaml"));
        assert!(missing.unwrap_err().to_string().contains("Failed to open config file"));
    }

    #[test]
    fn test_example_config_resolves() {
        let config = parse_config(include_str!("../../config.example.yaml")).unwrap();
        let context = crate::dns::ResolutionContext::new().with_value(
            "platform",
            "loadBalancerIp",
            "203.0.113.10",
        );
        let records = crate::runner::resolve_config_records(&config, &context).unwrap();
        let keys: Vec<&str> = records.iter().map(|r| r.resource_key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "democracy-app.de---a",
                "democracy-app.de-www-cname",
                "democracy-app.de-star-api-a",
                "democracy-app.de---txt",
                "democracy-app.de---txt-2",
            ]
        );
        assert_eq!(
            records[0].import_binding.as_deref(),
            Some("democracy-app.de,123456789")
        );
    }
}
