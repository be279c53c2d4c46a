#[cfg(test)]
mod tests {
    use crate::validation::rules::*;
    use crate::validation::*;
    use anyhow::Result;
    use serde_json::json;

    fn lb_outputs(ip: &str) -> StackOutputs {
        StackOutputs::new().with("loadBalancerIp", ip)
    }

    async fn run_rule(rule: StaticRule, outputs: &StackOutputs) -> ValidationResult {
        let mut validator = StackValidator::new();
        validator.add_rule(rule);
        validator.validate_stack("test", outputs).await.remove(0).result
    }

    #[test]
    fn test_ip_classification() {
        let cases = [
            ("192.168.1.1", false, Severity::Warning),
            ("8.8.8.8", true, Severity::Info),
            ("999.1.1.1", false, Severity::Error),
            ("10.0.0.1", false, Severity::Warning),
            ("172.32.0.1", true, Severity::Info),
            ("172.20.0.1", false, Severity::Warning),
            ("172.15.255.255", true, Severity::Info),
            ("127.0.0.1", true, Severity::Info),
            ("169.254.1.1", true, Severity::Info),
            ("1.2.3", false, Severity::Error),
            ("1.2.3.4.5", false, Severity::Error),
            ("not-an-ip", false, Severity::Error),
        ];
        for (ip, passed, severity) in cases {
            let result = check_load_balancer_ip(ip);
            assert_eq!(result.passed, passed, "{}", ip);
            assert_eq!(result.severity, severity, "{}", ip);
        }
    }

    #[test]
    fn test_private_ranges_only() {
        assert!(is_private_ipv4("10.255.255.255"));
        assert!(is_private_ipv4("172.16.0.1"));
        assert!(is_private_ipv4("172.31.255.255"));
        assert!(is_private_ipv4("192.168.0.1"));
        assert!(!is_private_ipv4("192.169.0.1"));
        assert!(!is_private_ipv4("11.0.0.1"));
    }

    #[tokio::test]
    async fn test_vpc_missing() {
        let result = run_rule(VPC_EXISTS, &StackOutputs::new()).await;
        assert!(!result.passed);
        assert_eq!(result.severity, Severity::Error);

        let result = run_rule(VPC_EXISTS, &StackOutputs::new().with("vpcId", "")).await;
        assert!(result.is_failure());

        let result = run_rule(VPC_EXISTS, &StackOutputs::new().with("vpcId", "vpc-1")).await;
        assert!(result.passed);
        assert_eq!(result.severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_load_balancer_unwraps_value_objects() {
        let outputs = StackOutputs::new().with("loadBalancerIp", json!({ "value": "8.8.4.4" }));
        let result = run_rule(LOAD_BALANCER_ACCESSIBLE, &outputs).await;
        assert!(result.passed);
        assert!(result.message.contains("8.8.4.4"));

        let outputs = StackOutputs::new().with("loadBalancerIp", json!({ "ip": "8.8.4.4" }));
        let result = run_rule(LOAD_BALANCER_ACCESSIBLE, &outputs).await;
        assert!(result.is_failure());
        assert!(result.message.contains("object"));
    }

    #[tokio::test]
    async fn test_load_balancer_results() {
        let result = run_rule(LOAD_BALANCER_ACCESSIBLE, &StackOutputs::new()).await;
        assert!(result.is_failure());

        let result = run_rule(LOAD_BALANCER_ACCESSIBLE, &lb_outputs("10.1.2.3")).await;
        assert!(!result.passed);
        assert_eq!(result.severity, Severity::Warning);
        assert!(!result.is_failure());
    }

    fn failing_check(_: &StackOutputs) -> Result<ValidationResult> {
        Err(anyhow::anyhow!("boom"))
    }

    fn panicking_check(_: &StackOutputs) -> Result<ValidationResult> {
        panic!("rule exploded")
    }

    #[tokio::test]
    async fn test_rule_errors_are_contained() {
        let mut validator = StackValidator::new();
        validator.add_rule(StaticRule {
            name: "always-errors",
            description: "returns an error",
            check: failing_check,
        });
        validator.add_rule(StaticRule {
            name: "always-panics",
            description: "panics",
            check: panicking_check,
        });
        validator.add_rule(VPC_EXISTS);

        let checks = validator
            .validate_stack("foundation", &StackOutputs::new().with("vpcId", "vpc-1"))
            .await;

        assert_eq!(checks.len(), 3);
        assert_eq!(checks[0].rule, "always-errors");
        assert!(checks[0].result.is_failure());
        assert_eq!(
            checks[0].result.message,
            "Rule \"always-errors\" failed with error: boom"
        );
        assert!(checks[1].result.is_failure());
        assert!(checks[1].result.message.contains("rule exploded"));
        assert_eq!(checks[2].rule, "vpc-exists");
        assert!(checks[2].result.passed);
    }

    #[tokio::test]
    async fn test_platform_rules_end_to_end() {
        let validator = StackValidator::with_rules(platform_rules());
        let outputs = StackOutputs::new()
            .with("domainName", "example.test")
            .with("loadBalancerIp", "203.0.113.10");

        let checks = validator.validate_stack("platform", &outputs).await;
        let summary: Vec<(&str, bool, Severity)> = checks
            .iter()
            .map(|c| (c.rule.as_str(), c.result.passed, c.result.severity))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("domain-ssl-ready", true, Severity::Info),
                ("load-balancer-accessible", true, Severity::Info),
                ("kubernetes-cluster-healthy", false, Severity::Error),
            ]
        );
        assert!(has_failures(&checks));

        let err = ValidationError::check("platform", &checks).unwrap_err();
        let ValidationError::Failed { stack, failures } = err;
        assert_eq!(stack, "platform");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].rule, "kubernetes-cluster-healthy");
    }

    #[tokio::test]
    async fn test_warnings_do_not_fail_run() {
        let validator = StackValidator::with_rules(platform_rules());
        let outputs = StackOutputs::new()
            .with("domainName", "example.test")
            .with("kubernetesClusterId", "k8s-1")
            .with("loadBalancerIp", "192.168.10.10");

        let checks = validator.validate_stack("platform", &outputs).await;
        assert!(!has_failures(&checks));
        assert!(ValidationError::check("platform", &checks).is_ok());
    }

    #[test]
    fn test_report_summary_and_json() {
        let mut report = ValidationReport::new("dev");
        report.record(
            "foundation",
            vec![
                Check {
                    rule: "vpc-exists".into(),
                    result: ValidationResult::pass("ok"),
                },
                Check {
                    rule: "domain-ssl-ready".into(),
                    result: ValidationResult::warning("slow"),
                },
            ],
        );
        assert!(report.passed());
        assert!(report.ensure_passed().is_ok());

        report.record(
            "platform",
            vec![Check {
                rule: "kubernetes-cluster-healthy".into(),
                result: ValidationResult::error("missing"),
            }],
        );
        assert_eq!(report.overall_status, OverallStatus::Failed);
        assert_eq!(
            report.summary,
            Summary {
                passed: 1,
                failed: 1,
                warnings: 1
            }
        );
        assert!(report.render().contains("❌ [platform] kubernetes-cluster-healthy: missing"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["environment"], "dev");
        assert_eq!(json["overallStatus"], "failed");
        assert_eq!(json["summary"]["warnings"], 1);
        assert_eq!(json["checks"][2]["stack"], "platform");
        assert_eq!(json["checks"][2]["severity"], "error");
        assert!(json["timestamp"].is_string());

        let err = report.ensure_passed().unwrap_err();
        assert!(err.to_string().contains("kubernetes-cluster-healthy"));
    }

    #[test]
    fn test_report_save() {
        let dir = tempfile::tempdir().unwrap();
        let report = ValidationReport::new("dev");
        let path = report.save(dir.path()).unwrap();
        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(saved["overallStatus"], "passed");
    }
}
