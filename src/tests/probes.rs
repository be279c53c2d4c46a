#[cfg(test)]
mod tests {
    use crate::validation::probes::*;
    use crate::validation::{Severity, StackOutputs, ValidationRule};
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_dns_resolution_requires_domain() {
        let rule = DomainDnsResolution::default();
        let result = rule.validate(&StackOutputs::new()).await.unwrap();
        assert!(result.is_failure());
        assert_eq!(result.message, "Domain name not found in stack outputs");
    }

    #[tokio::test]
    async fn test_dns_resolution_failure_is_warning() {
        let rule = DomainDnsResolution::new(Duration::from_secs(2));
        let outputs = StackOutputs::new().with("domainName", "does-not-exist.invalid");
        let result = rule.validate(&outputs).await.unwrap();
        assert!(!result.passed);
        assert_eq!(result.severity, Severity::Warning);
    }

    #[tokio::test]
    async fn test_dns_resolution_localhost() {
        let rule = DomainDnsResolution::new(Duration::from_secs(2));
        let outputs = StackOutputs::new().with("domainName", "localhost");
        let result = rule.validate(&outputs).await.unwrap();
        assert_ne!(result.severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_connectivity_any_status_passes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let rule = LoadBalancerConnectivity::with_port(Duration::from_secs(2), server.address().port())
            .unwrap();
        let outputs = StackOutputs::new().with("loadBalancerIp", "127.0.0.1");
        let result = rule.validate(&outputs).await.unwrap();

        assert!(result.passed);
        assert_eq!(result.severity, Severity::Info);
        assert!(result.message.contains("Status: 503"));
    }

    #[tokio::test]
    async fn test_connectivity_timeout_is_warning() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let rule = LoadBalancerConnectivity::with_port(Duration::from_millis(200), server.address().port())
            .unwrap();
        let outputs = StackOutputs::new().with("loadBalancerIp", "127.0.0.1");
        let result = rule.validate(&outputs).await.unwrap();

        assert!(!result.passed);
        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(result.message, "Load balancer connectivity test timed out");
    }

    #[tokio::test]
    async fn test_connectivity_refused_is_warning() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let rule = LoadBalancerConnectivity::with_port(Duration::from_secs(2), port).unwrap();
        let outputs = StackOutputs::new().with("loadBalancerIp", "127.0.0.1");
        let result = rule.validate(&outputs).await.unwrap();

        assert!(!result.passed);
        assert_eq!(result.severity, Severity::Warning);
    }

    #[tokio::test]
    async fn test_connectivity_requires_ip() {
        let rule = LoadBalancerConnectivity::new(Duration::from_secs(1)).unwrap();
        let result = rule.validate(&StackOutputs::new()).await.unwrap();
        assert!(result.is_failure());
    }
}
