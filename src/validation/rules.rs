//! Rules that only inspect stack outputs.

use super::models::{kind_of, StackOutputs, ValidationResult};
use super::rule::{StaticRule, ValidationRule};
use anyhow::Result;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

pub const VPC_ID: &str = "vpcId";
pub const DOMAIN_NAME: &str = "domainName";
pub const KUBERNETES_CLUSTER_ID: &str = "kubernetesClusterId";
pub const LOAD_BALANCER_IP: &str = "loadBalancerIp";

static IPV4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("IPv4 pattern is valid")
});

pub fn is_valid_ipv4(address: &str) -> bool {
    IPV4_REGEX.is_match(address)
}

/// 10/8, 172.16/12 and 192.168/16. Loopback and link-local are not
/// considered.
pub fn is_private_ipv4(address: &str) -> bool {
    let octets: Vec<u8> = address
        .split('.')
        .filter_map(|part| part.parse().ok())
        .collect();
    match octets.as_slice() {
        [10, ..] => true,
        [172, second, ..] => (16..=31).contains(second),
        [192, 168, ..] => true,
        _ => false,
    }
}

/// Format and range check for a load balancer address.
pub fn check_load_balancer_ip(address: &str) -> ValidationResult {
    if !is_valid_ipv4(address) {
        return ValidationResult::error(format!(
            "Load balancer IP format is invalid: {}",
            address
        ));
    }
    if is_private_ipv4(address) {
        return ValidationResult::warning(format!(
            "Load balancer IP appears to be private: {}",
            address
        ));
    }
    ValidationResult::pass(format!(
        "Load balancer IP is valid and accessible: {}",
        address
    ))
}

fn vpc_exists(outputs: &StackOutputs) -> Result<ValidationResult> {
    if !outputs.is_present(VPC_ID) {
        return Ok(ValidationResult::error("VPC ID not found in stack outputs"));
    }
    Ok(ValidationResult::pass("VPC exists and is properly configured"))
}

fn domain_ssl_ready(outputs: &StackOutputs) -> Result<ValidationResult> {
    if !outputs.is_present(DOMAIN_NAME) {
        return Ok(ValidationResult::error(
            "Domain name not found in stack outputs",
        ));
    }
    Ok(ValidationResult::pass("Domain is configured for SSL"))
}

fn kubernetes_cluster_healthy(outputs: &StackOutputs) -> Result<ValidationResult> {
    if !outputs.is_present(KUBERNETES_CLUSTER_ID) {
        return Ok(ValidationResult::error(
            "Kubernetes cluster ID not found in stack outputs",
        ));
    }
    Ok(ValidationResult::pass("Kubernetes cluster is healthy"))
}

fn load_balancer_accessible(outputs: &StackOutputs) -> Result<ValidationResult> {
    let raw = match outputs.get(LOAD_BALANCER_IP) {
        Some(value) if outputs.is_present(LOAD_BALANCER_IP) => value,
        _ => {
            return Ok(ValidationResult::error(
                "Load balancer IP not found in stack outputs",
            ))
        }
    };

    match outputs.get_string(LOAD_BALANCER_IP) {
        Some(address) if !matches!(raw, Value::Bool(_)) => Ok(check_load_balancer_ip(&address)),
        _ => Ok(ValidationResult::error(format!(
            "Load balancer IP is not a valid string: {}",
            kind_of(raw)
        ))),
    }
}

pub const VPC_EXISTS: StaticRule = StaticRule {
    name: "vpc-exists",
    description: "Verify VPC is created and has valid IP range",
    check: vpc_exists,
};

pub const DOMAIN_SSL_READY: StaticRule = StaticRule {
    name: "domain-ssl-ready",
    description: "Verify domain is configured and SSL-ready",
    check: domain_ssl_ready,
};

pub const KUBERNETES_CLUSTER_HEALTHY: StaticRule = StaticRule {
    name: "kubernetes-cluster-healthy",
    description: "Verify Kubernetes cluster is healthy and accessible",
    check: kubernetes_cluster_healthy,
};

pub const LOAD_BALANCER_ACCESSIBLE: StaticRule = StaticRule {
    name: "load-balancer-accessible",
    description: "Verify load balancer has public IP and is accessible",
    check: load_balancer_accessible,
};

pub fn foundation_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![Box::new(VPC_EXISTS), Box::new(DOMAIN_SSL_READY)]
}

pub fn platform_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(DOMAIN_SSL_READY),
        Box::new(LOAD_BALANCER_ACCESSIBLE),
        Box::new(KUBERNETES_CLUSTER_HEALTHY),
    ]
}
