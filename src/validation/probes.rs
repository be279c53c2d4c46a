//! Rules that reach out to the deployed infrastructure.
//!
//! Both probes are time-bounded. Lookup and connection failures are
//! reported as warnings since DNS propagation and transient reachability
//! problems are expected right after a deployment.

use super::models::{StackOutputs, ValidationResult};
use super::rule::ValidationRule;
use super::rules::{DOMAIN_NAME, LOAD_BALANCER_IP};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::net::SocketAddr;
use tokio::time::{timeout, Duration};

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves the stack's domain to at least one IPv4 address.
pub struct DomainDnsResolution {
    timeout: Duration,
}

impl DomainDnsResolution {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for DomainDnsResolution {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

#[async_trait]
impl ValidationRule for DomainDnsResolution {
    fn name(&self) -> &str {
        "domain-dns-resolution"
    }

    fn description(&self) -> &str {
        "Verify domain DNS records are properly configured"
    }

    async fn validate(&self, outputs: &StackOutputs) -> Result<ValidationResult> {
        let domain = match outputs.get_string(DOMAIN_NAME) {
            Some(domain) if !domain.is_empty() => domain,
            _ => {
                return Ok(ValidationResult::error(
                    "Domain name not found in stack outputs",
                ))
            }
        };

        debug!("Resolving {} (timeout {:?})", domain, self.timeout);
        let lookup = timeout(self.timeout, tokio::net::lookup_host((domain.as_str(), 80))).await;

        Ok(match lookup {
            Ok(Ok(addrs)) => {
                let v4: Vec<SocketAddr> = addrs.filter(SocketAddr::is_ipv4).collect();
                if v4.is_empty() {
                    ValidationResult::warning(format!(
                        "Domain {} DNS resolution failed: no A records",
                        domain
                    ))
                } else {
                    ValidationResult::pass(format!("Domain {} resolves correctly", domain))
                }
            }
            Ok(Err(e)) => ValidationResult::warning(format!(
                "Domain {} DNS resolution failed: {}",
                domain, e
            )),
            Err(_) => ValidationResult::warning(format!(
                "Domain {} DNS resolution timed out after {:?}",
                domain, self.timeout
            )),
        })
    }
}

/// Sends one HTTP request to the load balancer. Any response counts as
/// reachable, whatever its status.
pub struct LoadBalancerConnectivity {
    client: reqwest::Client,
    port: u16,
}

impl LoadBalancerConnectivity {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_port(timeout, 80)
    }

    pub fn with_port(timeout: Duration, port: u16) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, port })
    }
}

#[async_trait]
impl ValidationRule for LoadBalancerConnectivity {
    fn name(&self) -> &str {
        "load-balancer-connectivity"
    }

    fn description(&self) -> &str {
        "Verify load balancer is responding to HTTP requests"
    }

    async fn validate(&self, outputs: &StackOutputs) -> Result<ValidationResult> {
        let address = match outputs.get_string(LOAD_BALANCER_IP) {
            Some(address) if !address.is_empty() => address,
            _ => {
                return Ok(ValidationResult::error(
                    "Load balancer IP not found in stack outputs",
                ))
            }
        };

        let url = format!("http://{}:{}/", address, self.port);
        debug!("Probing {}", url);

        Ok(match self.client.get(&url).send().await {
            Ok(response) => ValidationResult::pass(format!(
                "Load balancer at {} is responding (Status: {})",
                address,
                response.status().as_u16()
            )),
            Err(e) if e.is_timeout() => {
                ValidationResult::warning("Load balancer connectivity test timed out")
            }
            Err(e) => ValidationResult::warning(format!(
                "Load balancer connectivity test failed: {}",
                e
            )),
        })
    }
}
