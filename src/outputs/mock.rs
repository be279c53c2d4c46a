use super::{OutputSource, StackKind, StackRef};
use crate::validation::StackOutputs;
use anyhow::Result;
use async_trait::async_trait;
use log::info;

/// Fixed outputs shaped like a healthy deployment.
#[derive(Debug, Clone, Default)]
pub struct MockOutputs;

impl MockOutputs {
    pub fn outputs_for(kind: StackKind) -> StackOutputs {
        match kind {
            StackKind::Foundation => StackOutputs::new()
                .with("vpcId", "vpc-fra1-democracy-foundation")
                .with("domainName", "democracy-deutschland.de")
                .with("vpcIpRange", "10.0.0.0/16")
                .with("firewallCount", 2)
                .with("domainCount", 3),
            StackKind::Platform => StackOutputs::new()
                .with("kubernetesClusterId", "k8s-fra1-democracy-platform")
                .with("loadBalancerIp", "159.89.123.45")
                .with("kubernetesVersion", "1.28.2")
                .with("nodeCount", 3)
                .with("domainName", "democracy-app.de"),
        }
    }
}

#[async_trait]
impl OutputSource for MockOutputs {
    async fn fetch(&self, stack: &StackRef) -> Result<StackOutputs> {
        info!("Using mock outputs for {}", stack);
        Ok(Self::outputs_for(stack.kind))
    }
}
