use crate::config::Config;
use crate::dns::models::PLATFORM_STACK;
use crate::dns::{parse_record_list, DnsError, DnsResolver, ResolutionContext, ResolvedDnsRecord};
use crate::outputs::{OutputSource, StackKind};
use crate::validation::probes::{DomainDnsResolution, LoadBalancerConnectivity};
use crate::validation::rules::{foundation_rules, platform_rules};
use crate::validation::{Check, StackValidator, ValidationReport};
use anyhow::Result;
use clap::ValueEnum;
use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationMode {
    /// Offline outputs, output-only rules.
    Mock,
    /// Deployed outputs, output-only rules.
    Live,
    /// Deployed outputs plus DNS and HTTP probes.
    Deployment,
}

impl ValidationMode {
    pub fn uses_live_outputs(&self) -> bool {
        !matches!(self, ValidationMode::Mock)
    }

    pub fn probes(&self) -> bool {
        matches!(self, ValidationMode::Deployment)
    }

    /// Fails for `mock`, whose fabricated outputs must never reach a provider.
    pub fn ensure_live_outputs(&self, command: &str) -> Result<()> {
        if self.uses_live_outputs() {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "{} needs live stack outputs, run it with --mode live or --mode deployment",
                command
            ))
        }
    }
}

pub struct InfrastructureValidator<'a> {
    config: &'a Config,
    source: &'a dyn OutputSource,
    probes: bool,
}

impl<'a> InfrastructureValidator<'a> {
    pub fn new(config: &'a Config, source: &'a dyn OutputSource, mode: ValidationMode) -> Self {
        Self {
            config,
            source,
            probes: mode.probes(),
        }
    }

    /// A fresh validator holding the rule set for `kind`.
    pub fn validator_for(&self, kind: StackKind) -> Result<StackValidator> {
        let timeout = self.config.probe_timeout();
        match kind {
            StackKind::Foundation => {
                let mut validator = StackValidator::with_rules(foundation_rules());
                if self.probes {
                    validator.add_rule(DomainDnsResolution::new(timeout));
                }
                Ok(validator)
            }
            StackKind::Platform => {
                let mut validator = StackValidator::with_rules(platform_rules());
                if self.probes {
                    validator.add_rule(LoadBalancerConnectivity::new(timeout)?);
                }
                Ok(validator)
            }
        }
    }

    pub async fn validate_stack(&self, kind: StackKind, stack_name: Option<&str>) -> Result<Vec<Check>> {
        let stack = self.config.stack_ref(kind, stack_name);
        info!("Validating {} stack: {}", kind.label(), stack);

        let outputs = self.source.fetch(&stack).await.map_err(|e| {
            error!("Failed to fetch outputs of {}: {}", stack, e);
            e
        })?;
        let validator = self.validator_for(kind)?;
        Ok(validator.validate_stack(kind.label(), &outputs).await)
    }

    /// Foundation then platform, collected into one report. Failed checks
    /// don't stop the run; inspect the report with `ensure_passed`.
    pub async fn validate_all(&self, stack_name: Option<&str>) -> Result<ValidationReport> {
        let environment = stack_name.unwrap_or(self.config.environment.as_ref());
        let mut report = ValidationReport::new(environment);

        for kind in [StackKind::Foundation, StackKind::Platform] {
            let checks = self.validate_stack(kind, stack_name).await?;
            report.record(kind.label(), checks);
        }

        if report.passed() {
            info!("All infrastructure validation passed");
        } else {
            error!("Infrastructure validation failed");
        }
        Ok(report)
    }
}

/// Resolves the records declared in `config` with its naming convention.
pub fn resolve_config_records(
    config: &Config,
    context: &ResolutionContext,
) -> Result<Vec<ResolvedDnsRecord>, DnsError> {
    let specs = parse_record_list(config.dns_records.clone())?;
    DnsResolver::new(config.naming_convention).resolve_all(&specs, context)
}

/// Live values for record resolution, read once from the platform stack.
pub async fn platform_context(
    config: &Config,
    source: &dyn OutputSource,
    stack_name: Option<&str>,
) -> Result<ResolutionContext> {
    let stack = config.stack_ref(StackKind::Platform, stack_name);
    let outputs = source.fetch(&stack).await?;
    let mut context = ResolutionContext::new();
    context.extend_from_outputs(PLATFORM_STACK, &outputs);
    Ok(context)
}
