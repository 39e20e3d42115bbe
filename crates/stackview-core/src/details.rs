//! Everything a service detail page shows, derived once per render

use crate::{
    compute_aliases, compute_service_prefix, format_elapsed_time, format_env_as_dotenv,
    pluralize, resolve_service, short_alias, split_image_reference, split_owned_name,
    stack_owned_prefix, ElapsedFormat, EnvVariable, ImageReference, OwnedName, PortMapping,
    Result, ServiceAliases, Stack, UrlRoute,
};

pub const NO_VARIABLES: &str = "No variables in this service";
pub const NO_URL_ROUTES: &str = "No url routes in this service";
pub const NO_EXPOSED_PORTS: &str = "No exposed in this service";
pub const NO_HEALTHCHECK: &str = "No health check";
pub const NO_VOLUMES: &str = "No volumes in this service";
pub const NO_CONFIGS: &str = "No configs in this service";

/// Sections of the service page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Details,
    Source,
    Environment,
    Networking,
    Health,
    Volumes,
    Configs,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Details,
            Section::Source,
            Section::Environment,
            Section::Networking,
            Section::Health,
            Section::Volumes,
            Section::Configs,
        ]
    }

    /// Heading shown above the section
    pub fn title(&self) -> &'static str {
        match self {
            Section::Details => "Details",
            Section::Source => "Source",
            Section::Environment => "Environment variables",
            Section::Networking => "Networking",
            Section::Health => "Health checks",
            Section::Volumes => "Volumes",
            Section::Configs => "Configs",
        }
    }

    /// Label in the side navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Health => "Health check",
            other => other.title(),
        }
    }

    pub fn index(&self) -> usize {
        Section::all()
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Section {
        let all = Section::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Section {
        let all = Section::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthcheckField {
    Interval,
    MaxRetries,
    StartPeriod,
    StartInterval,
}

impl HealthcheckField {
    pub fn label(&self) -> &'static str {
        match self {
            HealthcheckField::Interval => "Interval",
            HealthcheckField::MaxRetries => "Max retries",
            HealthcheckField::StartPeriod => "Start period",
            HealthcheckField::StartInterval => "Start interval",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthcheckRow {
    pub field: HealthcheckField,
    pub value: String,
}

/// Health check command plus the optional rows that are set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthcheckSummary {
    pub command: String,
    pub rows: Vec<HealthcheckRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRow {
    pub name: OwnedName,
    pub kind: String,
    pub target: String,
    pub read_only: bool,
}

impl VolumeRow {
    pub fn access_label(&self) -> &'static str {
        if self.read_only {
            "read only"
        } else {
            "read & write"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRow {
    pub name: OwnedName,
    pub target: String,
    pub content: String,
}

/// Derived display values for one service of a stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDetails {
    /// Compose service name
    pub name: String,
    /// Docker Swarm service ID
    pub id: String,
    /// Swarm service name, split into the stack prefix and the compose name
    pub swarm_name: OwnedName,
    pub image: ImageReference,
    pub environment: Vec<EnvVariable>,
    pub aliases: ServiceAliases,
    pub internal_domain: String,
    pub urls: Vec<UrlRoute>,
    pub ports: Vec<PortMapping>,
    pub healthcheck: Option<HealthcheckSummary>,
    pub volumes: Vec<VolumeRow>,
    pub configs: Vec<ConfigRow>,
}

impl ServiceDetails {
    /// Derive the page for `service_name`, or `ServiceNotFound` when it is not in the stack
    pub fn derive(stack: &Stack, service_name: &str, internal_domain: &str) -> Result<Self> {
        let service = resolve_service(stack, service_name)?;
        let owned_prefix = stack_owned_prefix(stack);

        let urls = stack
            .urls_for(service_name)
            .iter()
            .map(|url| UrlRoute {
                port: url.port.filter(|p| *p > 0),
                ..url.clone()
            })
            .collect();

        let healthcheck = service.healthcheck.as_ref().map(|hc| {
            let long = |secs: u64| format_elapsed_time(secs, ElapsedFormat::Long);
            let rows = [
                (HealthcheckField::Interval, hc.interval_sec.filter(|v| *v > 0).map(long)),
                (
                    HealthcheckField::MaxRetries,
                    hc.retries.filter(|v| *v > 0).map(|v| v.to_string()),
                ),
                (HealthcheckField::StartPeriod, hc.start_period.filter(|v| *v > 0).map(long)),
                (
                    HealthcheckField::StartInterval,
                    hc.start_interval.filter(|v| *v > 0).map(long),
                ),
            ]
            .into_iter()
            .filter_map(|(field, value)| value.map(|value| HealthcheckRow { field, value }))
            .collect();

            HealthcheckSummary {
                command: hc.command.clone(),
                rows,
            }
        });

        let volumes = service
            .volumes
            .iter()
            .map(|v| VolumeRow {
                // Bind mounts never belong to the stack
                name: if v.is_named_volume() {
                    split_owned_name(&v.source, &owned_prefix)
                } else {
                    OwnedName {
                        prefix: None,
                        suffix: v.source.clone(),
                    }
                },
                kind: v.kind.clone(),
                target: v.target.clone(),
                read_only: v.read_only,
            })
            .collect();

        let configs = service
            .configs
            .iter()
            .map(|c| ConfigRow {
                name: split_owned_name(&c.source, &owned_prefix),
                target: c.target.clone(),
                content: c.content.clone(),
            })
            .collect();

        Ok(Self {
            name: service_name.to_string(),
            id: service.id.clone(),
            swarm_name: OwnedName {
                prefix: Some(compute_service_prefix(stack)),
                suffix: service_name.to_string(),
            },
            image: split_image_reference(&service.image),
            environment: service.environment.clone(),
            aliases: compute_aliases(stack, service_name, internal_domain),
            internal_domain: internal_domain.to_string(),
            urls,
            ports: service.ports.clone(),
            healthcheck,
            volumes,
            configs,
        })
    }

    /// Full Docker Swarm service name
    pub fn swarm_service_name(&self) -> String {
        self.swarm_name.full()
    }

    pub fn dotenv(&self) -> String {
        format_env_as_dotenv(&self.environment)
    }

    /// e.g. `3 variables`
    pub fn variable_count_label(&self) -> String {
        let count = self.environment.len();
        format!("{} {}", count, pluralize("variable", count))
    }

    pub fn network_alias_short(&self) -> String {
        short_alias(&self.aliases.network_alias, &self.internal_domain)
    }

    pub fn global_alias_short(&self) -> String {
        short_alias(&self.aliases.global_alias, &self.internal_domain)
    }
}
