//! Plain-text rendering of stack overviews and service pages

use stackview_core::{
    mask_secret, pluralize, Section, ServiceDetails, StackKey, StackOverview,
    NO_CONFIGS, NO_EXPOSED_PORTS, NO_HEALTHCHECK, NO_URL_ROUTES, NO_VARIABLES, NO_VOLUMES,
};

const LABEL_WIDTH: usize = 27;

/// Lines collected for output; trailing whitespace is stripped on finish
#[derive(Default)]
struct Report {
    lines: Vec<String>,
}

impl Report {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn field(&mut self, indent: usize, label: &str, value: &str) {
        let width = (LABEL_WIDTH + 2).saturating_sub(indent);
        self.lines.push(format!(
            "{}{:<width$}{}",
            " ".repeat(indent),
            label,
            value,
            width = width
        ));
    }

    fn section(&mut self, section: Section) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(section.title().to_string());
    }

    fn finish(self) -> String {
        self.lines
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a service page. Secret values stay masked unless `reveal` is set.
pub fn render_service(details: &ServiceDetails, reveal: bool, secret_mask: &str) -> String {
    let mut out = Report::default();

    out.section(Section::Details);
    out.field(2, "Docker Swarm Service Name", &details.swarm_service_name());
    out.field(2, "Docker Swarm Service ID", &details.id);

    out.section(Section::Source);
    out.field(2, "Full Image", &details.image.full());

    out.section(Section::Environment);
    out.line(format!("  {}", details.variable_count_label()));
    if details.environment.is_empty() {
        out.line(format!("  {}", NO_VARIABLES));
    }
    let key_width = details
        .environment
        .iter()
        .map(|env| env.key.len())
        .max()
        .unwrap_or(0);
    for env in &details.environment {
        out.line(format!(
            "  {:<width$}  {}",
            env.key,
            mask_secret(&env.value, reveal, secret_mask),
            width = key_width
        ));
    }

    out.section(Section::Networking);
    out.line("  Network aliases");
    out.field(4, "Environment alias", &details.network_alias_short());
    out.field(4, "Global alias", &details.global_alias_short());
    out.line("  URL Routes");
    if details.urls.is_empty() {
        out.line(format!("    {}", NO_URL_ROUTES));
    }
    for url in &details.urls {
        match url.port {
            Some(port) => out.line(format!("    {} → {}", url.address(), port)),
            None => out.line(format!("    {}", url.address())),
        }
    }
    out.line("  Exposed ports");
    if details.ports.is_empty() {
        out.line(format!("    {}", NO_EXPOSED_PORTS));
    }
    for port in &details.ports {
        out.line(format!(
            "    {} → {} {}",
            port.published, port.target, port.protocol
        ));
    }

    out.section(Section::Health);
    match &details.healthcheck {
        Some(hc) => {
            out.field(2, "Command:", &hc.command);
            for row in &hc.rows {
                out.field(2, &format!("{}:", row.field.label()), &row.value);
            }
        }
        None => out.line(format!("  {}", NO_HEALTHCHECK)),
    }

    out.section(Section::Volumes);
    if details.volumes.is_empty() {
        out.line(format!("  {}", NO_VOLUMES));
    }
    for volume in &details.volumes {
        out.line(format!(
            "  [{}] {} → {} ({})",
            volume.kind,
            volume.name.full(),
            volume.target,
            volume.access_label()
        ));
    }

    out.section(Section::Configs);
    if details.configs.is_empty() {
        out.line(format!("  {}", NO_CONFIGS));
    }
    for config in &details.configs {
        out.line(format!("  {} → {}", config.name.full(), config.target));
    }

    out.finish()
}

/// Render the stack overview shown when no service (or an unknown one) is requested
pub fn render_overview(key: &StackKey, overview: &StackOverview) -> String {
    let mut out = Report::default();
    let count = overview.services.len();
    out.line(key.to_string());
    out.line(format!("{} {}", count, pluralize("service", count)));
    out.line("");

    if overview.is_empty() {
        out.line("  No services in this stack");
        return out.finish();
    }

    let name_width = overview.services.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let swarm_width = overview
        .services
        .iter()
        .map(|s| s.swarm_name.len())
        .max()
        .unwrap_or(0);
    for service in &overview.services {
        out.line(format!(
            "  {:<nw$}  {:<sw$}  {}",
            service.name,
            service.swarm_name,
            service.image,
            nw = name_width,
            sw = swarm_width
        ));
    }

    out.finish()
}

/// Short aliases, or fully qualified ones with `full`
pub fn render_aliases(details: &ServiceDetails, full: bool) -> String {
    let (network, global) = if full {
        (
            details.aliases.network_alias.clone(),
            details.aliases.global_alias.clone(),
        )
    } else {
        (details.network_alias_short(), details.global_alias_short())
    };

    format!(
        "{:<19}{}\n{:<19}{}",
        "Environment alias", network, "Global alias", global
    )
}
