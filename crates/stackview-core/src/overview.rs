//! Stack overview, the page a missing service redirects to

use crate::{compute_service_prefix, split_image_reference, Stack};

/// One line of the overview listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub name: String,
    pub swarm_name: String,
    /// Repository part of the image, without digest
    pub image: String,
    pub env_count: usize,
    pub url_count: usize,
    pub port_count: usize,
    pub volume_count: usize,
    pub config_count: usize,
    pub has_healthcheck: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOverview {
    pub name: String,
    pub service_prefix: String,
    pub services: Vec<ServiceSummary>,
}

impl StackOverview {
    pub fn from_stack(stack: &Stack) -> Self {
        let service_prefix = compute_service_prefix(stack);
        let services = stack
            .services
            .iter()
            .map(|(name, service)| ServiceSummary {
                name: name.clone(),
                swarm_name: format!("{}{}", service_prefix, name),
                image: split_image_reference(&service.image).repository,
                env_count: service.environment.len(),
                url_count: stack.urls_for(name).len(),
                port_count: service.ports.len(),
                volume_count: service.volumes.len(),
                config_count: service.configs.len(),
                has_healthcheck: service.healthcheck.is_some(),
            })
            .collect();

        Self {
            name: stack.name.clone(),
            service_prefix,
            services,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn position(&self, service_name: &str) -> Option<usize> {
        self.services.iter().position(|s| s.name == service_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{full_stack, stack_named};

    #[test]
    fn test_overview_lists_services_sorted() {
        let overview = StackOverview::from_stack(&full_stack());
        let names: Vec<_> = overview.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["api", "db", "worker"]);
        assert_eq!(overview.service_prefix, "shop_k3f9_");
        assert_eq!(overview.position("db"), Some(1));
        assert_eq!(overview.position("nope"), None);
    }

    #[test]
    fn test_overview_counts() {
        let overview = StackOverview::from_stack(&full_stack());
        let api = &overview.services[0];
        assert_eq!(api.swarm_name, "shop_k3f9_api");
        assert_eq!(api.image, "ghcr.io/shop/api:2.1");
        assert_eq!(api.env_count, 3);
        assert_eq!(api.url_count, 2);
        assert_eq!(api.volume_count, 3);
        assert!(api.has_healthcheck);
    }

    #[test]
    fn test_overview_of_empty_stack() {
        let overview = StackOverview::from_stack(&stack_named("empty", "e1", "empty-net"));
        assert!(overview.is_empty());
    }
}
