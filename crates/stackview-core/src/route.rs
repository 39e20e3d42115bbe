//! Route resolution: show a service, or fall back to its stack

use crate::{CoreError, Result, ServiceDetails, Stack, StackKey};

/// Address of a service detail page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceRoute {
    pub stack: StackKey,
    pub service: String,
}

impl ServiceRoute {
    pub fn new(stack: StackKey, service: impl Into<String>) -> Self {
        Self {
            stack,
            service: service.into(),
        }
    }
}

/// Where a service route ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Service(Box<ServiceDetails>),
    /// The service does not exist; show the stack overview instead
    Redirect(StackKey),
}

/// Derive the detail page for `route`, redirecting to the stack when the service is gone
pub fn resolve_route(stack: &Stack, route: &ServiceRoute, internal_domain: &str) -> Navigation {
    match ServiceDetails::derive(stack, &route.service, internal_domain) {
        Ok(details) => Navigation::Service(Box::new(details)),
        Err(e) => {
            tracing::debug!("{}, redirecting to {}", e, route.stack);
            Navigation::Redirect(route.stack.clone())
        }
    }
}

/// Like [`resolve_route`], but surfaces the missing service as an error
pub fn require_service(
    stack: &Stack,
    route: &ServiceRoute,
    internal_domain: &str,
) -> Result<ServiceDetails> {
    match resolve_route(stack, route, internal_domain) {
        Navigation::Service(details) => Ok(*details),
        Navigation::Redirect(_) => Err(CoreError::ServiceNotFound {
            stack: stack.name.clone(),
            service: route.service.clone(),
        }),
    }
}
