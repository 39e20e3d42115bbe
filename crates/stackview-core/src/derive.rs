//! Display derivation for a service inside a compose stack
//!
//! Pure functions mapping a stack snapshot to the strings shown on a service page.

use crate::{CoreError, EnvVariable, Result, Service, Stack};

/// Shown in place of a revealed secret whose value is empty
pub const EMPTY_VALUE_MARKER: &str = "<empty>";

/// Image reference split into repository and digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub repository: String,
    pub sha: Option<String>,
}

impl ImageReference {
    /// Repository with the digest re-attached, if any
    pub fn full(&self) -> String {
        match &self.sha {
            Some(sha) => format!("{}@{}", self.repository, sha),
            None => self.repository.clone(),
        }
    }
}

/// Network identities of a service, both fully qualified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAliases {
    /// Reachable from services in the same environment
    pub network_alias: String,
    /// Reachable across environments
    pub global_alias: String,
}

/// A name split into a recognized stack-owned prefix and the remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedName {
    pub prefix: Option<String>,
    pub suffix: String,
}

impl OwnedName {
    pub fn full(&self) -> String {
        format!("{}{}", self.prefix.as_deref().unwrap_or(""), self.suffix)
    }
}

/// Look up a service by exact name
pub fn resolve_service<'a>(stack: &'a Stack, service_name: &str) -> Result<&'a Service> {
    stack
        .services
        .get(service_name)
        .ok_or_else(|| CoreError::ServiceNotFound {
            stack: stack.name.clone(),
            service: service_name.to_string(),
        })
}

/// Split `repo[:tag]@sha` into repository and digest.
///
/// `:latest` is only appended when a digest is present and the repository has no tag;
/// a reference without `@` is returned untouched.
pub fn split_image_reference(image: &str) -> ImageReference {
    let mut parts = image.split('@');
    let mut repository = parts.next().unwrap_or_default().to_string();
    let sha = parts.next().map(str::to_string);

    if sha.is_some() && !repository.is_empty() && !repository.contains(':') {
        repository.push_str(":latest");
    }

    ImageReference { repository, sha }
}

/// `<stack>_<hash>_`, the prefix of every swarm service name in the stack
pub fn compute_service_prefix(stack: &Stack) -> String {
    format!("{}_{}_", stack.name, stack.hash_prefix)
}

/// Prefix Docker gives to volumes and configs created for the stack
pub fn stack_owned_prefix(stack: &Stack) -> String {
    format!("{}_", stack.name)
}

pub fn compute_aliases(stack: &Stack, service_name: &str, internal_domain: &str) -> ServiceAliases {
    ServiceAliases {
        network_alias: format!(
            "{}-{}.{}",
            stack.network_alias_prefix, service_name, internal_domain
        ),
        global_alias: format!("{}_{}.{}", stack.hash_prefix, service_name, internal_domain),
    }
}

/// Alias without its `.<internal domain>` suffix
pub fn short_alias(alias: &str, internal_domain: &str) -> String {
    alias.replacen(&format!(".{}", internal_domain), "", 1)
}

pub fn split_owned_name(full_name: &str, prefix: &str) -> OwnedName {
    match full_name.strip_prefix(prefix) {
        Some(suffix) => OwnedName {
            prefix: Some(prefix.to_string()),
            suffix: suffix.to_string(),
        },
        None => OwnedName {
            prefix: None,
            suffix: full_name.to_string(),
        },
    }
}

/// Render variables as `.env` lines. Values are quoted but not escaped.
pub fn format_env_as_dotenv(entries: &[EnvVariable]) -> String {
    entries
        .iter()
        .map(|env| format!("{}=\"{}\"", env.key, env.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text shown for a secret value given its reveal state
pub fn mask_secret<'a>(value: &'a str, revealed: bool, mask: &'a str) -> &'a str {
    if !revealed {
        mask
    } else if value.is_empty() {
        EMPTY_VALUE_MARKER
    } else {
        value
    }
}
