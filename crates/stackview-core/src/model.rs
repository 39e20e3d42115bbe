//! Compose stack snapshot types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A deployed compose stack: a named group of services sharing a naming/hash prefix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub name: String,
    pub hash_prefix: String,
    pub network_alias_prefix: String,
    /// Services keyed by their compose name
    #[serde(default)]
    pub services: BTreeMap<String, Service>,
    /// URL routes keyed by service name; a missing key means no routes
    #[serde(default)]
    pub urls: BTreeMap<String, Vec<UrlRoute>>,
}

impl Stack {
    /// URL routes attached to a service (empty when the service has none)
    pub fn urls_for(&self, service_name: &str) -> &[UrlRoute] {
        self.urls
            .get(service_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One deployable unit within a stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Docker Swarm service ID
    pub id: String,
    /// `<repo>[:<tag>]@<sha>` or `<repo>[:<tag>]`
    pub image: String,
    #[serde(default)]
    pub environment: Vec<EnvVariable>,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    #[serde(default)]
    pub healthcheck: Option<Healthcheck>,
    #[serde(default)]
    pub volumes: Vec<VolumeMount>,
    #[serde(default)]
    pub configs: Vec<ConfigFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl EnvVariable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Port published outside the cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub published: u32,
    pub target: u32,
    #[serde(default = "default_protocol")]
    pub protocol: String,
}

fn default_protocol() -> String {
    "tcp".to_string()
}

/// Health check settings; durations are in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Healthcheck {
    pub command: String,
    #[serde(default)]
    pub interval_sec: Option<u64>,
    #[serde(default)]
    pub retries: Option<u32>,
    #[serde(default)]
    pub start_period: Option<u64>,
    #[serde(default)]
    pub start_interval: Option<u64>,
}

/// Volume or bind mount attached to a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeMount {
    /// `"volume"` for named volumes; anything else (bind, tmpfs, ...) is kept verbatim
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub read_only: bool,
}

impl VolumeMount {
    pub fn is_named_volume(&self) -> bool {
        self.kind == "volume"
    }
}

/// Configuration file mounted into a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub content: String,
}

/// Domain + base path routed to a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRoute {
    pub domain: String,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default)]
    pub port: Option<u16>,
}

fn default_base_path() -> String {
    "/".to_string()
}

impl UrlRoute {
    /// `domain + base_path`, the value offered for copy
    pub fn address(&self) -> String {
        format!("{}{}", self.domain, self.base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_service() {
        let json = r#"{"id":"svc1","image":"nginx:1.27"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.id, "svc1");
        assert!(service.environment.is_empty());
        assert!(service.ports.is_empty());
        assert!(service.healthcheck.is_none());
        assert!(service.volumes.is_empty());
        assert!(service.configs.is_empty());
    }

    #[test]
    fn test_deserialize_stack_snapshot() {
        let json = r#"{
            "name": "blog",
            "hash_prefix": "x7",
            "network_alias_prefix": "blog-net",
            "services": {
                "web": {
                    "id": "abc",
                    "image": "ghost@sha256:1234",
                    "ports": [{"published": 8080, "target": 2368}],
                    "volumes": [{"type": "bind", "source": "/srv", "target": "/data", "read_only": true}],
                    "healthcheck": {"command": "curl -f localhost", "retries": 3}
                }
            },
            "urls": {"web": [{"domain": "blog.example.com", "base_path": "/", "port": 2368}]}
        }"#;

        let stack: Stack = serde_json::from_str(json).unwrap();
        let web = &stack.services["web"];
        assert_eq!(web.ports[0].protocol, "tcp");
        assert_eq!(web.volumes[0].kind, "bind");
        assert!(!web.volumes[0].is_named_volume());
        assert_eq!(web.healthcheck.as_ref().unwrap().retries, Some(3));
        assert_eq!(stack.urls_for("web")[0].port, Some(2368));
        assert!(stack.urls_for("db").is_empty());
    }

    #[test]
    fn test_url_address() {
        let url = UrlRoute {
            domain: "example.com".to_string(),
            base_path: "/api".to_string(),
            port: None,
        };
        assert_eq!(url.address(), "example.com/api");
    }
}
