//! Test support utilities for stackview-core
//!
//! Stack fixtures and a MockSource for exercising the store and the UIs
//! without snapshot files on disk.

use crate::*;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// A stack with no services
pub fn stack_named(name: &str, hash_prefix: &str, network_alias_prefix: &str) -> Stack {
    Stack {
        name: name.to_string(),
        hash_prefix: hash_prefix.to_string(),
        network_alias_prefix: network_alias_prefix.to_string(),
        services: BTreeMap::new(),
        urls: BTreeMap::new(),
    }
}

/// `blog` stack with a single bare `web` service
pub fn blog_stack() -> Stack {
    let mut stack = stack_named("blog", "x7", "blog-net");
    stack.services.insert(
        "web".to_string(),
        Service {
            id: "q1w2e3r4t5".to_string(),
            image: "ghost:5.82@sha256:0a1b2c".to_string(),
            environment: Vec::new(),
            ports: Vec::new(),
            healthcheck: None,
            volumes: Vec::new(),
            configs: Vec::new(),
        },
    );
    stack
}

/// `shop` stack exercising every section of the detail page.
///
/// - `api`: env, url routes (one with port 0), a port, a health check,
///   a named volume, a bind mount and an external volume, two configs
/// - `db`: tagged image without a digest, one secret, one volume
/// - `worker`: nothing but an image without a tag
pub fn full_stack() -> Stack {
    let mut stack = stack_named("shop", "k3f9", "shop-net");

    stack.services.insert(
        "api".to_string(),
        Service {
            id: "svc-api-01".to_string(),
            image: "ghcr.io/shop/api:2.1@sha256:9f86d081".to_string(),
            environment: vec![
                EnvVariable::new("DATABASE_URL", "postgres://shop@db/shop"),
                EnvVariable::new("DEBUG", ""),
                EnvVariable::new("WORKERS", "4"),
            ],
            ports: vec![PortMapping {
                published: 8080,
                target: 8000,
                protocol: "tcp".to_string(),
            }],
            healthcheck: Some(Healthcheck {
                command: "curl -f http://localhost:8000/health".to_string(),
                interval_sec: Some(30),
                retries: Some(3),
                start_period: Some(120),
                start_interval: None,
            }),
            volumes: vec![
                VolumeMount {
                    kind: "volume".to_string(),
                    source: "shop_uploads".to_string(),
                    target: "/app/uploads".to_string(),
                    read_only: false,
                },
                VolumeMount {
                    kind: "bind".to_string(),
                    source: "shop_/etc/certs".to_string(),
                    target: "/certs".to_string(),
                    read_only: true,
                },
                VolumeMount {
                    kind: "volume".to_string(),
                    source: "shared_cache".to_string(),
                    target: "/cache".to_string(),
                    read_only: false,
                },
            ],
            configs: vec![
                ConfigFile {
                    source: "shop_nginx_conf".to_string(),
                    target: "/etc/nginx/nginx.conf".to_string(),
                    content: "server {\n  listen 80;\n}".to_string(),
                },
                ConfigFile {
                    source: "external_settings".to_string(),
                    target: "/app/settings.toml".to_string(),
                    content: "mode = \"prod\"".to_string(),
                },
            ],
        },
    );

    stack.services.insert(
        "db".to_string(),
        Service {
            id: "svc-db-01".to_string(),
            image: "postgres:16".to_string(),
            environment: vec![EnvVariable::new("POSTGRES_PASSWORD", "s3cret")],
            ports: Vec::new(),
            healthcheck: Some(Healthcheck {
                command: "pg_isready -U shop".to_string(),
                interval_sec: None,
                retries: Some(5),
                start_period: None,
                start_interval: None,
            }),
            volumes: vec![VolumeMount {
                kind: "volume".to_string(),
                source: "shop_pgdata".to_string(),
                target: "/var/lib/postgresql/data".to_string(),
                read_only: false,
            }],
            configs: Vec::new(),
        },
    );

    stack.services.insert(
        "worker".to_string(),
        Service {
            id: "svc-worker-01".to_string(),
            image: "ghcr.io/shop/worker".to_string(),
            environment: Vec::new(),
            ports: Vec::new(),
            healthcheck: None,
            volumes: Vec::new(),
            configs: Vec::new(),
        },
    );

    stack.urls.insert(
        "api".to_string(),
        vec![
            UrlRoute {
                domain: "shop.example.com".to_string(),
                base_path: "/api".to_string(),
                port: Some(8000),
            },
            UrlRoute {
                domain: "api.shop.example.com".to_string(),
                base_path: "/".to_string(),
                port: Some(0),
            },
        ],
    );

    stack
}

/// Stack source whose snapshot can be swapped or removed mid-test
#[derive(Clone, Default)]
pub struct MockSource {
    /// Served for every key; `None` fails with `StackNotFound`
    pub stack: Arc<Mutex<Option<Stack>>>,
    /// Keys fetched, in order
    pub fetches: Arc<Mutex<Vec<StackKey>>>,
}

impl MockSource {
    pub fn new(stack: Stack) -> Self {
        Self {
            stack: Arc::new(Mutex::new(Some(stack))),
            fetches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_stack(&self, stack: Option<Stack>) {
        *self.stack.lock().unwrap() = stack;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }
}

#[async_trait]
impl StackSource for MockSource {
    async fn fetch(&self, key: &StackKey) -> Result<Stack> {
        self.fetches.lock().unwrap().push(key.clone());
        self.stack
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| CoreError::StackNotFound(key.clone()))
    }
}
