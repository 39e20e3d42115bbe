//! Sample stack for demo mode, no snapshot files needed

use stackview_core::{
    ConfigFile, EnvVariable, Healthcheck, PortMapping, Service, Stack, StackKey, UrlRoute,
    VolumeMount,
};
use std::collections::BTreeMap;

pub fn demo_key() -> StackKey {
    StackKey::new("demo", "production", "ghost")
}

/// A blog stack: ghost behind a url route, mysql with a volume, a redis cache
pub fn demo_stack() -> Stack {
    let mut services = BTreeMap::new();

    services.insert(
        "ghost".to_string(),
        Service {
            id: "n4p8x2k7d1q9".to_string(),
            image: "ghost:5.82-alpine@sha256:6b3f0d2c41a9".to_string(),
            environment: vec![
                EnvVariable::new("url", "https://blog.example.com"),
                EnvVariable::new("database__client", "mysql"),
                EnvVariable::new("database__connection__host", "ghost-db"),
                EnvVariable::new("database__connection__password", "correct-horse-battery"),
                EnvVariable::new("mail__from", ""),
            ],
            ports: Vec::new(),
            healthcheck: Some(Healthcheck {
                command: "wget -qO- http://localhost:2368/ghost/api/admin/site/".to_string(),
                interval_sec: Some(30),
                retries: Some(3),
                start_period: Some(90),
                start_interval: Some(5),
            }),
            volumes: vec![VolumeMount {
                kind: "volume".to_string(),
                source: "ghost_content".to_string(),
                target: "/var/lib/ghost/content".to_string(),
                read_only: false,
            }],
            configs: vec![ConfigFile {
                source: "ghost_robots".to_string(),
                target: "/var/lib/ghost/content/robots.txt".to_string(),
                content: "User-agent: *\nDisallow: /ghost/".to_string(),
            }],
        },
    );

    services.insert(
        "ghost-db".to_string(),
        Service {
            id: "c7m3v9b2w5z1".to_string(),
            image: "mysql:8.4".to_string(),
            environment: vec![
                EnvVariable::new("MYSQL_ROOT_PASSWORD", "correct-horse-battery"),
                EnvVariable::new("MYSQL_DATABASE", "ghost"),
            ],
            ports: vec![PortMapping {
                published: 33060,
                target: 3306,
                protocol: "tcp".to_string(),
            }],
            healthcheck: Some(Healthcheck {
                command: "mysqladmin ping -h localhost".to_string(),
                interval_sec: Some(10),
                retries: Some(5),
                start_period: None,
                start_interval: None,
            }),
            volumes: vec![
                VolumeMount {
                    kind: "volume".to_string(),
                    source: "ghost_mysql".to_string(),
                    target: "/var/lib/mysql".to_string(),
                    read_only: false,
                },
                VolumeMount {
                    kind: "bind".to_string(),
                    source: "/etc/localtime".to_string(),
                    target: "/etc/localtime".to_string(),
                    read_only: true,
                },
            ],
            configs: vec![ConfigFile {
                source: "ghost_mysql_cnf".to_string(),
                target: "/etc/mysql/conf.d/ghost.cnf".to_string(),
                content: "[mysqld]\nmax_connections = 200\ninnodb_buffer_pool_size = 256M"
                    .to_string(),
            }],
        },
    );

    services.insert(
        "cache".to_string(),
        Service {
            id: "h2j6r8t4y0u3".to_string(),
            image: "redis@sha256:9a0c2e4f6b8d".to_string(),
            environment: Vec::new(),
            ports: Vec::new(),
            healthcheck: None,
            volumes: Vec::new(),
            configs: Vec::new(),
        },
    );

    let mut urls = BTreeMap::new();
    urls.insert(
        "ghost".to_string(),
        vec![
            UrlRoute {
                domain: "blog.example.com".to_string(),
                base_path: "/".to_string(),
                port: Some(2368),
            },
            UrlRoute {
                domain: "www.blog.example.com".to_string(),
                base_path: "/".to_string(),
                port: None,
            },
        ],
    );

    Stack {
        name: "ghost".to_string(),
        hash_prefix: "a1b2c3".to_string(),
        network_alias_prefix: "ghost-net".to_string(),
        services,
        urls,
    }
}
