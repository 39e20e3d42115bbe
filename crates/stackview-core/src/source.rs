//! Stack snapshot sources and the per-stack cache

use crate::{CoreError, Result, Stack};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identifies one compose stack: project, environment and stack slug
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackKey {
    pub project: String,
    pub env: String,
    pub stack: String,
}

impl StackKey {
    pub fn new(
        project: impl Into<String>,
        env: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            env: env.into(),
            stack: stack.into(),
        }
    }
}

impl fmt::Display for StackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.project, self.env, self.stack)
    }
}

/// Somewhere stack snapshots can be fetched from
#[async_trait]
pub trait StackSource: Send + Sync {
    /// Fetch the current snapshot of a stack
    async fn fetch(&self, key: &StackKey) -> Result<Stack>;
}

/// Reads `<root>/<project>/<env>/<stack>.json`
#[derive(Debug, Clone)]
pub struct FileStackSource {
    root: PathBuf,
}

impl FileStackSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &StackKey) -> PathBuf {
        self.root
            .join(&key.project)
            .join(&key.env)
            .join(format!("{}.json", key.stack))
    }
}

#[async_trait]
impl StackSource for FileStackSource {
    async fn fetch(&self, key: &StackKey) -> Result<Stack> {
        let path = self.path_for(key);
        tracing::debug!("Reading stack snapshot {} from {:?}", key, path);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::StackNotFound(key.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|source| CoreError::Json { path, source })
    }
}

/// Serves stacks held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticStackSource {
    stacks: HashMap<StackKey, Stack>,
}

impl StaticStackSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stack(mut self, key: StackKey, stack: Stack) -> Self {
        self.stacks.insert(key, stack);
        self
    }
}

#[async_trait]
impl StackSource for StaticStackSource {
    async fn fetch(&self, key: &StackKey) -> Result<Stack> {
        self.stacks
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::StackNotFound(key.clone()))
    }
}

/// Caches snapshots per stack on top of a [`StackSource`]
pub struct StackStore {
    source: Arc<dyn StackSource>,
    cache: RwLock<HashMap<StackKey, Arc<Stack>>>,
}

impl StackStore {
    pub fn new(source: Arc<dyn StackSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Cached snapshot, fetched on first use
    pub async fn get(&self, key: &StackKey) -> Result<Arc<Stack>> {
        if let Some(stack) = self.cache.read().await.get(key) {
            return Ok(Arc::clone(stack));
        }
        self.refresh(key).await
    }

    /// Re-fetch a snapshot and replace the cached one.
    /// On failure the previous snapshot stays cached.
    pub async fn refresh(&self, key: &StackKey) -> Result<Arc<Stack>> {
        let stack = Arc::new(self.source.fetch(key).await?);
        self.cache
            .write()
            .await
            .insert(key.clone(), Arc::clone(&stack));
        Ok(stack)
    }

    /// Install a snapshot without going through the source
    pub async fn seed(&self, key: StackKey, stack: Stack) {
        self.cache.write().await.insert(key, Arc::new(stack));
    }

    pub async fn cached(&self, key: &StackKey) -> Option<Arc<Stack>> {
        self.cache.read().await.get(key).cloned()
    }
}
