//! Module loading for loader tree nodes

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::route::module::SegmentModule;
use crate::route::tree::LoaderTree;

/// Module resolved for a loader tree node
#[derive(Debug, Clone, Default)]
pub struct ResolvedModule {
    /// The loaded module; `None` when nothing backs the node
    pub module: Option<SegmentModule>,
    /// File the module was loaded from
    pub file_path: Option<String>,
}

/// Loads the layout-or-page module of a loader tree node
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    /// Resolves the module configuring `node`
    ///
    /// A node with no backing module is not an error; return a
    /// [`ResolvedModule`] with `module: None`.
    async fn layout_or_page(&self, node: &LoaderTree) -> Result<ResolvedModule>;
}

/// In-memory module loader
///
/// Holds modules keyed by file path. A node resolves to its layout file,
/// or its page file when it has no layout. A file that was never
/// registered resolves to its path with no module.
///
/// # Examples
///
/// ```
/// use rhtmx_segments::{LoaderTree, ModuleLoader, ModuleRegistry, SegmentModule, Userland};
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let registry = ModuleRegistry::new().with_module(
///     "app/layout.tsx",
///     SegmentModule::Server(Userland::new(json!({ "revalidate": 60 }))),
/// );
///
/// let resolved = registry
///     .layout_or_page(&LoaderTree::new("").with_layout("app/layout.tsx"))
///     .await
///     .unwrap();
/// assert!(resolved.module.is_some());
/// assert_eq!(resolved.file_path.as_deref(), Some("app/layout.tsx"));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, SegmentModule>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module, replacing any module at the same path
    pub fn register(&mut self, file_path: impl Into<String>, module: SegmentModule) {
        self.modules.insert(file_path.into(), module);
    }

    pub fn with_module(mut self, file_path: impl Into<String>, module: SegmentModule) -> Self {
        self.register(file_path, module);
        self
    }

    pub fn get(&self, file_path: &str) -> Option<&SegmentModule> {
        self.modules.get(file_path)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[async_trait]
impl ModuleLoader for ModuleRegistry {
    async fn layout_or_page(&self, node: &LoaderTree) -> Result<ResolvedModule> {
        let Some(file_path) = node.components().layout_or_page() else {
            return Ok(ResolvedModule::default());
        };

        Ok(ResolvedModule {
            module: self.get(file_path).cloned(),
            file_path: Some(file_path.to_string()),
        })
    }
}
