//! Segment collection
//!
//! Turns a route module into its ordered list of segments:
//!
//! - **App pages** walk the loader tree's primary `children` chain, one
//!   segment per node, loading each node's layout-or-page module and
//!   attaching its config. Client components are skipped for config.
//! - **App route handlers** split the URL path template; only the last
//!   component is backed by the handler file and carries config.
//!
//! Collection for one route is sequential and owns its own segment list,
//! so independent routes can be collected concurrently.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::attach::attach_segment_config;
use crate::config::SegmentsConfig;
use crate::error::{Result, SegmentError};
use crate::loader::{ModuleLoader, ResolvedModule};
use crate::route::module::{AppPageRouteModule, AppRouteRouteModule, RouteModule};
use crate::segment::Segment;

/// Collects segments for route modules
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rhtmx_segments::{
///     AppRouteRouteModule, ModuleRegistry, RouteDefinition, RouteModule, SegmentCollector, Userland,
/// };
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let collector = SegmentCollector::new(Arc::new(ModuleRegistry::new()));
///
/// let route = RouteModule::AppRoute(AppRouteRouteModule {
///     definition: RouteDefinition::new(
///         "/api/users/[id]/route",
///         "/api/users/[id]",
///         "app/api/users/[id]/route.ts",
///     ),
///     userland: Userland::new(json!({ "dynamic": "force-dynamic" })),
/// });
///
/// let segments = collector.collect(&route).await.unwrap();
/// let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, vec!["api", "users", "[id]"]);
/// assert!(segments[2].config.is_some());
/// # }
/// ```
#[derive(Clone)]
pub struct SegmentCollector {
    loader: Arc<dyn ModuleLoader>,
    config: SegmentsConfig,
}

impl SegmentCollector {
    pub fn new(loader: Arc<dyn ModuleLoader>) -> Self {
        Self {
            loader,
            config: SegmentsConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SegmentsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SegmentsConfig {
        &self.config
    }

    /// Collects the segments of one route module
    ///
    /// Fails without a partial list on the first error.
    pub async fn collect(&self, route_module: &RouteModule) -> Result<Vec<Segment>> {
        let definition = route_module.definition();
        debug!(
            page = %definition.page,
            kind = route_module.kind(),
            "collecting segments"
        );

        let segments = match route_module {
            RouteModule::AppRoute(module) => collect_app_route_segments(module)?,
            RouteModule::AppPage(module) => {
                collect_app_page_segments(module, self.loader.as_ref(), &self.config).await?
            }
            RouteModule::Pages(_) | RouteModule::PagesApi(_) => {
                return Err(SegmentError::invariant(format!(
                    "expected a route module to be one of app route or page, received {} for \"{}\"",
                    route_module.kind(),
                    definition.page
                )))
            }
        };

        debug!(page = %definition.page, count = segments.len(), "collected segments");
        Ok(segments)
    }
}

/// Collects segments with the default settings
pub async fn collect_segments(
    route_module: &RouteModule,
    loader: Arc<dyn ModuleLoader>,
) -> Result<Vec<Segment>> {
    SegmentCollector::new(loader).collect(route_module).await
}

/// Walks an app page's loader tree, root to leaf
///
/// Produces one segment per node of the primary `children` chain. The
/// walk ends at the first node without `children`; parallel-route slots
/// are not visited.
pub async fn collect_app_page_segments(
    route_module: &AppPageRouteModule,
    loader: &dyn ModuleLoader,
    config: &SegmentsConfig,
) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();

    for (depth, node) in route_module.loader_tree.primary_chain().enumerate() {
        if depth >= config.max_tree_depth {
            return Err(SegmentError::invariant(format!(
                "loader tree for \"{}\" is deeper than {} segments",
                route_module.definition.page, config.max_tree_depth
            )));
        }

        let ResolvedModule { module, file_path } =
            loader
                .layout_or_page(node)
                .await
                .map_err(|source| SegmentError::ModuleLoad {
                    segment: node.name().to_string(),
                    source,
                })?;

        let mut segment = Segment::new(node.name()).with_file_path(module.as_ref().and(file_path));

        match &module {
            Some(module) if !module.is_client_component() => {
                attach_segment_config(&mut segment, module.userland())?;
            }
            Some(_) => trace!(segment = %segment.name, "client component, config skipped"),
            None => trace!(segment = %segment.name, "no module"),
        }

        trace!(
            segment = %segment.name,
            depth,
            dynamic = segment.is_dynamic_segment,
            "visited loader tree node"
        );
        segments.push(segment);
    }

    Ok(segments)
}

/// Builds an app route handler's segments from its URL path template
///
/// `/api/users/[id]` gives `api`, `users`, `[id]`. Only the last segment
/// gets the handler file and its config.
pub fn collect_app_route_segments(route_module: &AppRouteRouteModule) -> Result<Vec<Segment>> {
    let definition = &route_module.definition;
    let path = definition
        .pathname
        .strip_prefix('/')
        .unwrap_or(&definition.pathname);

    let names: Vec<&str> = if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    };

    let Some((leaf, parents)) = names.split_last() else {
        return Err(SegmentError::invariant(format!(
            "expected at least one segment in \"{}\"",
            definition.pathname
        )));
    };

    let mut segments: Vec<Segment> = parents.iter().map(|name| Segment::new(*name)).collect();

    let mut leaf = Segment::new(*leaf).with_file_path(Some(definition.filename.clone()));
    attach_segment_config(&mut leaf, &route_module.userland)?;
    segments.push(leaf);

    Ok(segments)
}
