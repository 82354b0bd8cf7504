//! # RHTMX Segments
//!
//! Build-time collection of route segments for app routes.
//!
//! For every route the build loads, this crate produces the ordered list
//! of path segments (`""`, `blog`, `[slug]`) together with:
//!
//! - the declared dynamic parameter (`slug`) and its kind
//! - the file backing the segment
//! - the validated segment config the file exports (`revalidate`,
//!   `dynamic`, `runtime`, ...)
//! - the `generateStaticParams` export, handed over unevaluated
//!
//! ## Route Kinds
//!
//! - **App pages** carry a [`LoaderTree`]. The walker follows the primary
//!   `children` chain root to leaf and asks a [`ModuleLoader`] for each
//!   node's layout-or-page module. Client components never get config.
//! - **App route handlers** carry a URL path template. Each path component
//!   becomes a segment; only the last one is backed by the handler file.
//!
//! ## Errors
//!
//! Invalid config is reported once per file with every failing field.
//! `generateStaticParams` cannot be combined with `runtime = 'edge'`.
//! Contract breaches surface as [`SegmentError::Invariant`].
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rhtmx_segments::{
//!     AppPageRouteModule, LoaderTree, ModuleRegistry, RouteDefinition, RouteModule,
//!     SegmentCollector, SegmentModule, Userland,
//! };
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let registry = ModuleRegistry::new()
//!     .with_module("app/layout.tsx", SegmentModule::Server(Userland::new(json!({}))))
//!     .with_module(
//!         "app/blog/[slug]/page.tsx",
//!         SegmentModule::Server(Userland::new(json!({ "revalidate": 3600 }))),
//!     );
//!
//! let tree = LoaderTree::new("")
//!     .with_layout("app/layout.tsx")
//!     .with_children(
//!         LoaderTree::new("blog")
//!             .with_children(LoaderTree::new("[slug]").with_page("app/blog/[slug]/page.tsx")),
//!     );
//!
//! let route = RouteModule::AppPage(AppPageRouteModule {
//!     definition: RouteDefinition::new("/blog/[slug]/page", "/blog/[slug]", "app/blog/[slug]/page.tsx"),
//!     loader_tree: tree,
//! });
//!
//! let segments = SegmentCollector::new(Arc::new(registry)).collect(&route).await.unwrap();
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[2].param.as_deref(), Some("slug"));
//! assert!(segments[2].config.is_some());
//! # }
//! ```

pub mod attach;
pub mod collect;
pub mod config;
pub mod error;
pub mod loader;
pub mod route;
pub mod schema;
pub mod segment;

pub use attach::attach_segment_config;
pub use collect::{
    collect_app_page_segments, collect_app_route_segments, collect_segments, SegmentCollector,
};
pub use config::SegmentsConfig;
pub use error::{Result, SegmentError};
pub use loader::{ModuleLoader, ModuleRegistry, ResolvedModule};
pub use route::{
    AppPageRouteModule, AppRouteRouteModule, LoaderTree, ParamKind, RouteDefinition, RouteModule,
    SegmentModule, Userland,
};
pub use schema::{reduce_segment_configs, validate_segment_config, FieldError, SegmentConfig};
pub use segment::{
    param_keys, GenerateParamsInput, GenerateStaticParams, ParamValue, Params, Segment,
};
