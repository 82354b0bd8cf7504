/// Route modules and the userland exports they carry
///
/// A build loads one route module per route. App page routes carry a
/// loader tree; app route handlers carry a URL path template and the
/// exports of their single backing file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tree::LoaderTree;
use crate::segment::GenerateStaticParams;

/// Where a route came from and which file defines it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Route page name, e.g. `/blog/[slug]/page`
    pub page: String,
    /// URL path template, e.g. `/blog/[slug]`
    pub pathname: String,
    /// Source file backing the route
    pub filename: String,
}

impl RouteDefinition {
    pub fn new(
        page: impl Into<String>,
        pathname: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            page: page.into(),
            pathname: pathname.into(),
            filename: filename.into(),
        }
    }
}

/// An app page route (`page` + nested layouts)
#[derive(Debug, Clone)]
pub struct AppPageRouteModule {
    pub definition: RouteDefinition,
    pub loader_tree: LoaderTree,
}

/// An app route handler (`route` file answering HTTP verbs)
#[derive(Debug, Clone)]
pub struct AppRouteRouteModule {
    pub definition: RouteDefinition,
    pub userland: Userland,
}

/// A compiled route module, tagged by kind
#[derive(Debug, Clone)]
pub enum RouteModule {
    AppPage(AppPageRouteModule),
    AppRoute(AppRouteRouteModule),
    /// Legacy `pages/` page
    Pages(RouteDefinition),
    /// Legacy `pages/api/` handler
    PagesApi(RouteDefinition),
}

impl RouteModule {
    pub fn definition(&self) -> &RouteDefinition {
        match self {
            RouteModule::AppPage(module) => &module.definition,
            RouteModule::AppRoute(module) => &module.definition,
            RouteModule::Pages(definition) | RouteModule::PagesApi(definition) => definition,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RouteModule::AppPage(_) => "app-page",
            RouteModule::AppRoute(_) => "app-route",
            RouteModule::Pages(_) => "pages",
            RouteModule::PagesApi(_) => "pages-api",
        }
    }
}

/// Raw exports of a userland module
///
/// `exports` holds the static exports as loaded. It is usually an
/// object but may be any value. Functions cannot live in JSON, so the
/// `generateStaticParams` export is carried next to it.
#[derive(Debug, Clone, Default)]
pub struct Userland {
    exports: Value,
    generate_static_params: Option<GenerateStaticParams>,
}

impl Userland {
    pub fn new(exports: Value) -> Self {
        Self {
            exports,
            generate_static_params: None,
        }
    }

    pub fn with_generate_static_params(mut self, generate: GenerateStaticParams) -> Self {
        self.generate_static_params = Some(generate);
        self
    }

    pub fn exports(&self) -> &Value {
        &self.exports
    }

    pub fn is_object(&self) -> bool {
        self.exports.is_object()
    }

    pub fn generate_static_params(&self) -> Option<&GenerateStaticParams> {
        self.generate_static_params.as_ref()
    }
}

/// A resolved layout or page module
#[derive(Debug, Clone)]
pub enum SegmentModule {
    /// Rendered on the server; segment config applies
    Server(Userland),
    /// Client reference; rendered on the receiving end only
    Client(Userland),
}

impl SegmentModule {
    pub fn is_client_component(&self) -> bool {
        matches!(self, SegmentModule::Client(_))
    }

    pub fn userland(&self) -> &Userland {
        match self {
            SegmentModule::Server(userland) | SegmentModule::Client(userland) => userland,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_classification() {
        let server = SegmentModule::Server(Userland::new(json!({})));
        let client = SegmentModule::Client(Userland::new(json!({ "runtime": "edge" })));

        assert!(!server.is_client_component());
        assert!(client.is_client_component());
        assert_eq!(client.userland().exports()["runtime"], "edge");
    }

    #[test]
    fn test_userland_shape() {
        assert!(Userland::new(json!({ "revalidate": 60 })).is_object());
        assert!(!Userland::new(Value::Null).is_object());
        assert!(!Userland::default().is_object());
        assert!(!Userland::new(json!("default export")).is_object());
    }

    #[test]
    fn test_definition_accessor() {
        let definition = RouteDefinition::new("/api/health/route", "/api/health", "app/api/health/route.ts");
        let module = RouteModule::PagesApi(definition.clone());
        assert_eq!(module.definition(), &definition);
        assert_eq!(module.kind(), "pages-api");
    }
}
