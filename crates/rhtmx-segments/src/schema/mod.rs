//! Segment config schema
//!
//! Layouts, pages and route handlers can export options that tune how
//! their segment is built and cached:
//!
//! ```text
//! export const revalidate = 60
//! export const dynamic = 'force-static'
//! export const runtime = 'nodejs'
//! ```
//!
//! [`validate_segment_config`] checks those exports against the schema
//! below and produces a typed [`SegmentConfig`], or every field error at
//! once. [`reduce_segment_configs`] folds the configs of a route's segments
//! into the effective route config.

mod reduce;
mod validate;

pub use reduce::reduce_segment_configs;
pub use validate::{recognized_keys, validate_segment_config, FieldError};

use serde::{Deserialize, Serialize, Serializer};

/// Validated segment config
///
/// Every field is optional; `None` means the module did not export it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revalidate: Option<Revalidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_params: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<DynamicMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_cache: Option<FetchCache>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_region: Option<PreferredRegion>,
    #[serde(rename = "experimental_ppr", skip_serializing_if = "Option::is_none")]
    pub experimental_ppr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u64>,
}

impl SegmentConfig {
    /// Number of options that are set
    pub fn len(&self) -> usize {
        [
            self.revalidate.is_some(),
            self.dynamic_params.is_some(),
            self.dynamic.is_some(),
            self.fetch_cache.is_some(),
            self.preferred_region.is_some(),
            self.experimental_ppr.is_some(),
            self.runtime.is_some(),
            self.max_duration.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// True when no option is set
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_edge_runtime(&self) -> bool {
        self.runtime == Some(Runtime::Edge)
    }
}

/// `revalidate` export: `false` or a number of seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revalidate {
    /// `false` - cache indefinitely
    Never,
    /// Revalidate at most every N seconds; `0` renders on every request
    Seconds(u64),
}

impl Serialize for Revalidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Revalidate::Never => serializer.serialize_bool(false),
            Revalidate::Seconds(seconds) => serializer.serialize_u64(*seconds),
        }
    }
}

/// `dynamic` export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DynamicMode {
    Auto,
    Error,
    ForceStatic,
    ForceDynamic,
}

/// `fetchCache` export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchCache {
    Auto,
    DefaultCache,
    OnlyCache,
    ForceCache,
    ForceNoStore,
    DefaultNoStore,
    OnlyNoStore,
}

/// `runtime` export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Edge,
    Nodejs,
}

/// `preferredRegion` export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PreferredRegion {
    One(String),
    Many(Vec<String>),
}
