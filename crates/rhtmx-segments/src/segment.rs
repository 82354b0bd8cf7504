//! Segments and the static params callable they may carry

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::route::pattern::{is_dynamic_segment, segment_param, ParamKind};
use crate::schema::SegmentConfig;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Value of one route parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `[id]`
    Single(String),
    /// `[...slug]` / `[[...slug]]`
    Multiple(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multiple(values)
    }
}

/// One concrete parameter set, keyed by parameter name
pub type Params = BTreeMap<String, ParamValue>;

/// Argument passed to `generateStaticParams`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateParamsInput {
    /// Params already resolved by parent segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

type GenerateFn =
    dyn Fn(GenerateParamsInput) -> BoxFuture<'static, anyhow::Result<Vec<Params>>> + Send + Sync;

/// Author-supplied `generateStaticParams` export
///
/// Enumerates the parameter sets to pre-render. Collection only hands it
/// over; the caller decides when to run it.
///
/// # Examples
///
/// ```
/// use rhtmx_segments::{GenerateStaticParams, Params};
///
/// let generate = GenerateStaticParams::new(|_input| async {
///     let mut params = Params::new();
///     params.insert("slug".to_string(), "hello-world".into());
///     Ok(vec![params])
/// });
/// # let _ = generate;
/// ```
#[derive(Clone)]
pub struct GenerateStaticParams(Arc<GenerateFn>);

impl GenerateStaticParams {
    pub fn new<F, Fut>(generate: F) -> Self
    where
        F: Fn(GenerateParamsInput) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Vec<Params>>> + Send + 'static,
    {
        Self(Arc::new(
            move |input| -> BoxFuture<'static, anyhow::Result<Vec<Params>>> {
                Box::pin(generate(input))
            },
        ))
    }

    pub async fn call(&self, input: GenerateParamsInput) -> anyhow::Result<Vec<Params>> {
        (self.0)(input).await
    }

    /// True when both handles point at the same function
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for GenerateStaticParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GenerateStaticParams(..)")
    }
}

/// One path component of a route with its resolved metadata
#[derive(Debug, Clone, Default)]
pub struct Segment {
    /// Path component, e.g. `blog` or `[slug]`
    pub name: String,
    /// Declared parameter name of a dynamic segment
    pub param: Option<String>,
    /// Kind of the declared parameter
    pub param_kind: Option<ParamKind>,
    /// File backing this segment
    pub file_path: Option<String>,
    /// Validated config; set only when at least one option was exported
    pub config: Option<SegmentConfig>,
    pub is_dynamic_segment: bool,
    pub generate_static_params: Option<GenerateStaticParams>,
}

impl Segment {
    /// Creates a segment for `name`, resolving its dynamic parameter
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_segments::Segment;
    ///
    /// let segment = Segment::new("[id]");
    /// assert!(segment.is_dynamic_segment);
    /// assert_eq!(segment.param.as_deref(), Some("id"));
    ///
    /// let segment = Segment::new("about");
    /// assert!(!segment.is_dynamic_segment);
    /// assert_eq!(segment.param, None);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let is_dynamic_segment = is_dynamic_segment(&name);
        let (param, param_kind) = is_dynamic_segment
            .then(|| segment_param(&name))
            .flatten()
            .map(|param| (Some(param.name), Some(param.kind)))
            .unwrap_or((None, None));

        Self {
            name,
            param,
            param_kind,
            is_dynamic_segment,
            ..Self::default()
        }
    }

    pub fn with_file_path(mut self, file_path: Option<String>) -> Self {
        self.file_path = file_path;
        self
    }

    /// Location used in diagnostics: the backing file, else the name
    pub fn location(&self) -> &str {
        self.file_path.as_deref().unwrap_or(&self.name)
    }
}

/// Declared parameter names, in segment order
pub fn param_keys(segments: &[Segment]) -> Vec<&str> {
    segments
        .iter()
        .filter_map(|segment| segment.param.as_deref())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_segment() {
        let segment = Segment::new("blog");
        assert!(!segment.is_dynamic_segment);
        assert_eq!(segment.param, None);
        assert_eq!(segment.param_kind, None);
        assert!(segment.config.is_none());
        assert!(segment.generate_static_params.is_none());
    }

    #[test]
    fn test_catch_all_segment() {
        let segment = Segment::new("[[...path]]");
        assert!(segment.is_dynamic_segment);
        assert_eq!(segment.param.as_deref(), Some("path"));
        assert_eq!(segment.param_kind, Some(ParamKind::OptionalCatchAll));
    }

    #[test]
    fn test_unrecognized_dynamic_segment_has_no_param() {
        let segment = Segment::new("[]");
        assert!(segment.is_dynamic_segment);
        assert_eq!(segment.param, None);
    }

    #[test]
    fn test_location_falls_back_to_name() {
        let segment = Segment::new("blog");
        assert_eq!(segment.location(), "blog");

        let segment = segment.with_file_path(Some("app/blog/layout.tsx".to_string()));
        assert_eq!(segment.location(), "app/blog/layout.tsx");
    }

    #[test]
    fn test_param_keys() {
        let segments = vec![
            Segment::new(""),
            Segment::new("[team]"),
            Segment::new("settings"),
            Segment::new("[...path]"),
        ];
        assert_eq!(param_keys(&segments), vec!["team", "path"]);
    }

    #[test]
    fn test_param_value_json_shape() {
        let mut params = Params::new();
        params.insert("id".to_string(), "1".into());
        params.insert(
            "slug".to_string(),
            vec!["a".to_string(), "b".to_string()].into(),
        );

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({ "id": "1", "slug": ["a", "b"] })
        );
    }

    #[tokio::test]
    async fn test_generate_static_params_call() {
        let generate = GenerateStaticParams::new(|input: GenerateParamsInput| async move {
            let mut params = input.params.unwrap_or_default();
            params.insert("id".to_string(), "42".into());
            Ok(vec![params])
        });

        let mut parent = Params::new();
        parent.insert("team".to_string(), "core".into());

        let result = generate
            .call(GenerateParamsInput {
                params: Some(parent),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].get("team"), Some(&ParamValue::from("core")));
        assert_eq!(result[0].get("id"), Some(&ParamValue::from("42")));
        assert!(generate.ptr_eq(&generate.clone()));
    }
}
