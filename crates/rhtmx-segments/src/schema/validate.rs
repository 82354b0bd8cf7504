//! Segment config validation
//!
//! The schema is a table of recognized export keys, each with its own
//! field validator. Validation visits every key in table order and keeps
//! going after a failure, so one pass reports every invalid field.
//! Unrecognized keys are ignored.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{PreferredRegion, Revalidate, SegmentConfig};

/// One invalid segment config field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Export name, e.g. `revalidate`
    pub key: String,
    pub message: String,
}

impl FieldError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

struct SchemaField {
    key: &'static str,
    apply: fn(&mut SegmentConfig, &Value) -> Result<(), String>,
}

/// Recognized exports, in reporting order
const SCHEMA: &[SchemaField] = &[
    SchemaField { key: "revalidate", apply: apply_revalidate },
    SchemaField { key: "dynamicParams", apply: apply_dynamic_params },
    SchemaField { key: "dynamic", apply: apply_dynamic },
    SchemaField { key: "fetchCache", apply: apply_fetch_cache },
    SchemaField { key: "preferredRegion", apply: apply_preferred_region },
    SchemaField { key: "experimental_ppr", apply: apply_experimental_ppr },
    SchemaField { key: "runtime", apply: apply_runtime },
    SchemaField { key: "maxDuration", apply: apply_max_duration },
];

/// Export names the schema recognizes
pub fn recognized_keys() -> impl Iterator<Item = &'static str> {
    SCHEMA.iter().map(|field| field.key)
}

/// Validates userland exports against the segment config schema
///
/// Returns the typed config, or one [`FieldError`] per invalid field in
/// schema order. `null` values count as not exported.
///
/// # Examples
///
/// ```
/// use rhtmx_segments::schema::{validate_segment_config, Revalidate};
/// use serde_json::json;
///
/// let config = validate_segment_config(&json!({ "revalidate": 60, "other": 1 })).unwrap();
/// assert_eq!(config.revalidate, Some(Revalidate::Seconds(60)));
/// assert_eq!(config.len(), 1);
///
/// let errors = validate_segment_config(&json!({ "revalidate": -1, "runtime": "deno" })).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_segment_config(value: &Value) -> Result<SegmentConfig, Vec<FieldError>> {
    let Some(exports) = value.as_object() else {
        return Err(vec![FieldError::new(
            "(exports)",
            format!("Expected an object, received {}", type_name(value)),
        )]);
    };

    let mut config = SegmentConfig::default();
    let errors: Vec<FieldError> = SCHEMA
        .iter()
        .filter_map(|field| {
            let value = exports.get(field.key).filter(|value| !value.is_null())?;
            (field.apply)(&mut config, value)
                .err()
                .map(|message| FieldError::new(field.key, message))
        })
        .collect();

    if errors.is_empty() {
        Ok(config)
    } else {
        Err(errors)
    }
}

// ============================================================================
// Field validators
// ============================================================================

fn apply_revalidate(config: &mut SegmentConfig, value: &Value) -> Result<(), String> {
    let revalidate = match value {
        Value::Bool(false) => Some(Revalidate::Never),
        _ => non_negative_integer(value).map(Revalidate::Seconds),
    };

    config.revalidate = Some(revalidate.ok_or_else(|| {
        format!("Invalid revalidate value {value}, must be a non-negative number or false")
    })?);
    Ok(())
}

fn apply_dynamic_params(config: &mut SegmentConfig, value: &Value) -> Result<(), String> {
    config.dynamic_params = Some(boolean(value)?);
    Ok(())
}

fn apply_dynamic(config: &mut SegmentConfig, value: &Value) -> Result<(), String> {
    config.dynamic = Some(enumeration(value)?);
    Ok(())
}

fn apply_fetch_cache(config: &mut SegmentConfig, value: &Value) -> Result<(), String> {
    config.fetch_cache = Some(enumeration(value)?);
    Ok(())
}

fn apply_preferred_region(config: &mut SegmentConfig, value: &Value) -> Result<(), String> {
    let region = match value {
        Value::String(region) => PreferredRegion::One(region.clone()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(PreferredRegion::Many)
            .ok_or_else(|| "Expected an array of strings".to_string())?,
        other => {
            return Err(format!(
                "Expected a string or an array of strings, received {}",
                type_name(other)
            ))
        }
    };

    config.preferred_region = Some(region);
    Ok(())
}

fn apply_experimental_ppr(config: &mut SegmentConfig, value: &Value) -> Result<(), String> {
    config.experimental_ppr = Some(boolean(value)?);
    Ok(())
}

fn apply_runtime(config: &mut SegmentConfig, value: &Value) -> Result<(), String> {
    config.runtime = Some(enumeration(value)?);
    Ok(())
}

fn apply_max_duration(config: &mut SegmentConfig, value: &Value) -> Result<(), String> {
    let seconds = non_negative_integer(value)
        .ok_or_else(|| format!("Expected a non-negative integer, received {value}"))?;
    config.max_duration = Some(seconds);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn boolean(value: &Value) -> Result<bool, String> {
    value
        .as_bool()
        .ok_or_else(|| format!("Expected boolean, received {}", type_name(value)))
}

/// String enums reuse the kebab-case serde names of the target type
fn enumeration<T: DeserializeOwned>(value: &Value) -> Result<T, String> {
    serde_json::from_value(value.clone()).map_err(|e| e.to_string())
}

/// Accepts `60` and `60.0`, rejects negatives and fractions
fn non_negative_integer(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n < u64::MAX as f64)
            .map(|n| n as u64)
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DynamicMode, FetchCache, Runtime};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_valid_and_empty() {
        let config = validate_segment_config(&json!({})).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let config = validate_segment_config(&json!({
            "default": "Page",
            "metadata": { "title": "Blog" },
            "generateStaticParams": "not a function",
        }))
        .unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_all_options() {
        let config = validate_segment_config(&json!({
            "revalidate": 3600,
            "dynamicParams": false,
            "dynamic": "force-dynamic",
            "fetchCache": "default-no-store",
            "preferredRegion": "iad1",
            "experimental_ppr": true,
            "runtime": "nodejs",
            "maxDuration": 5,
        }))
        .unwrap();

        assert_eq!(
            config,
            SegmentConfig {
                revalidate: Some(Revalidate::Seconds(3600)),
                dynamic_params: Some(false),
                dynamic: Some(DynamicMode::ForceDynamic),
                fetch_cache: Some(FetchCache::DefaultNoStore),
                preferred_region: Some(PreferredRegion::One("iad1".to_string())),
                experimental_ppr: Some(true),
                runtime: Some(Runtime::Nodejs),
                max_duration: Some(5),
            }
        );
        assert_eq!(config.len(), recognized_keys().count());
    }

    #[test]
    fn test_revalidate_values() {
        let config = validate_segment_config(&json!({ "revalidate": false })).unwrap();
        assert_eq!(config.revalidate, Some(Revalidate::Never));

        let config = validate_segment_config(&json!({ "revalidate": 0 })).unwrap();
        assert_eq!(config.revalidate, Some(Revalidate::Seconds(0)));

        let config = validate_segment_config(&json!({ "revalidate": 10.0 })).unwrap();
        assert_eq!(config.revalidate, Some(Revalidate::Seconds(10)));

        for invalid in [json!(true), json!(-1), json!(1.5), json!("60")] {
            let errors = validate_segment_config(&json!({ "revalidate": invalid.clone() })).unwrap_err();
            assert_eq!(
                errors,
                vec![FieldError::new(
                    "revalidate",
                    format!("Invalid revalidate value {invalid}, must be a non-negative number or false")
                )]
            );
        }
    }

    #[test]
    fn test_revalidate_beyond_u64_rejected() {
        let errors =
            validate_segment_config(&json!({ "revalidate": 18446744073709551616.0_f64 })).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "revalidate");

        let errors =
            validate_segment_config(&json!({ "maxDuration": 1e20_f64 })).unwrap_err();
        assert_eq!(errors[0].key, "maxDuration");
    }

    #[test]
    fn test_null_counts_as_absent() {
        let config = validate_segment_config(&json!({ "runtime": null, "dynamic": null })).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_enum_error_names_value() {
        let errors = validate_segment_config(&json!({ "dynamic": "sometimes" })).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "dynamic");
        assert!(errors[0].message.contains("sometimes"));
        assert!(errors[0].message.contains("force-static"));
    }

    #[test]
    fn test_preferred_region_forms() {
        let config = validate_segment_config(&json!({ "preferredRegion": ["iad1", "sfo1"] })).unwrap();
        assert_eq!(
            config.preferred_region,
            Some(PreferredRegion::Many(vec!["iad1".to_string(), "sfo1".to_string()]))
        );

        let errors = validate_segment_config(&json!({ "preferredRegion": ["iad1", 2] })).unwrap_err();
        assert_eq!(errors[0].key, "preferredRegion");

        let errors = validate_segment_config(&json!({ "preferredRegion": 2 })).unwrap_err();
        assert_eq!(
            errors[0].message,
            "Expected a string or an array of strings, received number"
        );
    }

    #[test]
    fn test_errors_are_collected_in_schema_order() {
        let errors = validate_segment_config(&json!({
            "maxDuration": -5,
            "dynamicParams": "yes",
            "revalidate": "soon",
            "runtime": "edge",
        }))
        .unwrap_err();

        let keys: Vec<&str> = errors.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["revalidate", "dynamicParams", "maxDuration"]);
        assert_eq!(errors[1].message, "Expected boolean, received string");
    }

    #[test]
    fn test_non_object_input() {
        let errors = validate_segment_config(&json!([1, 2])).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("(exports)", "Expected an object, received array")]);
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::new("runtime", "unknown variant `deno`");
        assert_eq!(error.to_string(), "runtime: unknown variant `deno`");
    }
}
