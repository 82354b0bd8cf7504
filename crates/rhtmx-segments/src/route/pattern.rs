/// Dynamic segment detection and parameter extraction
///
/// Pure functions over a single path component (`about`, `[id]`,
/// `[...slug]`, `[[...slug]]`). Same input → same output, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DYNAMIC_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[.*\]$").expect("dynamic segment pattern is valid"));

/// Kind of dynamic parameter a bracketed segment declares
///
/// # Examples
///
/// ```
/// use rhtmx_segments::route::pattern::{segment_param, ParamKind};
///
/// assert_eq!(segment_param("[id]").unwrap().kind, ParamKind::Dynamic);
/// assert_eq!(segment_param("[...slug]").unwrap().kind, ParamKind::CatchAll);
/// assert_eq!(segment_param("[[...slug]]").unwrap().kind, ParamKind::OptionalCatchAll);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKind {
    /// `[id]` - exactly one path component
    Dynamic,
    /// `[...slug]` - one or more path components
    CatchAll,
    /// `[[...slug]]` - zero or more path components
    OptionalCatchAll,
}

/// A parameter declared by a dynamic segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentParam {
    pub name: String,
    pub kind: ParamKind,
}

/// Returns true when the whole segment is bracket-delimited
///
/// # Examples
///
/// ```
/// use rhtmx_segments::route::pattern::is_dynamic_segment;
///
/// assert!(is_dynamic_segment("[id]"));
/// assert!(is_dynamic_segment("[[...slug]]"));
/// assert!(!is_dynamic_segment("about"));
/// assert!(!is_dynamic_segment("user-[id]"));
/// ```
pub fn is_dynamic_segment(segment: &str) -> bool {
    DYNAMIC_SEGMENT.is_match(segment)
}

/// Extracts the declared parameter from a dynamic segment
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Dynamic**: `[name]`
///
/// Returns `None` for static segments and for bracketed segments that are
/// not one of the forms above (`[]`, `[...]`, `[[id]]`).
///
/// # Examples
///
/// ```
/// use rhtmx_segments::route::pattern::segment_param;
///
/// assert_eq!(segment_param("[id]").unwrap().name, "id");
/// assert_eq!(segment_param("[...slug]").unwrap().name, "slug");
/// assert!(segment_param("about").is_none());
/// assert!(segment_param("[]").is_none());
/// ```
pub fn segment_param(segment: &str) -> Option<SegmentParam> {
    let (inner, kind) = if let Some(inner) = segment
        .strip_prefix("[[...")
        .and_then(|s| s.strip_suffix("]]"))
    {
        (inner, ParamKind::OptionalCatchAll)
    } else {
        let inner = segment.strip_prefix('[')?.strip_suffix(']')?;
        match inner.strip_prefix("...") {
            Some(rest) => (rest, ParamKind::CatchAll),
            None => (inner, ParamKind::Dynamic),
        }
    };

    if inner.is_empty() || inner.contains(['[', ']']) {
        return None;
    }

    Some(SegmentParam {
        name: inner.to_string(),
        kind,
    })
}
