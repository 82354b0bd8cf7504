//! Attaches segment config and `generateStaticParams` to a segment

use tracing::warn;

use crate::error::{Result, SegmentError};
use crate::route::module::Userland;
use crate::schema::validate_segment_config;
use crate::segment::Segment;

/// Validates `userland` exports and attaches them to `segment`
///
/// - Non-object exports (including `null`) leave the segment untouched.
/// - Invalid exports fail with every field issue in one
///   [`SegmentError::InvalidConfig`].
/// - A valid config is attached only if at least one option is set.
/// - An exported `generateStaticParams` is attached unless the segment
///   runs on the edge runtime, which fails with
///   [`SegmentError::EdgeStaticParams`].
///
/// Only `segment` is mutated; calling it again with the same exports gives
/// the same segment.
///
/// # Examples
///
/// ```
/// use rhtmx_segments::{attach_segment_config, Segment, Userland};
/// use serde_json::json;
///
/// let mut segment = Segment::new("blog");
/// attach_segment_config(&mut segment, &Userland::new(json!({ "revalidate": 60 }))).unwrap();
/// assert!(segment.config.is_some());
///
/// let mut segment = Segment::new("blog");
/// attach_segment_config(&mut segment, &Userland::new(json!({}))).unwrap();
/// assert!(segment.config.is_none());
/// ```
pub fn attach_segment_config(segment: &mut Segment, userland: &Userland) -> Result<()> {
    if !userland.is_object() {
        return Ok(());
    }

    let config = validate_segment_config(userland.exports()).map_err(|issues| {
        warn!(
            file = segment.location(),
            issues = issues.len(),
            "invalid segment config"
        );
        SegmentError::InvalidConfig {
            file_path: segment.location().to_string(),
            issues,
        }
    })?;

    if !config.is_empty() {
        segment.config = Some(config);
    }

    if let Some(generate) = userland.generate_static_params() {
        let is_edge = segment
            .config
            .as_ref()
            .is_some_and(|config| config.is_edge_runtime());

        if is_edge {
            warn!(
                file = segment.location(),
                "generateStaticParams exported with edge runtime"
            );
            return Err(SegmentError::EdgeStaticParams {
                file_path: segment.location().to_string(),
            });
        }

        segment.generate_static_params = Some(generate.clone());
    }

    Ok(())
}
