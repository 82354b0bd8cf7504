//! Route-level config reduction

use super::{Revalidate, SegmentConfig};
use crate::segment::Segment;

/// Folds segment configs root-to-leaf into the effective route config
///
/// A deeper segment overrides a shallower one key by key. `revalidate`
/// keeps the most frequent schedule instead: any number beats `false`, and
/// a smaller number beats a larger one.
///
/// # Examples
///
/// ```
/// use rhtmx_segments::schema::{reduce_segment_configs, Revalidate, SegmentConfig};
/// use rhtmx_segments::Segment;
///
/// let mut layout = Segment::new("");
/// layout.config = Some(SegmentConfig { revalidate: Some(Revalidate::Seconds(60)), ..Default::default() });
///
/// let mut page = Segment::new("blog");
/// page.config = Some(SegmentConfig { revalidate: Some(Revalidate::Seconds(3600)), ..Default::default() });
///
/// let config = reduce_segment_configs(&[layout, page]);
/// assert_eq!(config.revalidate, Some(Revalidate::Seconds(60)));
/// ```
pub fn reduce_segment_configs(segments: &[Segment]) -> SegmentConfig {
    segments
        .iter()
        .filter_map(|segment| segment.config.as_ref())
        .fold(SegmentConfig::default(), |mut route, config| {
            route.revalidate = merge_revalidate(route.revalidate, config.revalidate);

            if config.dynamic_params.is_some() {
                route.dynamic_params = config.dynamic_params;
            }
            if config.dynamic.is_some() {
                route.dynamic = config.dynamic;
            }
            if config.fetch_cache.is_some() {
                route.fetch_cache = config.fetch_cache;
            }
            if config.preferred_region.is_some() {
                route.preferred_region = config.preferred_region.clone();
            }
            if config.experimental_ppr.is_some() {
                route.experimental_ppr = config.experimental_ppr;
            }
            if config.runtime.is_some() {
                route.runtime = config.runtime;
            }
            if config.max_duration.is_some() {
                route.max_duration = config.max_duration;
            }
            route
        })
}

fn merge_revalidate(current: Option<Revalidate>, next: Option<Revalidate>) -> Option<Revalidate> {
    match (current, next) {
        (Some(Revalidate::Seconds(a)), Some(Revalidate::Seconds(b))) => {
            Some(Revalidate::Seconds(a.min(b)))
        }
        (Some(Revalidate::Seconds(a)), Some(Revalidate::Never)) => Some(Revalidate::Seconds(a)),
        (_, Some(next)) => Some(next),
        (current, None) => current,
    }
}
