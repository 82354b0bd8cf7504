//! Segment collection errors
//!
//! Two audiences read these. Authors get [`SegmentError::InvalidConfig`]
//! and [`SegmentError::EdgeStaticParams`], which point at a file they can
//! fix. [`SegmentError::Invariant`] means the caller broke the collection
//! contract; tooling should show it with a backtrace instead.

use thiserror::Error;

use crate::schema::FieldError;

/// Errors from segment collection
///
/// Any error abandons collection for the route; no partial segment list
/// is returned.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Segment config exports failed validation
    #[error(
        "Invalid segment configuration options detected for \"{file_path}\":{}",
        format_issues(.issues)
    )]
    InvalidConfig {
        /// File whose exports were validated
        file_path: String,
        /// Every invalid field, in schema order
        issues: Vec<FieldError>,
    },

    /// `generateStaticParams` exported next to `runtime = 'edge'`
    #[error("Edge runtime is not supported with `generateStaticParams` (in \"{file_path}\")")]
    EdgeStaticParams {
        /// File exporting both
        file_path: String,
    },

    /// The module loader failed for a loader tree node
    #[error("failed to load module for segment \"{segment}\"")]
    ModuleLoad {
        /// Segment name of the node being resolved
        segment: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal contract breach
    #[error("Invariant: {0}")]
    Invariant(String),
}

impl SegmentError {
    pub fn invariant(message: impl Into<String>) -> Self {
        SegmentError::Invariant(message.into())
    }

    /// True for contract breaches that an author cannot fix
    pub fn is_invariant(&self) -> bool {
        matches!(self, SegmentError::Invariant(_))
    }
}

fn format_issues(issues: &[FieldError]) -> String {
    issues
        .iter()
        .map(|issue| format!("\n  - {issue}"))
        .collect()
}

pub type Result<T> = std::result::Result<T, SegmentError>;
