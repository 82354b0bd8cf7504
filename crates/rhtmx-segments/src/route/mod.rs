/// Route inputs for segment collection
///
/// - `pattern`: dynamic segment detection and parameter extraction
/// - `tree`: loader trees and their primary-chain cursor
/// - `module`: route modules and userland exports

pub mod module;
pub mod pattern;
pub mod tree;

pub use module::{
    AppPageRouteModule, AppRouteRouteModule, RouteDefinition, RouteModule, SegmentModule, Userland,
};
pub use pattern::{is_dynamic_segment, segment_param, ParamKind, SegmentParam};
pub use tree::{LoaderTree, PrimaryChain, SegmentComponents, CHILDREN_SLOT};
