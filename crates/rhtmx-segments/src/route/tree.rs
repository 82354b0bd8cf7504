/// Loader tree for app page routes
///
/// A loader tree describes the nested layouts and pages that compose one
/// page route. Every node has a segment name, the layout/page files that
/// back it, a primary `children` continuation and any number of named
/// parallel-route slots (`@analytics`, `@modal`, ...).
///
/// The tree is built by the caller and only ever read here.

use std::collections::BTreeMap;

/// Name of the slot that continues the primary chain
pub const CHILDREN_SLOT: &str = "children";

/// Files backing a loader tree node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentComponents {
    /// `layout` file for this segment
    pub layout: Option<String>,
    /// `page` file for this segment
    pub page: Option<String>,
}

impl SegmentComponents {
    /// The file that configures this segment: the layout when present,
    /// otherwise the page
    pub fn layout_or_page(&self) -> Option<&str> {
        self.layout.as_deref().or(self.page.as_deref())
    }
}

/// One node of a loader tree
///
/// # Examples
///
/// ```
/// use rhtmx_segments::route::tree::LoaderTree;
///
/// let tree = LoaderTree::new("")
///     .with_layout("app/layout.tsx")
///     .with_children(
///         LoaderTree::new("blog").with_children(
///             LoaderTree::new("[slug]").with_page("app/blog/[slug]/page.tsx"),
///         ),
///     );
///
/// let names: Vec<&str> = tree.primary_chain().map(|node| node.name()).collect();
/// assert_eq!(names, vec!["", "blog", "[slug]"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderTree {
    name: String,
    components: SegmentComponents,
    children: Option<Box<LoaderTree>>,
    slots: BTreeMap<String, LoaderTree>,
}

impl LoaderTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, file_path: impl Into<String>) -> Self {
        self.components.layout = Some(file_path.into());
        self
    }

    pub fn with_page(mut self, file_path: impl Into<String>) -> Self {
        self.components.page = Some(file_path.into());
        self
    }

    /// Sets the primary `children` continuation
    pub fn with_children(mut self, child: LoaderTree) -> Self {
        self.children = Some(Box::new(child));
        self
    }

    /// Adds a parallel-route slot
    ///
    /// A leading `@` is stripped. The `children` slot name addresses the
    /// primary continuation.
    pub fn with_slot(mut self, slot: impl Into<String>, tree: LoaderTree) -> Self {
        let slot = slot.into();
        let slot = slot.strip_prefix('@').unwrap_or(&slot).to_string();

        if slot == CHILDREN_SLOT {
            return self.with_children(tree);
        }

        self.slots.insert(slot, tree);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &SegmentComponents {
        &self.components
    }

    /// The primary `children` continuation, if any
    pub fn children(&self) -> Option<&LoaderTree> {
        self.children.as_deref()
    }

    /// Looks up a parallel route by slot name, `children` included
    pub fn parallel_route(&self, slot: &str) -> Option<&LoaderTree> {
        if slot == CHILDREN_SLOT {
            self.children()
        } else {
            self.slots.get(slot)
        }
    }

    /// Slot names other than `children`, in sorted order
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Iterates the primary chain from this node down to the deepest
    /// `children` node
    pub fn primary_chain(&self) -> PrimaryChain<'_> {
        PrimaryChain {
            current: Some(self),
        }
    }
}

/// Cursor over the primary `children` chain of a loader tree
///
/// For `root → blog → [slug]`, yields `root`, `blog`, `[slug]`. Named
/// slots are never visited.
#[derive(Debug, Clone)]
pub struct PrimaryChain<'a> {
    current: Option<&'a LoaderTree>,
}

impl<'a> Iterator for PrimaryChain<'a> {
    type Item = &'a LoaderTree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.children();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(depth: usize) -> LoaderTree {
        (0..depth)
            .rev()
            .fold(None, |child: Option<LoaderTree>, i| {
                let node = LoaderTree::new(format!("s{i}"));
                Some(match child {
                    Some(child) => node.with_children(child),
                    None => node,
                })
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_primary_chain_order() {
        let tree = chain(4);
        let names: Vec<&str> = tree.primary_chain().map(LoaderTree::name).collect();
        assert_eq!(names, vec!["s0", "s1", "s2", "s3"]);
    }

    #[test]
    fn test_single_node_chain() {
        let tree = LoaderTree::new("").with_page("app/page.tsx");
        assert_eq!(tree.primary_chain().count(), 1);
    }

    #[test]
    fn test_chain_skips_slots() {
        let tree = LoaderTree::new("")
            .with_slot("@analytics", LoaderTree::new("views"))
            .with_children(LoaderTree::new("dashboard"));

        let names: Vec<&str> = tree.primary_chain().map(LoaderTree::name).collect();
        assert_eq!(names, vec!["", "dashboard"]);
        assert_eq!(tree.slot_names().collect::<Vec<_>>(), vec!["analytics"]);
    }

    #[test]
    fn test_children_slot_is_primary() {
        let tree = LoaderTree::new("").with_slot("children", LoaderTree::new("about"));

        assert_eq!(tree.children().map(LoaderTree::name), Some("about"));
        assert_eq!(
            tree.parallel_route(CHILDREN_SLOT).map(LoaderTree::name),
            Some("about")
        );
        assert_eq!(tree.slot_names().count(), 0);
    }

    #[test]
    fn test_layout_preferred_over_page() {
        let tree = LoaderTree::new("blog")
            .with_layout("app/blog/layout.tsx")
            .with_page("app/blog/page.tsx");
        assert_eq!(
            tree.components().layout_or_page(),
            Some("app/blog/layout.tsx")
        );

        let tree = LoaderTree::new("blog").with_page("app/blog/page.tsx");
        assert_eq!(tree.components().layout_or_page(), Some("app/blog/page.tsx"));

        assert_eq!(LoaderTree::new("blog").components().layout_or_page(), None);
    }
}
