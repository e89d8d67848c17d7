/// Traversal limits for the recursive passes over a tree.
///
/// `count_skills` and `normalize` recurse once per tree level, so their
/// stack usage grows with depth. The checked entry points measure depth
/// iteratively first and refuse trees deeper than `max_depth`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Deepest tree (counted in levels, a lone leaf being 1) that checked
    /// traversals accept.
    pub max_depth: usize,
}

impl TreeConfig {
    /// Fits the debug-build frames of `normalize` on a 2 MiB thread stack.
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
