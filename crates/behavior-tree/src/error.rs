//! Error types.
//!
//! The structural core (`count_skills`, `normalize`) is total and never
//! returns these. They surface only at the edges: converting untyped input
//! into a forest, enforcing traversal limits, and dispatching skills.

/// Errors raised while building or checking a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A forest was requested from an empty collection of trees.
    #[error("a forest needs at least one tree")]
    EmptyForest,

    /// The tree is deeper than the configured traversal limit.
    #[error("tree depth {depth} exceeds the maximum of {max_depth}")]
    TooDeep { depth: usize, max_depth: usize },
}

/// Errors raised by a skill dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The dispatcher has no skill registered under this name.
    #[error("skill `{0}` is not known")]
    UnknownSkill(String),
}
