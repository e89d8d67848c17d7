//! Structural metrics over trees.
//!
//! Each recursive metric comes as a pair: the tree half dispatches a
//! composite node's children to the forest half, and the forest half
//! recurses into its head tree and its tail forest. Matches are exhaustive
//! without wildcard arms, so adding a variant breaks every metric until it
//! is handled.

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::tree::{Btree, Forest};

/// Number of `Skill` leaves reachable from `tree`.
///
/// This is a size metric (fixtures, sizing, spotting pathological trees);
/// it says nothing about how many skills a tick will actually execute.
pub fn count_skills<S>(tree: &Btree<S>) -> usize {
    match tree {
        Btree::Skill(_) => 1,
        Btree::True => 0,
        Btree::Node { children, .. } => count_skills_forest(children),
        Btree::Dec { child, .. } => count_skills(child),
    }
}

/// Forest counterpart of [`count_skills`].
pub fn count_skills_forest<S>(forest: &Forest<S>) -> usize {
    match forest {
        Forest::Child(tree) => count_skills(tree),
        Forest::Add(tree, rest) => count_skills(tree) + count_skills_forest(rest),
    }
}

/// [`count_skills`] guarded by the depth limit in `config`.
pub fn count_skills_checked<S>(
    tree: &Btree<S>,
    config: &TreeConfig,
) -> Result<usize, TreeError> {
    check_depth(tree, config)?;
    Ok(count_skills(tree))
}

/// Total number of tree values (leaves, nodes, and decorators) in `tree`.
pub fn node_count<S>(tree: &Btree<S>) -> usize {
    match tree {
        Btree::Skill(_) | Btree::True => 1,
        Btree::Node { children, .. } => 1 + node_count_forest(children),
        Btree::Dec { child, .. } => 1 + node_count(child),
    }
}

/// Forest counterpart of [`node_count`].
pub fn node_count_forest<S>(forest: &Forest<S>) -> usize {
    match forest {
        Forest::Child(tree) => node_count(tree),
        Forest::Add(tree, rest) => node_count(tree) + node_count_forest(rest),
    }
}

/// Number of levels in `tree`; a lone leaf has depth 1.
///
/// Uses an explicit work stack instead of recursion, so it is safe on trees
/// of any depth and serves as the guard for the recursive passes.
pub fn depth<S>(tree: &Btree<S>) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(tree, 1usize)];

    while let Some((tree, level)) = stack.pop() {
        deepest = deepest.max(level);
        match tree {
            Btree::Skill(_) | Btree::True => {}
            Btree::Node { children, .. } => {
                stack.extend(children.iter().map(|child| (child, level + 1)));
            }
            Btree::Dec { child, .. } => stack.push((&**child, level + 1)),
        }
    }

    deepest
}

/// Fails with [`TreeError::TooDeep`] when `tree` exceeds `config.max_depth`.
pub fn check_depth<S>(tree: &Btree<S>, config: &TreeConfig) -> Result<usize, TreeError> {
    let depth = depth(tree);
    if depth > config.max_depth {
        return Err(TreeError::TooDeep {
            depth,
            max_depth: config.max_depth,
        });
    }
    Ok(depth)
}
