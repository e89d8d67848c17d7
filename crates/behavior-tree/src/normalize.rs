//! Structural normalization.
//!
//! [`normalize`] rewrites a tree bottom-up into a smaller tree with the same
//! tick behavior:
//!
//! - **Single-child elision**: a `Sequence` or `Fallback` over exactly one
//!   child is replaced by that child. `Parallel` nodes are always kept, since
//!   their threshold may not be satisfiable by a lone child.
//! - **Double negation**: `Not` directly over `Not` is replaced by the inner
//!   child.
//!
//! `Not(Not(t))` rewrites to the normal form of `t`. A `Not` whose child
//! only becomes a `Not` after normalization (for instance `Not` over a
//! single-child `Sequence` wrapping a `Not`) is collapsed as well, so the
//! result contains no redex and the pass is idempotent.
//!
//! Skill leaves are never created or removed.

use tracing::{debug, trace};

use crate::analysis::{check_depth, node_count};
use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::tree::{Btree, DecKind, Forest, NodeKind};

/// Returns the normal form of `tree`.
///
/// A `Not` is kept over any child except one whose normal form is itself a
/// `Not`. So `Not(Sequence[Not(a)])` normalizes to `a`, not to
/// `Not(Not(a))`: idempotence wins over keeping every single negation.
pub fn normalize<S: Clone>(tree: &Btree<S>) -> Btree<S> {
    match tree {
        Btree::Skill(_) | Btree::True => tree.clone(),
        Btree::Node {
            kind,
            label,
            children,
        } => match (kind, children) {
            (NodeKind::Sequence | NodeKind::Fallback, Forest::Child(only)) => {
                trace!(%kind, %label, "eliding single-child node");
                normalize(only)
            }
            (NodeKind::Sequence | NodeKind::Fallback | NodeKind::Parallel(_), _) => Btree::Node {
                kind: *kind,
                label: label.clone(),
                children: normalize_forest(children),
            },
        },
        Btree::Dec { kind, label, child } => match (kind, &**child) {
            (
                DecKind::Not,
                Btree::Dec {
                    kind: DecKind::Not,
                    child: inner,
                    ..
                },
            ) => {
                trace!(%label, "eliding double negation");
                normalize(inner)
            }
            (DecKind::Not, child) => match normalize(child) {
                Btree::Dec {
                    kind: DecKind::Not,
                    child: inner,
                    ..
                } => {
                    trace!(%label, "eliding double negation exposed by a rewrite");
                    *inner
                }
                child => Btree::Dec {
                    kind: DecKind::Not,
                    label: label.clone(),
                    child: Box::new(child),
                },
            },
            (DecKind::IsRunning, child) => Btree::Dec {
                kind: DecKind::IsRunning,
                label: label.clone(),
                child: Box::new(normalize(child)),
            },
        },
    }
}

/// Normalizes every tree of `forest`, keeping order and length.
pub fn normalize_forest<S: Clone>(forest: &Forest<S>) -> Forest<S> {
    match forest {
        Forest::Child(tree) => Forest::child(normalize(tree)),
        Forest::Add(tree, rest) => Forest::add(normalize(tree), normalize_forest(rest)),
    }
}

/// [`normalize`] guarded by the depth limit in `config`.
pub fn normalize_checked<S: Clone>(
    tree: &Btree<S>,
    config: &TreeConfig,
) -> Result<Btree<S>, TreeError> {
    let depth = check_depth(tree, config)?;
    let normalized = normalize(tree);
    debug!(
        depth,
        before = node_count(tree),
        after = node_count(&normalized),
        "normalized tree"
    );
    Ok(normalized)
}

/// Returns `true` if no rewrite rule applies anywhere in `tree`, that is,
/// when `normalize(tree) == *tree`.
pub fn is_normal<S>(tree: &Btree<S>) -> bool {
    match tree {
        Btree::Skill(_) | Btree::True => true,
        Btree::Node { kind, children, .. } => match (kind, children) {
            (NodeKind::Sequence | NodeKind::Fallback, Forest::Child(_)) => false,
            (NodeKind::Sequence | NodeKind::Fallback | NodeKind::Parallel(_), _) => {
                is_normal_forest(children)
            }
        },
        Btree::Dec { kind, child, .. } => match (kind, &**child) {
            (
                DecKind::Not,
                Btree::Dec {
                    kind: DecKind::Not, ..
                },
            ) => false,
            (DecKind::Not | DecKind::IsRunning, child) => is_normal(child),
        },
    }
}

/// Forest counterpart of [`is_normal`].
pub fn is_normal_forest<S>(forest: &Forest<S>) -> bool {
    match forest {
        Forest::Child(tree) => is_normal(tree),
        Forest::Add(tree, rest) => is_normal(tree) && is_normal_forest(rest),
    }
}
