//! Builder utilities for ergonomic tree construction.
//!
//! Instead of spelling out `Btree::node(NodeKind::Sequence, "label", ...)`,
//! use the short helpers here together with the [`forest!`](crate::forest)
//! macro:
//!
//! ```
//! use behavior_tree::builder::{fallback, not, sequence, skill};
//! use behavior_tree::forest;
//!
//! let tree = fallback(
//!     "open",
//!     forest![
//!         sequence("unlocked", forest![not("free", skill("IsLocked")), skill("Push")]),
//!         skill("Kick"),
//!     ],
//! );
//! assert_eq!(behavior_tree::count_skills(&tree), 3);
//! ```

use crate::{Btree, DecKind, Forest, NodeKind};

/// Creates a skill leaf.
#[inline]
pub fn skill<S>(skill: S) -> Btree<S> {
    Btree::skill(skill)
}

/// Creates the constant-success leaf.
#[inline]
pub fn truth<S>() -> Btree<S> {
    Btree::truth()
}

/// Creates a sequence node.
#[inline]
pub fn sequence<S>(label: impl Into<String>, children: Forest<S>) -> Btree<S> {
    Btree::node(NodeKind::Sequence, label, children)
}

/// Creates a fallback node.
#[inline]
pub fn fallback<S>(label: impl Into<String>, children: Forest<S>) -> Btree<S> {
    Btree::node(NodeKind::Fallback, label, children)
}

/// Creates a parallel node that succeeds once `threshold` children succeed.
#[inline]
pub fn parallel<S>(threshold: u32, label: impl Into<String>, children: Forest<S>) -> Btree<S> {
    Btree::node(NodeKind::Parallel(threshold), label, children)
}

/// Creates a negation decorator.
#[inline]
pub fn not<S>(label: impl Into<String>, child: Btree<S>) -> Btree<S> {
    Btree::dec(DecKind::Not, label, child)
}

/// Creates an is-running decorator.
#[inline]
pub fn is_running<S>(label: impl Into<String>, child: Btree<S>) -> Btree<S> {
    Btree::dec(DecKind::IsRunning, label, child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest;

    #[test]
    fn helpers_match_constructors() {
        let built = parallel(2, "p", forest![skill("a"), truth()]);
        let explicit = Btree::Node {
            kind: NodeKind::Parallel(2),
            label: "p".to_owned(),
            children: Forest::add(Btree::Skill("a"), Forest::child(Btree::True)),
        };
        assert_eq!(built, explicit);

        let dec = is_running("r", skill("a"));
        assert_eq!(dec, Btree::dec(DecKind::IsRunning, "r", Btree::skill("a")));
    }
}
