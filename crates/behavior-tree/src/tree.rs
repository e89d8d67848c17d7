//! Recursive tree and forest data model.
//!
//! A [`Btree`] is either a leaf ([`Btree::Skill`], [`Btree::True`]), a
//! composite [`Btree::Node`] over a [`Forest`] of children, or a unary
//! [`Btree::Dec`] decorator. A [`Forest`] is a cons-list with a
//! single-tree base case, so a composite node can never be built without a
//! child: non-emptiness is a property of the type, not a runtime check.
//!
//! Both types are immutable values. Every transform in this crate builds a
//! new tree and leaves its input untouched.

use core::fmt;

use crate::SkillRef;
use crate::error::TreeError;

/// Combinator of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Succeeds only if every child succeeds, left to right.
    Sequence,
    /// Succeeds as soon as one child succeeds, left to right.
    Fallback,
    /// Ticks every child; succeeds once `threshold` children succeed.
    Parallel(u32),
}

/// Kind of a unary decorator.
///
/// `IsEnabled` is reserved and deliberately absent; stateful decorators are
/// meant to be composed from ordinary sub-trees and external skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecKind {
    /// Swaps Success and Failure of the child.
    Not,
    /// Reports whether the child is Running.
    IsRunning,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Parallel(threshold) => write!(f, "Parallel({threshold})"),
            NodeKind::Sequence | NodeKind::Fallback => f.write_str(self.into()),
        }
    }
}

impl fmt::Display for DecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}

/// A behavior tree over the skill universe `S`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Btree<S> {
    /// Leaf invoking an external skill.
    Skill(S),
    /// Leaf that always succeeds.
    True,
    /// Composite node. The label is diagnostic only.
    Node {
        kind: NodeKind,
        label: String,
        children: Forest<S>,
    },
    /// Unary decorator. The label is diagnostic only.
    Dec {
        kind: DecKind,
        label: String,
        child: Box<Btree<S>>,
    },
}

/// Non-empty ordered sequence of sibling trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Forest<S> {
    /// A forest holding exactly one tree.
    Child(Box<Btree<S>>),
    /// A tree followed by the rest of the forest.
    Add(Box<Btree<S>>, Box<Forest<S>>),
}

impl<S> Btree<S> {
    /// Creates a skill leaf.
    pub fn skill(skill: S) -> Self {
        Btree::Skill(skill)
    }

    /// Creates the constant-success leaf.
    pub fn truth() -> Self {
        Btree::True
    }

    /// Creates a composite node.
    pub fn node(kind: NodeKind, label: impl Into<String>, children: Forest<S>) -> Self {
        Btree::Node {
            kind,
            label: label.into(),
            children,
        }
    }

    /// Creates a decorator over `child`.
    pub fn dec(kind: DecKind, label: impl Into<String>, child: Btree<S>) -> Self {
        Btree::Dec {
            kind,
            label: label.into(),
            child: Box::new(child),
        }
    }

    /// Returns `true` for `Skill` and `True`.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Btree::Skill(_) | Btree::True)
    }

    /// Returns the diagnostic label of a node or decorator.
    pub fn label(&self) -> Option<&str> {
        match self {
            Btree::Node { label, .. } | Btree::Dec { label, .. } => Some(label),
            Btree::Skill(_) | Btree::True => None,
        }
    }
}

impl<S> Forest<S> {
    /// Creates a forest holding a single tree.
    pub fn child(tree: Btree<S>) -> Self {
        Forest::Child(Box::new(tree))
    }

    /// Prepends `tree` to `rest`.
    pub fn add(tree: Btree<S>, rest: Forest<S>) -> Self {
        Forest::Add(Box::new(tree), Box::new(rest))
    }

    /// Creates a forest from a first tree followed by any number of others,
    /// preserving order.
    pub fn from_trees(first: Btree<S>, rest: impl IntoIterator<Item = Btree<S>>) -> Self {
        let mut rest: Vec<Btree<S>> = rest.into_iter().collect();
        let Some(last) = rest.pop() else {
            return Forest::child(first);
        };

        let mut tail = Forest::child(last);
        while let Some(tree) = rest.pop() {
            tail = Forest::add(tree, tail);
        }
        Forest::add(first, tail)
    }

    /// Returns the first tree.
    pub fn first(&self) -> &Btree<S> {
        match self {
            Forest::Child(tree) | Forest::Add(tree, _) => tree,
        }
    }

    /// Returns `true` if the forest holds exactly one tree.
    #[inline]
    pub fn is_single(&self) -> bool {
        matches!(self, Forest::Child(_))
    }

    /// Number of trees in the forest. Always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the trees in order.
    pub fn iter(&self) -> ForestIter<'_, S> {
        ForestIter { next: Some(self) }
    }
}

impl<S> TryFrom<Vec<Btree<S>>> for Forest<S> {
    type Error = TreeError;

    fn try_from(trees: Vec<Btree<S>>) -> Result<Self, Self::Error> {
        let mut trees = trees.into_iter();
        let first = trees.next().ok_or(TreeError::EmptyForest)?;
        Ok(Forest::from_trees(first, trees))
    }
}

/// Borrowing iterator over the trees of a [`Forest`].
#[derive(Debug, Clone)]
pub struct ForestIter<'a, S> {
    next: Option<&'a Forest<S>>,
}

impl<'a, S> Iterator for ForestIter<'a, S> {
    type Item = &'a Btree<S>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next.take()? {
            Forest::Child(tree) => Some(&**tree),
            Forest::Add(tree, rest) => {
                self.next = Some(&**rest);
                Some(&**tree)
            }
        }
    }
}

impl<'a, S> IntoIterator for &'a Forest<S> {
    type Item = &'a Btree<S>;
    type IntoIter = ForestIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a [`Forest`] from one or more trees.
///
/// ```
/// use behavior_tree::{Btree, forest};
///
/// let children = forest![Btree::skill("a"), Btree::skill("b")];
/// assert_eq!(children.len(), 2);
/// ```
///
/// An empty invocation does not match any rule, so an empty forest cannot
/// be written.
#[macro_export]
macro_rules! forest {
    ($only:expr $(,)?) => {
        $crate::Forest::child($only)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::Forest::add($first, $crate::forest!($($rest),+))
    };
}

// Outline rendering, one node per line.

impl<S: SkillRef> fmt::Display for Btree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, f, 0)
    }
}

fn write_tree<S: SkillRef>(
    tree: &Btree<S>,
    f: &mut fmt::Formatter<'_>,
    indent: usize,
) -> fmt::Result {
    write!(f, "{:width$}", "", width = indent * 2)?;
    match tree {
        Btree::Skill(skill) => write!(f, "Skill {}", skill.name()),
        Btree::True => f.write_str("True"),
        Btree::Node {
            kind,
            label,
            children,
        } => {
            write!(f, "{kind} {label:?}")?;
            write_forest(children, f, indent + 1)
        }
        Btree::Dec { kind, label, child } => {
            writeln!(f, "{kind} {label:?}")?;
            write_tree(child, f, indent + 1)
        }
    }
}

fn write_forest<S: SkillRef>(
    forest: &Forest<S>,
    f: &mut fmt::Formatter<'_>,
    indent: usize,
) -> fmt::Result {
    match forest {
        Forest::Child(tree) => {
            writeln!(f)?;
            write_tree(tree, f, indent)
        }
        Forest::Add(tree, rest) => {
            writeln!(f)?;
            write_tree(tree, f, indent)?;
            write_forest(rest, f, indent)
        }
    }
}
