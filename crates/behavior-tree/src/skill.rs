//! Skill universe abstraction.
//!
//! A behavior tree never hard-codes the set of skills it can invoke. Leaves
//! carry an opaque skill reference `S`, and the application decides what
//! that reference is (a closed enum, an interned id, a plain string) by
//! implementing [`SkillRef`] for it.

use core::fmt::Debug;

/// An identifier naming an external skill.
///
/// The only capability the tree needs is resolving a reference to a
/// human-readable name, used for rendering and by name-keyed dispatchers.
pub trait SkillRef: Clone + Eq + Debug {
    /// Returns the name of the skill this reference points to.
    fn name(&self) -> &str;
}

impl SkillRef for String {
    #[inline]
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl SkillRef for &'static str {
    #[inline]
    fn name(&self) -> &str {
        self
    }
}
