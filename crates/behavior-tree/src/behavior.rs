//! Reference tick evaluation.
//!
//! This module defines the [`Behavior`] trait and implements it for
//! [`Btree`]. The evaluator is stateless: a tick walks the tree once, asks
//! the dispatcher for every skill leaf it reaches, and combines the results
//! bottom-up. It is the yardstick the normalizer is tested against, not a
//! scheduler; there is no memory of Running children between ticks.

use tracing::trace;

use crate::composite::tick_node;
use crate::decorator::tick_decorator;
use crate::dispatch::SkillDispatcher;
use crate::error::DispatchError;
use crate::{Btree, SkillRef, Status};

/// A node that can be ticked against a skill dispatcher.
pub trait Behavior<D> {
    /// Evaluates this node once.
    ///
    /// # Arguments
    ///
    /// * `dispatcher` - Executes the skills reached by the tick.
    ///
    /// # Errors
    ///
    /// A dispatcher error aborts the tick and is returned unchanged.
    fn tick(&self, dispatcher: &mut D) -> Result<Status, DispatchError>;
}

impl<S, D> Behavior<D> for Btree<S>
where
    S: SkillRef,
    D: SkillDispatcher<S>,
{
    fn tick(&self, dispatcher: &mut D) -> Result<Status, DispatchError> {
        match self {
            Btree::Skill(skill) => {
                let status = dispatcher.execute(skill)?;
                trace!(skill = skill.name(), ?status, "ticked skill");
                Ok(status)
            }
            Btree::True => Ok(Status::Success),
            Btree::Node {
                kind,
                label,
                children,
            } => {
                let status = tick_node(*kind, children, dispatcher)?;
                trace!(%kind, %label, ?status, "ticked node");
                Ok(status)
            }
            Btree::Dec { kind, label, child } => {
                let status = tick_decorator(*kind, &**child, dispatcher)?;
                trace!(%kind, %label, ?status, "ticked decorator");
                Ok(status)
            }
        }
    }
}
