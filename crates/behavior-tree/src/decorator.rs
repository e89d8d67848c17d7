//! Tick semantics of decorators.
//!
//! [`DecKind::Not`] inverts Success and Failure and passes `Running`
//! through. [`DecKind::IsRunning`] succeeds exactly when its child is
//! `Running` in this tick.

use crate::dispatch::SkillDispatcher;
use crate::error::DispatchError;
use crate::{Behavior, Btree, DecKind, SkillRef, Status};

/// Ticks a decorator of the given kind over `child`.
pub fn tick_decorator<S, D>(
    kind: DecKind,
    child: &Btree<S>,
    dispatcher: &mut D,
) -> Result<Status, DispatchError>
where
    S: SkillRef,
    D: SkillDispatcher<S>,
{
    let status = child.tick(dispatcher)?;
    Ok(match kind {
        DecKind::Not => status.invert(),
        DecKind::IsRunning if status.is_running() => Status::Success,
        DecKind::IsRunning => Status::Failure,
    })
}
