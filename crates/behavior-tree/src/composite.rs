//! Tick semantics of composite nodes.
//!
//! - [`NodeKind::Sequence`]: short-circuited AND. Children run left to right
//!   and the first status other than `Success` is returned.
//! - [`NodeKind::Fallback`]: short-circuited OR. Children run left to right
//!   and the first status other than `Failure` is returned.
//! - [`NodeKind::Parallel`]: every child runs in the same tick. The node
//!   succeeds once `threshold` children succeed, fails once so many have
//!   failed that the threshold is out of reach, and is `Running` otherwise.

use crate::dispatch::SkillDispatcher;
use crate::error::DispatchError;
use crate::{Behavior, Forest, NodeKind, SkillRef, Status};

/// Ticks a composite node of the given kind over `children`.
pub fn tick_node<S, D>(
    kind: NodeKind,
    children: &Forest<S>,
    dispatcher: &mut D,
) -> Result<Status, DispatchError>
where
    S: SkillRef,
    D: SkillDispatcher<S>,
{
    match kind {
        NodeKind::Sequence => tick_sequence(children, dispatcher),
        NodeKind::Fallback => tick_fallback(children, dispatcher),
        NodeKind::Parallel(threshold) => tick_parallel(threshold, children, dispatcher),
    }
}

fn tick_sequence<S, D>(children: &Forest<S>, dispatcher: &mut D) -> Result<Status, DispatchError>
where
    S: SkillRef,
    D: SkillDispatcher<S>,
{
    for child in children {
        match child.tick(dispatcher)? {
            Status::Success => continue,
            status @ (Status::Failure | Status::Running) => return Ok(status),
        }
    }
    Ok(Status::Success)
}

fn tick_fallback<S, D>(children: &Forest<S>, dispatcher: &mut D) -> Result<Status, DispatchError>
where
    S: SkillRef,
    D: SkillDispatcher<S>,
{
    for child in children {
        match child.tick(dispatcher)? {
            Status::Failure => continue,
            status @ (Status::Success | Status::Running) => return Ok(status),
        }
    }
    Ok(Status::Failure)
}

fn tick_parallel<S, D>(
    threshold: u32,
    children: &Forest<S>,
    dispatcher: &mut D,
) -> Result<Status, DispatchError>
where
    S: SkillRef,
    D: SkillDispatcher<S>,
{
    let threshold = usize::try_from(threshold).unwrap_or(usize::MAX);
    let mut total = 0;
    let mut successes = 0;
    let mut failures = 0;

    for child in children {
        total += 1;
        match child.tick(dispatcher)? {
            Status::Success => successes += 1,
            Status::Failure => failures += 1,
            Status::Running => {}
        }
    }

    if successes >= threshold {
        Ok(Status::Success)
    } else if total - failures < threshold {
        Ok(Status::Failure)
    } else {
        Ok(Status::Running)
    }
}
