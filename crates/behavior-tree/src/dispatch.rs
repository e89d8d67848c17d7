//! Skill dispatch.
//!
//! Leaves only name a skill; a [`SkillDispatcher`] performs it. The crate
//! ships [`DummySkills`], a dispatcher over a fixed set of test skills that
//! resolve instantly, for exercising trees without a real skill backend.

use tracing::{info, warn};

use crate::error::DispatchError;
use crate::{SkillRef, Status};

/// Performs the skill behind a skill reference.
pub trait SkillDispatcher<S> {
    /// Executes `skill` once and reports its status.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownSkill`] when the dispatcher cannot
    /// resolve the skill. Implementations must not map an unknown skill to
    /// `Success` or `Failure`.
    fn execute(&mut self, skill: &S) -> Result<Status, DispatchError>;
}

/// Closures act as dispatchers, which keeps ad hoc dispatch tables short.
impl<S, F> SkillDispatcher<S> for F
where
    F: FnMut(&S) -> Result<Status, DispatchError>,
{
    #[inline]
    fn execute(&mut self, skill: &S) -> Result<Status, DispatchError> {
        self(skill)
    }
}

/// Dispatcher over the built-in test skills.
///
/// | skill                  | status  |
/// |------------------------|---------|
/// | `Action1SecondSuccess` | Success |
/// | `Action1SecondFailure` | Failure |
/// | `ConditionTrue`        | Success |
/// | `ConditionFalse`       | Failure |
///
/// Any other name is an error. Actions complete immediately; there is no
/// simulated duration and no Running or halt support.
#[derive(Debug, Clone, Default)]
pub struct DummySkills {
    executed: usize,
}

impl DummySkills {
    /// Action that always succeeds.
    pub const ACTION_SUCCESS: &'static str = "Action1SecondSuccess";
    /// Action that always fails.
    pub const ACTION_FAILURE: &'static str = "Action1SecondFailure";
    /// Condition that always holds.
    pub const CONDITION_TRUE: &'static str = "ConditionTrue";
    /// Condition that never holds.
    pub const CONDITION_FALSE: &'static str = "ConditionFalse";

    /// Creates a dispatcher with no executions recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful dispatches so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Resolves a skill name to its fixed status.
    pub fn status_of(name: &str) -> Option<Status> {
        match name {
            Self::ACTION_SUCCESS | Self::CONDITION_TRUE => Some(Status::Success),
            Self::ACTION_FAILURE | Self::CONDITION_FALSE => Some(Status::Failure),
            _ => None,
        }
    }
}

impl<S: SkillRef> SkillDispatcher<S> for DummySkills {
    fn execute(&mut self, skill: &S) -> Result<Status, DispatchError> {
        let name = skill.name();
        let Some(status) = Self::status_of(name) else {
            warn!(skill = name, "skill not known");
            return Err(DispatchError::UnknownSkill(name.to_owned()));
        };

        self.executed += 1;
        info!(skill = name, ?status, "executing skill");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_skills_resolve() {
        let mut skills = DummySkills::new();
        assert_eq!(skills.execute(&"Action1SecondSuccess"), Ok(Status::Success));
        assert_eq!(skills.execute(&"Action1SecondFailure"), Ok(Status::Failure));
        assert_eq!(skills.execute(&"ConditionTrue"), Ok(Status::Success));
        assert_eq!(skills.execute(&"ConditionFalse"), Ok(Status::Failure));
        assert_eq!(skills.executed(), 4);
    }

    #[test]
    fn unknown_skill_is_an_error() {
        let mut skills = DummySkills::new();
        assert_eq!(
            skills.execute(&String::from("Teleport")),
            Err(DispatchError::UnknownSkill("Teleport".into()))
        );
        assert_eq!(skills.executed(), 0);
    }

    #[test]
    fn closures_dispatch() {
        let mut calls = 0;
        let mut dispatcher = |_: &&'static str| {
            calls += 1;
            Ok::<_, DispatchError>(Status::Running)
        };
        assert_eq!(dispatcher.execute(&"anything"), Ok(Status::Running));
        assert_eq!(calls, 1);
    }
}
