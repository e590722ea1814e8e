//! The deadline risk classifier.

use super::{Progress, ReferenceFrame, RiskTier};
use crate::project::domain::Project;
use crate::task::domain::Task;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Days ahead of the due date during which open work is [`RiskTier::Near`].
pub const NEAR_WINDOW_DAYS: i64 = 3;

/// Classifies deadline risk from progress, due date and the current day.
///
/// Settled work is always on time; open work without a due date is unknown;
/// otherwise the tier follows the whole-day distance from `today` to `due`.
#[must_use]
pub fn classify(
    progress: impl Into<Progress>,
    due: Option<NaiveDate>,
    today: NaiveDate,
) -> RiskTier {
    if progress.into() == Progress::Settled {
        return RiskTier::OnTime;
    }
    let Some(due) = due else {
        return RiskTier::Unknown;
    };
    if due < today {
        return RiskTier::Late;
    }
    if (due - today).num_days() <= NEAR_WINDOW_DAYS {
        RiskTier::Near
    } else {
        RiskTier::OnTime
    }
}

/// Clock-backed classifier shared by every read path.
#[derive(Debug)]
pub struct RiskClassifier<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    frame: ReferenceFrame,
}

impl<C> Clone for RiskClassifier<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            frame: self.frame,
        }
    }
}

impl<C> RiskClassifier<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a classifier reading "now" from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>, frame: ReferenceFrame) -> Self {
        Self { clock, frame }
    }

    /// Returns the current instant.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Returns the current calendar day in the reference frame.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.frame.day_of(self.clock.utc())
    }

    /// Classifies a task from its status and due date.
    #[must_use]
    pub fn classify_task(&self, task: &Task) -> RiskTier {
        classify(task.status(), task.due_date(), self.today())
    }

    /// Classifies a project from its state and due date.
    #[must_use]
    pub fn classify_project(&self, project: &Project) -> RiskTier {
        classify(project.state(), project.details().due_date(), self.today())
    }
}
