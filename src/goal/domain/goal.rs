//! Goal aggregate root, construction draft, and change set.

use super::{GoalId, GoalStatus, GoalTitle, GoalType, declaration};
use crate::image::ImageRef;
use crate::schema::{Patch, RecordError, SchemaConstructionError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Goal aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    id: GoalId,
    title: GoalTitle,
    description: Option<String>,
    image: Option<ImageRef>,
    #[serde(rename = "type")]
    goal_type: GoalType,
    status: GoalStatus,
    completed_at: Option<DateTime<Utc>>,
    approved_at: Option<DateTime<Utc>>,
    rejected_at: Option<DateTime<Utc>>,
    rejection_reason: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedGoalData {
    /// Persisted goal identifier.
    pub id: GoalId,
    /// Persisted title.
    pub title: GoalTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted image reference, if any.
    pub image: Option<ImageRef>,
    /// Persisted goal type.
    pub goal_type: GoalType,
    /// Persisted review status.
    pub status: GoalStatus,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted approval timestamp, if any.
    pub approved_at: Option<DateTime<Utc>>,
    /// Persisted rejection timestamp, if any.
    pub rejected_at: Option<DateTime<Utc>>,
    /// Persisted rejection reason, if any.
    pub rejection_reason: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Entity kind name used in schema descriptors and errors.
    pub const ENTITY: &'static str = "Goal";

    /// Returns an empty draft for constructing a new goal.
    #[must_use]
    pub fn draft() -> GoalDraft {
        GoalDraft::default()
    }

    /// Reconstructs a goal from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedGoalData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            image: data.image,
            goal_type: data.goal_type,
            status: data.status,
            completed_at: data.completed_at,
            approved_at: data.approved_at,
            rejected_at: data.rejected_at,
            rejection_reason: data.rejection_reason,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the goal identifier.
    #[must_use]
    pub const fn id(&self) -> GoalId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &GoalTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the image reference, if any.
    #[must_use]
    pub const fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Returns the goal type.
    #[must_use]
    pub const fn goal_type(&self) -> GoalType {
        self.goal_type
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> GoalStatus {
        self.status
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the approval timestamp, if any.
    #[must_use]
    pub const fn approved_at(&self) -> Option<DateTime<Utc>> {
        self.approved_at
    }

    /// Returns the rejection timestamp, if any.
    #[must_use]
    pub const fn rejected_at(&self) -> Option<DateTime<Utc>> {
        self.rejected_at
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a change set.
    ///
    /// Returns `false` without touching the record when the change set is
    /// empty; otherwise advances `updated_at`. Status and the review
    /// timestamps are written independently of each other.
    pub fn apply(&mut self, changes: GoalChanges, clock: &impl Clock) -> bool {
        if changes.is_empty() {
            return false;
        }

        let GoalChanges {
            title,
            description,
            image,
            goal_type,
            status,
            completed_at,
            approved_at,
            rejected_at,
            rejection_reason,
        } = changes;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = goal_type {
            self.goal_type = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        description.apply_to(&mut self.description);
        image.apply_to(&mut self.image);
        completed_at.apply_to(&mut self.completed_at);
        approved_at.apply_to(&mut self.approved_at);
        rejected_at.apply_to(&mut self.rejected_at);
        rejection_reason.apply_to(&mut self.rejection_reason);

        self.touch(clock);
        true
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Builder collecting goal fields before construction.
///
/// `title` and `goal_type` are required. The title is validated when the
/// goal is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    id: Option<GoalId>,
    title: Option<String>,
    description: Option<String>,
    image: Option<ImageRef>,
    goal_type: Option<GoalType>,
    status: Option<GoalStatus>,
    completed_at: Option<DateTime<Utc>>,
    approved_at: Option<DateTime<Utc>>,
    rejected_at: Option<DateTime<Utc>>,
    rejection_reason: Option<String>,
}

impl GoalDraft {
    /// Sets a specific goal identifier.
    #[must_use]
    pub const fn with_id(mut self, id: GoalId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the raw title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the goal type.
    #[must_use]
    pub const fn with_goal_type(mut self, goal_type: GoalType) -> Self {
        self.goal_type = Some(goal_type);
        self
    }

    /// Overrides the default `PENDING` status.
    #[must_use]
    pub const fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Sets the approval timestamp.
    #[must_use]
    pub const fn with_approved_at(mut self, approved_at: DateTime<Utc>) -> Self {
        self.approved_at = Some(approved_at);
        self
    }

    /// Sets the rejection timestamp.
    #[must_use]
    pub const fn with_rejected_at(mut self, rejected_at: DateTime<Utc>) -> Self {
        self.rejected_at = Some(rejected_at);
        self
    }

    /// Sets the rejection reason.
    #[must_use]
    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    /// Builds the goal, stamping both timestamps from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Construction`] when the title or goal type was
    /// never supplied, or [`RecordError::Validation`] when the title breaks
    /// its length rules.
    pub fn build(self, clock: &impl Clock) -> Result<Goal, RecordError> {
        let raw_title =
            SchemaConstructionError::require(self.title, Goal::ENTITY, declaration::TITLE)?;
        let title = GoalTitle::new(raw_title)?;
        let goal_type =
            SchemaConstructionError::require(self.goal_type, Goal::ENTITY, declaration::GOAL_TYPE)?;

        let timestamp = clock.utc();
        Ok(Goal {
            id: self.id.unwrap_or_default(),
            title,
            description: self.description,
            image: self.image,
            goal_type,
            status: self.status.unwrap_or_default(),
            completed_at: self.completed_at,
            approved_at: self.approved_at,
            rejected_at: self.rejected_at,
            rejection_reason: self.rejection_reason,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }
}

/// Field changes applied to an existing goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalChanges {
    /// New title.
    pub title: Option<GoalTitle>,
    /// Description change.
    pub description: Patch<String>,
    /// Image change.
    pub image: Patch<ImageRef>,
    /// New goal type.
    pub goal_type: Option<GoalType>,
    /// New review status.
    pub status: Option<GoalStatus>,
    /// Completion timestamp change.
    pub completed_at: Patch<DateTime<Utc>>,
    /// Approval timestamp change.
    pub approved_at: Patch<DateTime<Utc>>,
    /// Rejection timestamp change.
    pub rejected_at: Patch<DateTime<Utc>>,
    /// Rejection reason change.
    pub rejection_reason: Patch<String>,
}

impl GoalChanges {
    /// Returns whether the change set modifies nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_unchanged()
            && self.image.is_unchanged()
            && self.goal_type.is_none()
            && self.status.is_none()
            && self.completed_at.is_unchanged()
            && self.approved_at.is_unchanged()
            && self.rejected_at.is_unchanged()
            && self.rejection_reason.is_unchanged()
    }
}
