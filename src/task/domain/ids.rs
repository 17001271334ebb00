//! Identifier type for the task domain.

use crate::schema::entity_id;

entity_id! {
    /// Primary key of a stored task.
    TaskId
}
