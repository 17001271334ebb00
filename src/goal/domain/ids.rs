//! Identifier type for the goal domain.

use crate::schema::entity_id;

entity_id! {
    /// Primary key of a stored goal.
    GoalId
}
