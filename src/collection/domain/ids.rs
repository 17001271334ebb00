//! Identifier type for the collection domain.

use crate::schema::entity_id;

entity_id! {
    /// Primary key of a stored collection.
    CollectionId
}
