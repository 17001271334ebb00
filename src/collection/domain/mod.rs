//! Domain model for catalogue collections.

mod collection;
mod declaration;
mod ids;

pub use collection::{Collection, CollectionChanges, CollectionDraft, PersistedCollectionData};
pub use declaration::{COLLECTIONS_TABLE, collection_schema};
pub use ids::CollectionId;
