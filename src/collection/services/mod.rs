//! Application services for the collection catalogue.

mod catalog;

pub use catalog::{
    CollectionCatalogError, CollectionCatalogResult, CollectionCatalogService,
    CreateCollectionRequest,
};
