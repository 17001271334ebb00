//! In-memory integration tests for the collection catalogue.

use super::helpers::{CatalogService, catalog_service};
use rewardly::collection::{domain::CollectionChanges, services::CreateCollectionRequest};
use rewardly::image::ImageRef;
use rewardly::schema::Patch;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_collections_are_active_and_listed(catalog_service: CatalogService) {
    let image = ImageRef::new("https://cdn.example.com/games.png")
        .expect("valid image")
        .with_storage_key("collections/games.png");

    let created = catalog_service
        .create(CreateCollectionRequest::new("Board games").with_image(image.clone()))
        .await
        .expect("collection creation should succeed");

    assert!(created.is_active());
    assert_eq!(created.image(), Some(&image));
    assert_eq!(created.created_at(), created.updated_at());
    let active = catalog_service
        .list_active()
        .await
        .expect("listing should succeed");
    assert_eq!(active, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hidden_collections_stay_in_the_full_listing(catalog_service: CatalogService) {
    let created = catalog_service
        .create(CreateCollectionRequest::new("Holiday specials"))
        .await
        .expect("collection creation should succeed");

    let hidden = catalog_service
        .deactivate(created.id())
        .await
        .expect("deactivation should succeed");

    assert!(!hidden.is_active());
    assert!(hidden.updated_at() > created.updated_at());
    assert!(
        catalog_service
            .list_active()
            .await
            .expect("active listing")
            .is_empty()
    );
    assert_eq!(
        catalog_service.list_all().await.expect("full listing"),
        vec![hidden]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_the_image_persists(catalog_service: CatalogService) {
    let image = ImageRef::new("https://cdn.example.com/old.png").expect("valid image");
    let created = catalog_service
        .create(CreateCollectionRequest::new("Outdoor").with_image(image))
        .await
        .expect("collection creation should succeed");

    catalog_service
        .update(
            created.id(),
            CollectionChanges {
                image: Patch::Cleared,
                ..CollectionChanges::default()
            },
        )
        .await
        .expect("update should succeed");

    let stored = catalog_service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed")
        .expect("collection should exist");
    assert_eq!(stored.image(), None);
    assert_eq!(stored.name(), "Outdoor");
}
