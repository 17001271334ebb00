//! Integration tests tying the schema registry to the shipped migration.

use rewardly::schema::{PostgresTypeMapper, SchemaRegistry};
use rstest::{fixture, rstest};

const UP_MIGRATION: &str =
    include_str!("../migrations/2026-10-01-000000_create_rewardly_tables/up.sql");

#[fixture]
fn registry() -> SchemaRegistry {
    SchemaRegistry::initialize(&PostgresTypeMapper).expect("registry should initialize")
}

#[rstest]
#[case("Task")]
#[case("Goal")]
#[case("Collection")]
fn migration_creates_each_table_as_declared(registry: SchemaRegistry, #[case] entity: &str) {
    let schema = registry.get(entity).expect("registered entity");

    let statement = schema.create_table_sql();

    assert!(
        UP_MIGRATION.contains(&statement),
        "migration is out of date for {entity}:\n{statement}"
    );
}

#[rstest]
fn initialization_is_repeatable(registry: SchemaRegistry) {
    let again = SchemaRegistry::initialize(&PostgresTypeMapper).expect("second initialization");

    assert_eq!(again, registry);
}
