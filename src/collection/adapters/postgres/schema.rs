//! Diesel schema for collection persistence.

diesel::table! {
    /// Collection records.
    collections (id) {
        /// Collection identifier.
        id -> Uuid,
        /// Display name.
        name -> Text,
        /// Optional image reference document.
        image -> Nullable<Jsonb>,
        /// Optional description.
        description -> Nullable<Text>,
        /// Optional search-engine title.
        seo_title -> Nullable<Text>,
        /// Optional search-engine description.
        seo_description -> Nullable<Text>,
        /// Visibility flag.
        is_active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
