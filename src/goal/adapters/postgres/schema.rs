//! Diesel schema for goal persistence.

diesel::table! {
    /// Goal records.
    goals (id) {
        /// Goal identifier.
        id -> Uuid,
        /// Goal title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Optional image reference document.
        image -> Nullable<Jsonb>,
        /// Goal type literal.
        #[sql_name = "type"]
        #[max_length = 50]
        goal_type -> Varchar,
        /// Review status literal.
        #[max_length = 50]
        status -> Varchar,
        /// Optional completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Optional approval timestamp.
        approved_at -> Nullable<Timestamptz>,
        /// Optional rejection timestamp.
        rejected_at -> Nullable<Timestamptz>,
        /// Optional rejection reason.
        rejection_reason -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
