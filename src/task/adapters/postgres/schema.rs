//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Coins granted on approval.
        coin_reward -> Int4,
        /// Difficulty literal.
        #[max_length = 50]
        difficulty_level -> Varchar,
        /// Lifecycle status literal.
        #[max_length = 50]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Optional duration in minutes.
        duration -> Nullable<Int4>,
        /// Recurrence flag.
        is_recurring -> Bool,
        /// Optional recurrence interval literal.
        #[max_length = 50]
        recurring_frequency -> Nullable<Varchar>,
        /// Optional completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
