//! Diesel schema for task persistence.

diesel::table! {
    /// Tasks attached to projects.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Assigned user.
        assignee_id -> Int8,
        /// Parent project.
        project_id -> Int8,
        /// Calendar due date.
        due_date -> Nullable<Date>,
        /// Status storage value.
        #[max_length = 50]
        status -> Varchar,
    }
}
