//! Diesel schema for project persistence.

diesel::table! {
    /// Studio projects.
    projects (id) {
        /// Store-assigned project identifier.
        id -> Int8,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Managing user.
        manager_id -> Int8,
        /// Whole budget amount.
        budget -> Int8,
        /// Calendar due date.
        due_date -> Nullable<Date>,
        /// Genre label.
        #[max_length = 100]
        genre -> Varchar,
        /// Target platforms label.
        #[max_length = 255]
        platforms -> Varchar,
        /// Engine label.
        #[max_length = 100]
        engine -> Varchar,
        /// Lifecycle state.
        #[max_length = 50]
        state -> Varchar,
    }
}
