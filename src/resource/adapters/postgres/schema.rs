//! Diesel schema for resource records.

diesel::table! {
    /// Documentation and deliverables attached to projects.
    resources (id) {
        /// Store-assigned resource identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Kind label.
        #[max_length = 100]
        kind -> Varchar,
        /// Content locator.
        locator -> Text,
        /// Page section.
        #[max_length = 50]
        category -> Varchar,
        /// Parent project.
        project_id -> Int8,
    }
}
