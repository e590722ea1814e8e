//! Diesel schema for the user directory.

diesel::table! {
    /// Provisioned studio users.
    users (id) {
        /// Store-assigned user identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Role enumerator.
        #[max_length = 50]
        role -> Varchar,
        /// Lower-cased contact address.
        #[max_length = 255]
        email -> Varchar,
        /// Stored credential record, legacy or hashed.
        #[max_length = 255]
        credential -> Varchar,
    }
}
