use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A persisted enumeration column holds a value the application doesn't know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column '{column}'")]
    InvalidEnumValue {
        /// Column the value was read from
        column: &'static str,
        /// The stored value
        value: String,
    },

    /// Password hashing failed.
    ///
    /// Only happens with invalid Argon2 parameters or a broken random source.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// A row that was just written could not be read back.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite {
        /// Entity name
        entity: &'static str,
        /// Primary key of the row
        id: i32,
    },
}
