use validator::ValidationErrors;

/// Validation error code for a missing or empty field.
pub const REQUIRED: &str = "required";

/// Validation error code for a malformed email address.
pub const EMAIL: &str = "email";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("All fields are required")]
    FieldsRequired,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Failed to send email. Please try again later.")]
    Delivery(#[source] anyhow::Error),

    #[error("Something went wrong, please retry later")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors caused by the submitted data rather than by the server.
    pub fn is_client(&self) -> bool {
        matches!(self, Self::FieldsRequired | Self::InvalidEmail)
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .any(|error| error.code == REQUIRED);

        if missing {
            Self::FieldsRequired
        } else {
            Self::InvalidEmail
        }
    }
}
