#[derive(Debug, thiserror::Error)]
pub enum NrfError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Random source error: {0}")]
    RandomSource(String),

    #[error("PLMN source error: {0}")]
    PlmnSource(String),
}

impl NrfError {
    pub fn missing_field(field: &str) -> Self {
        NrfError::Validation(format!("{} field is required", field))
    }
}

impl From<mongodb::error::Error> for NrfError {
    fn from(err: mongodb::error::Error) -> Self {
        NrfError::StoreUnavailable(format!("Database error: {}", err))
    }
}

impl From<mongodb::bson::de::Error> for NrfError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        NrfError::Decode(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for NrfError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        NrfError::Decode(format!("Failed to encode document: {}", err))
    }
}

pub type NrfResult<T> = Result<T, NrfError>;
