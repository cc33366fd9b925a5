use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SaveError {
    #[error("La fecha de ingreso no puede ser futura.")]
    FutureEntryDate,
    #[error("Required fields are empty")]
    IncompleteFields,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseRecordError {
    #[error("Amount is not a valid quantity: {0}")]
    InvalidAmount(String),
    #[error("Entry date is not an iso date: {0}")]
    InvalidEntryDate(String),
    #[error("Field is missing: {0}")]
    MissingField(&'static str),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown equipment type: {0}")]
    UnknownEquipmentType(String),
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
    #[error("Unknown condition: {0}")]
    UnknownUtility(String),
}
