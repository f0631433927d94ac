use crate::domain::model::RenamePair;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Input file not found: {path}")]
    MissingInput { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Found {} invalid filename pair(s)", .pairs.len())]
    InvalidFilenames { pairs: Vec<RenamePair> },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RenameError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingInput { path } => {
                format!("The file '{}' does not exist.", path)
            }
            Self::CsvError(e) => {
                format!("An error occurred while reading the CSV file: {}", e)
            }
            Self::IoError(e) => {
                format!("An error occurred while writing the output files: {}", e)
            }
            Self::InvalidFilenames { pairs } => {
                format!("{} rename pair(s) contain invalid filename characters.", pairs.len())
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => {
                "Create the CSV file with two columns (old name, new name) and run again."
            }
            Self::CsvError(_) => "Check that the input file is a readable two-column CSV.",
            Self::IoError(_) => "Check permissions on the output directory.",
            Self::InvalidFilenames { .. } => {
                "Remove the characters < > : \" / \\ | ? * from the listed names."
            }
            Self::InvalidConfigValueError { .. } => {
                "Check the command line arguments and try again."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RenameError>;
