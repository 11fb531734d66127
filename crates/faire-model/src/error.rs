use thiserror::Error;

/// Structural input errors. Any of these aborts the invocation before output
/// is written.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FaireError {
    #[error("required sheet '{sheet}' is missing from the input")]
    MissingSheet { sheet: String },

    #[error("sheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: String },

    #[error("sheet '{sheet}' row {line} has no value for identifier column '{column}'")]
    MissingIdentifier {
        sheet: String,
        line: usize,
        column: String,
    },

    #[error("duplicate sample alias '{alias}' (rows {first_line} and {line})")]
    DuplicateAlias {
        alias: String,
        first_line: usize,
        line: usize,
    },

    #[error("receipt reports an unsuccessful submission: {}", messages.join("; "))]
    ReceiptRejected { messages: Vec<String> },

    #[error("malformed receipt: {message}")]
    MalformedReceipt { message: String },

    #[error("{0}")]
    Message(String),
}

impl FaireError {
    pub fn missing_sheet(sheet: impl Into<String>) -> Self {
        Self::MissingSheet {
            sheet: sheet.into(),
        }
    }

    pub fn malformed_receipt(message: impl std::fmt::Display) -> Self {
        Self::MalformedReceipt {
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FaireError>;
