use serde::{Deserialize, Serialize};

/// One `SAMPLE` entry of an archive receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptEntry {
    pub alias: String,
    pub accession: String,
    /// BioSample accession from a nested `EXT_ID`, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biosample: Option<String>,
}

/// A parsed receipt document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Receipt {
    pub success: bool,
    /// Sample entries in document order.
    pub samples: Vec<ReceiptEntry>,
    /// Text of `ERROR` messages.
    pub errors: Vec<String>,
}
