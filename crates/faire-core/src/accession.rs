//! Alias → accession lookup built from an archive receipt.

use std::collections::HashMap;

use faire_model::{AliasSuggestion, FaireError, Receipt, ReceiptEntry};
use rapidfuzz::distance::jaro_winkler;
use tracing::debug;

/// Minimum Jaro-Winkler similarity for an alias hint.
pub const SUGGESTION_THRESHOLD: f64 = 0.9;

/// Read-only mapping from submitted sample alias to archive accession.
#[derive(Debug, Clone, Default)]
pub struct AccessionTable {
    /// Receipt entries in receipt order.
    entries: Vec<ReceiptEntry>,
    index: HashMap<String, usize>,
}

impl AccessionTable {
    /// Builds the table in one pass. An unsuccessful receipt is a structural
    /// error; the first accession wins for a repeated alias.
    pub fn from_receipt(receipt: &Receipt) -> Result<Self, FaireError> {
        if !receipt.success {
            return Err(FaireError::ReceiptRejected {
                messages: receipt.errors.clone(),
            });
        }
        let mut table = AccessionTable::default();
        for entry in &receipt.samples {
            table.insert(entry.clone());
        }
        Ok(table)
    }

    pub fn insert(&mut self, entry: ReceiptEntry) {
        if self.index.contains_key(&entry.alias) {
            debug!(alias = %entry.alias, "repeated receipt alias ignored");
            return;
        }
        self.index.insert(entry.alias.clone(), self.entries.len());
        self.entries.push(entry);
    }

    pub fn entry(&self, alias: &str) -> Option<&ReceiptEntry> {
        self.index
            .get(alias)
            .and_then(|&index| self.entries.get(index))
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entry(alias).map(|entry| entry.accession.as_str())
    }

    /// BioSample accession recorded for `alias`, if the receipt carried one.
    pub fn biosample(&self, alias: &str) -> Option<&str> {
        self.entry(alias).and_then(|entry| entry.biosample.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.alias.as_str())
    }

    /// Closest known alias to `name`, when similar enough to be a likely typo.
    pub fn closest(&self, name: &str) -> Option<AliasSuggestion> {
        self.aliases()
            .map(|alias| (alias, jaro_winkler::similarity(name.chars(), alias.chars())))
            .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(alias, similarity)| AliasSuggestion {
                sample_name: name.to_string(),
                closest_alias: alias.to_string(),
                similarity,
            })
    }
}

impl FromIterator<(String, String)> for AccessionTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = AccessionTable::default();
        for (alias, accession) in iter {
            table.insert(ReceiptEntry {
                alias,
                accession,
                biosample: None,
            });
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(alias: &str, accession: &str) -> ReceiptEntry {
        ReceiptEntry {
            alias: alias.to_string(),
            accession: accession.to_string(),
            biosample: None,
        }
    }

    #[test]
    fn builds_from_successful_receipt() {
        let receipt = Receipt {
            success: true,
            samples: vec![entry("A", "ERS1"), entry("B", "ERS2"), entry("A", "ERS9")],
            errors: Vec::new(),
        };
        let table = AccessionTable::from_receipt(&receipt).expect("table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("A"), Some("ERS1"));
        assert_eq!(table.get("B"), Some("ERS2"));
        assert_eq!(table.get("C"), None);
        assert_eq!(table.aliases().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn keeps_biosample_accession() {
        let mut with_biosample = entry("A", "ERS1");
        with_biosample.biosample = Some("SAMEA1".to_string());
        let receipt = Receipt {
            success: true,
            samples: vec![with_biosample, entry("B", "ERS2")],
            errors: Vec::new(),
        };
        let table = AccessionTable::from_receipt(&receipt).expect("table");
        assert_eq!(table.biosample("A"), Some("SAMEA1"));
        assert_eq!(table.biosample("B"), None);
        assert_eq!(table.entry("B").map(|entry| entry.accession.as_str()), Some("ERS2"));
    }

    #[test]
    fn rejected_receipt_is_structural() {
        let receipt = Receipt {
            success: false,
            samples: Vec::new(),
            errors: vec!["alias already exists".to_string()],
        };
        let err = AccessionTable::from_receipt(&receipt).unwrap_err();
        assert!(err.to_string().contains("alias already exists"));
    }

    #[test]
    fn suggests_near_miss_aliases() {
        let table: AccessionTable = [
            ("RS19_S01_filter1".to_string(), "ERS1".to_string()),
            ("RS19_S02_filter1".to_string(), "ERS2".to_string()),
        ]
        .into_iter()
        .collect();
        let suggestion = table.closest("RS19_S01_filter_1").expect("suggestion");
        assert_eq!(suggestion.closest_alias, "RS19_S01_filter1");
        assert!(suggestion.similarity >= SUGGESTION_THRESHOLD);
        assert!(table.closest("blank").is_none());
    }
}
