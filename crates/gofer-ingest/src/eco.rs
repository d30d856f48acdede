//! GAF evidence-code → ECO term lookup table.
//!
//! Built from the GO consortium's `gaf-eco-mapping.txt` reference file and
//! held in memory for the lifetime of the run. Two key shapes exist:
//! a bare code (`"IRD"` → `ECO:0000321`) acting as the default for that
//! code, and a compound `code-qualifier` key
//! (`"IEA-GO_REF:0000023"` → `ECO:0000501`) that applies only when the
//! annotation carries that specific reference.
//!
//! Usage:
//! ```ignore
//! let eco = EcoMap::from_file("data/gaf-eco-mapping.txt")?;
//! assert_eq!(eco.resolve("IEA"), "ECO:0000501");
//! ```

use std::collections::HashMap;
use std::path::Path;

use gofer_common::{GoferError, Result};
use tracing::warn;

/// The ECO "no biological data found" term, used whenever a row carries no
/// usable evidence code.
/// https://www.ebi.ac.uk/QuickGO/term/ECO:0000307
pub const NO_EVIDENCE_TERM: &str = "ECO:0000307";

/// In-memory evidence-code lookup table.
/// Build once at startup; read-only during the transform.
#[derive(Debug, Clone, Default)]
pub struct EcoMap {
    /// Bare code or compound `code-qualifier` key → ECO term.
    entries: HashMap<String, String>,
}

impl EcoMap {
    // ── Constructors ──────────────────────────────────────────────────────────

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_tsv(&text)
    }

    /// Build from the reference file contents.
    /// Tab-separated: code, qualifier-or-"Default" (case-insensitive), ECO
    /// term last. `#`-prefixed lines are comments. A duplicate key keeps the
    /// last value seen.
    pub fn from_tsv(tsv: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for line in tsv.lines() {
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < 3 {
                return Err(GoferError::EvidenceMap(format!(
                    "expected 3 columns, got {}: {line:?}",
                    cols.len()
                )));
            }
            let code = cols[0];
            let qualifier = cols[1];
            let eco_term = cols.last().copied().unwrap_or_default();

            let key = if qualifier.eq_ignore_ascii_case("default") {
                code.to_string()
            } else {
                format!("{code}-{qualifier}")
            };
            entries.insert(key, eco_term.to_string());
        }

        tracing::info!("ECO evidence map built: {} entries", entries.len());
        Ok(Self { entries })
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    /// Exact-key lookup, no fallback.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolve a raw GAF evidence code to a single canonical ECO term.
    ///
    /// An empty or unrecognized code degrades to [`NO_EVIDENCE_TERM`] with a
    /// warning; a lookup miss is never fatal.
    pub fn resolve(&self, evidence_code: &str) -> String {
        if evidence_code.is_empty() {
            warn!("GAF evidence code is empty, tagging as 'ND'");
            return NO_EVIDENCE_TERM.to_string();
        }
        match self.entries.get(evidence_code) {
            Some(term) => term.clone(),
            None => {
                warn!("GAF evidence code {evidence_code} is unrecognized, tagging as 'ND'");
                NO_EVIDENCE_TERM.to_string()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
