//! Gene identifier and taxon resolution for GAF rows.
//!
//! Builds the subject CURIE from the DB / DB_Object_ID columns and
//! normalises the Taxon column into canonical `NCBITaxon:` identifiers.
//! One organism (Aspergillus nidulans FGSC A4, NCBITaxon:227321) gets its
//! identifier pulled out of the DB_Object_Synonym column instead, because
//! its primary identifier columns are not consistent across annotations.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::gaf::GafRow;

/// Taxa whose primary identifier columns cannot be trusted, mapped to the
/// replacement CURIE prefix and the pattern that extracts the real local id
/// from the synonym column.
fn gene_identifier_remap(taxon: &str) -> Option<(&'static str, &'static Regex)> {
    match taxon {
        "NCBITaxon:227321" => Some(("AspGD", aspgd_synonym_regex())),
        _ => None,
    }
}

fn aspgd_synonym_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // First synonym of the form AN1234| carries the AspGD locus id
    RE.get_or_init(|| Regex::new(r"^(?P<identifier>AN\d+)\|").expect("valid regex"))
}

/// Resolved subject side of an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentifiers {
    /// Subject CURIE, e.g. "UniProtKB:A0A024RBG1"
    pub gene_id: String,
    /// All taxa listed on the row, in source order, normalised to
    /// `NCBITaxon:` CURIEs. The first entry is the annotation's taxon.
    pub ncbi_taxa: Vec<String>,
}

impl ResolvedIdentifiers {
    /// The taxon attached to the association: first listed, if any.
    pub fn primary_taxon(&self) -> Option<&str> {
        self.ncbi_taxa.first().map(String::as_str)
    }
}

/// Normalise the GAF Taxon column into `NCBITaxon:` CURIEs.
///
/// The column may hold a piped list (e.g. multi-organism interactions);
/// each entry keeps only its final numeric segment. Source order is
/// preserved — the first listed taxon is the one the annotation is about.
pub fn parse_ncbi_taxa(taxon: &str) -> Vec<String> {
    if taxon.is_empty() {
        return Vec::new();
    }
    taxon
        .split('|')
        .map(|t| format!("NCBITaxon:{}", t.rsplit(':').next().unwrap_or(t)))
        .collect()
}

/// Resolve the gene identifier and taxon list from a GAF row.
pub fn parse_identifiers(row: &GafRow) -> ResolvedIdentifiers {
    let mut db = row.db.as_str();
    let mut db_object_id = row.db_object_id.clone();

    // Clean up ids like MGI:MGI:123 — keep only the final segment
    if db_object_id.contains(':') {
        if let Some(last) = db_object_id.rsplit(':').next() {
            db_object_id = last.to_string();
        }
    }

    let ncbi_taxa = parse_ncbi_taxa(&row.taxon);
    if ncbi_taxa.is_empty() {
        // Unlikely to happen, but...
        warn!("Missing taxa for '{db}:{db_object_id}'?");
    }

    if let Some(primary) = ncbi_taxa.first() {
        if let Some((replacement_db, id_regex)) = gene_identifier_remap(primary) {
            // Pull the locus id out of the synonym column; on a pattern
            // miss the untransformed identifier stands.
            if let Some(caps) = id_regex.captures(&row.db_object_synonym) {
                db = replacement_db;
                db_object_id = caps["identifier"].to_string();
            }
        }
    }

    ResolvedIdentifiers {
        gene_id: format!("{db}:{db_object_id}"),
        ncbi_taxa,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
