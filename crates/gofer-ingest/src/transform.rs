//! The GAF row → association transform.
//!
//! `transform_row` is a pure function of (row, evidence map, static
//! tables): it emits exactly one [`GoTermAssociation`] for an accepted
//! row and `None` for a skipped one. Nothing here aborts a batch — every
//! failure mode is a data-driven skip or degrade decision.

use gofer_common::{AgentType, GoTermAssociation, KnowledgeLevel};

use crate::eco::EcoMap;
use crate::gaf::GafRow;
use crate::identifiers::parse_identifiers;
use crate::predicate::{gate_aspect, resolve_predicate, Aspect};

/// The aggregator provenance tag stamped on every emitted association.
pub const AGGREGATOR_KNOWLEDGE_SOURCE: &str = "infores:monarchinitiative";

/// Biolink node category and association class for each GO aspect.
/// https://biolink.github.io/biolink-model/associations.html
pub fn aspect_classes(aspect: Aspect) -> (&'static str, &'static str) {
    match aspect {
        Aspect::MolecularFunction => (
            "biolink:MolecularActivity",
            "biolink:MacromolecularMachineToMolecularActivityAssociation",
        ),
        Aspect::BiologicalProcess => (
            "biolink:BiologicalProcess",
            "biolink:MacromolecularMachineToBiologicalProcessAssociation",
        ),
        Aspect::CellularComponent => (
            "biolink:CellularComponent",
            "biolink:MacromolecularMachineToCellularComponentAssociation",
        ),
    }
}

/// Derive the primary knowledge-source tag from the free-text Assigned_By
/// column, e.g. "UniProt" → "infores:uniprot", "WB_Vanaukes" →
/// "infores:wb-vanaukes".
pub fn primary_knowledge_source(assigned_by: &str) -> String {
    format!(
        "infores:{}",
        assigned_by.trim().to_lowercase().replace('_', "-")
    )
}

/// Format the pipe-delimited DB_Reference column into publication CURIEs.
///
/// Each entry keeps only its last two colon-delimited segments, which
/// collapses doubled prefixes (MGI:MGI:1234 → MGI:1234) and leaves clean
/// two-segment references (PMID:123) untouched.
pub fn format_publications(db_reference: &str) -> Vec<String> {
    if db_reference.is_empty() {
        return Vec::new();
    }
    db_reference
        .split('|')
        .map(|p| {
            let segments: Vec<&str> = p.split(':').collect();
            let tail = segments.len().saturating_sub(2);
            segments[tail..].join(":")
        })
        .collect()
}

/// Transform one GAF row into zero or one association.
///
/// Skip conditions (row rejected, `None` returned): unrecognized aspect,
/// unresolvable predicate. Degraded-but-accepted conditions: missing or
/// unknown evidence code (tagged ND), missing taxon, missing qualifier
/// (aspect default predicate).
pub fn transform_row(row: &GafRow, eco_map: &EcoMap) -> Option<GoTermAssociation> {
    // Aspect gate comes first; an unrecognized aspect skips everything else
    let aspect = gate_aspect(&row.aspect)?;

    let resolved = parse_identifiers(row);
    let eco_term = eco_map.resolve(&row.evidence_code);

    let predicate = resolve_predicate(&row.qualifier, &row.go_id, &eco_term, aspect)?;

    let (node_category, association_category) = aspect_classes(aspect);
    let species_context_qualifier = resolved.primary_taxon().map(String::from);

    Some(GoTermAssociation {
        id: GoTermAssociation::new_id(),
        category: association_category.to_string(),
        subject: resolved.gene_id,
        predicate: predicate.predicate,
        object: row.go_id.clone(),
        object_category: node_category.to_string(),
        negated: predicate.negated,
        has_evidence: vec![eco_term],
        publications: format_publications(&row.db_reference),
        species_context_qualifier,
        primary_knowledge_source: primary_knowledge_source(&row.assigned_by),
        aggregator_knowledge_source: vec![AGGREGATOR_KNOWLEDGE_SOURCE.to_string()],
        knowledge_level: KnowledgeLevel::KnowledgeAssertion,
        agent_type: AgentType::ManualAgent,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
