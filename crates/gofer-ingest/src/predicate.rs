//! GO aspect gate and association predicate resolution.
//!
//! The GAF Qualifier column carries a controlled relation vocabulary,
//! optionally negated as `NOT|<term>`. Each term maps 1:1 onto a
//! `biolink:` predicate except `involved_in`, which maps to
//! `biolink:actively_involved_in`. Root-term annotations carrying the ND
//! evidence term override whatever qualifier the row has.

use tracing::{error, warn};

use crate::eco::NO_EVIDENCE_TERM;

/// The GAF Aspect column: which branch of GO the annotated term sits in.
/// https://geneontology.org/docs/go-annotation-file-gaf-format-2.2/#aspect-column-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    /// 'F' — molecular_function, child of GO:0003674
    MolecularFunction,
    /// 'P' — biological_process, child of GO:0008150
    BiologicalProcess,
    /// 'C' — cellular_component, child of GO:0005575
    CellularComponent,
}

impl Aspect {
    /// Parse the one-letter aspect code, case-insensitively.
    /// Anything outside F/P/C (including empty) is unrecognized and the
    /// row must be rejected.
    pub fn parse(code: &str) -> Option<Aspect> {
        match code.to_uppercase().as_str() {
            "F" => Some(Aspect::MolecularFunction),
            "P" => Some(Aspect::BiologicalProcess),
            "C" => Some(Aspect::CellularComponent),
            _ => None,
        }
    }

    /// Fallback predicate assigned when a row's Qualifier column is empty.
    /// Emitted as the bare relation term, not pushed through the biolink
    /// vocabulary — the degraded path keeps the term as-is.
    pub fn default_predicate(&self) -> &'static str {
        match self {
            Aspect::MolecularFunction => "enables",
            Aspect::BiologicalProcess => "involved_in",
            Aspect::CellularComponent => "located_in",
        }
    }
}

/// The GAF relation vocabulary. Every term maps mechanically to
/// `biolink:{term}` except `involved_in`.
const PREDICATE_TERMS: &[&str] = &[
    "enables",
    "involved_in",
    "located_in",
    "contributes_to",
    "acts_upstream_of",
    "part_of",
    "is_active_in",
    "colocalizes_with",
    "acts_upstream_of_or_within",
    "acts_upstream_of_positive_effect",
    "acts_upstream_of_negative_effect",
    "acts_upstream_of_or_within_positive_effect",
    "acts_upstream_of_or_within_negative_effect",
];

/// Map a relation term to its biolink predicate.
/// `involved_in` is the one exception to the 1:1 rule.
pub fn biolink_predicate(term: &str) -> Option<String> {
    if term == "involved_in" {
        return Some("biolink:actively_involved_in".to_string());
    }
    PREDICATE_TERMS
        .iter()
        .find(|t| **t == term)
        .map(|t| format!("biolink:{t}"))
}

/// Root-term annotations using the ND evidence code get a fixed qualifier
/// regardless of what the row says:
///     molecular_function (GO:0003674) enables     (RO:0002327)
///     biological_process (GO:0008150) involved_in (RO:0002331)
///     cellular_component (GO:0005575) is_active_in (RO:0002432)
/// https://geneontology.org/docs/go-annotation-file-gaf-format-2.2/#qualifier-column-4
const QUALIFIER_OVERRIDES: &[((&str, &str), &str)] = &[
    (("GO:0003674", NO_EVIDENCE_TERM), "enables"),
    (("GO:0008150", NO_EVIDENCE_TERM), "involved_in"),
    (("GO:0005575", NO_EVIDENCE_TERM), "is_active_in"),
];

/// Exact-match lookup of the root-term qualifier override.
pub fn qualifier_override(go_id: &str, eco_term: &str) -> Option<&'static str> {
    QUALIFIER_OVERRIDES
        .iter()
        .find(|((go, eco), _)| *go == go_id && *eco == eco_term)
        .map(|(_, qualifier)| *qualifier)
}

/// A resolved predicate and its negation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPredicate {
    pub predicate: String,
    pub negated: bool,
}

/// Resolve the association predicate from the row's qualifier, the GO term
/// and the resolved evidence term.
///
/// Returns `None` when no predicate can be derived; such a row must be
/// skipped, never defaulted.
pub fn resolve_predicate(
    qualifier: &str,
    go_id: &str,
    eco_term: &str,
    aspect: Aspect,
) -> Option<ResolvedPredicate> {
    // Root-term ND override wins unconditionally
    let qualifier = qualifier_override(go_id, eco_term).unwrap_or(qualifier);

    if qualifier.is_empty() {
        error!("GAF record is missing its qualifier, assigning default as per GO term aspect");
        return Some(ResolvedPredicate {
            predicate: aspect.default_predicate().to_string(),
            negated: false,
        });
    }

    // Check for piped negation prefix (hopefully well behaved)
    let mut parts = qualifier.split('|');
    let first = parts.next().unwrap_or_default();
    let (term, negated) = if first == "NOT" {
        (parts.next().unwrap_or_default(), true)
    } else {
        (first, false)
    };

    match biolink_predicate(term) {
        Some(predicate) => Some(ResolvedPredicate { predicate, negated }),
        None => {
            error!("GAF qualifier {qualifier} is unrecognized, skipping the record");
            None
        }
    }
}

/// Gate the aspect column. Logs and returns `None` for anything outside
/// F/P/C; callers skip the row entirely.
pub fn gate_aspect(code: &str) -> Option<Aspect> {
    match Aspect::parse(code) {
        Some(aspect) => Some(aspect),
        None => {
            warn!("GAF aspect {code:?} is empty or unrecognized, skipping record");
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_parse() {
        assert_eq!(Aspect::parse("F"), Some(Aspect::MolecularFunction));
        assert_eq!(Aspect::parse("p"), Some(Aspect::BiologicalProcess));
        assert_eq!(Aspect::parse("C"), Some(Aspect::CellularComponent));
        assert_eq!(Aspect::parse(""), None);
        assert_eq!(Aspect::parse("X"), None);
    }

    #[test]
    fn test_mechanical_predicate_mapping() {
        assert_eq!(biolink_predicate("enables").as_deref(), Some("biolink:enables"));
        assert_eq!(
            biolink_predicate("acts_upstream_of_or_within").as_deref(),
            Some("biolink:acts_upstream_of_or_within")
        );
    }

    #[test]
    fn test_involved_in_is_the_irregular_mapping() {
        assert_eq!(
            biolink_predicate("involved_in").as_deref(),
            Some("biolink:actively_involved_in")
        );
    }

    #[test]
    fn test_unknown_term_has_no_predicate() {
        assert_eq!(biolink_predicate("regulates"), None);
    }

    #[test]
    fn test_plain_qualifier() {
        let r = resolve_predicate("enables", "GO:0003723", "ECO:0000501", Aspect::MolecularFunction)
            .unwrap();
        assert_eq!(r.predicate, "biolink:enables");
        assert!(!r.negated);
    }

    #[test]
    fn test_negated_qualifier() {
        let r = resolve_predicate(
            "NOT|acts_upstream_of_or_within",
            "GO:0019521",
            "ECO:0000245",
            Aspect::BiologicalProcess,
        )
        .unwrap();
        assert_eq!(r.predicate, "biolink:acts_upstream_of_or_within");
        assert!(r.negated);
    }

    #[test]
    fn test_empty_qualifier_falls_back_to_bare_aspect_default() {
        // The degraded path emits the bare relation term, not the
        // biolink-namespaced form
        let r = resolve_predicate("", "GO:0019521", "ECO:0000245", Aspect::BiologicalProcess)
            .unwrap();
        assert_eq!(r.predicate, "involved_in");
        assert!(!r.negated);

        let r = resolve_predicate("", "GO:0003723", "ECO:0000501", Aspect::MolecularFunction)
            .unwrap();
        assert_eq!(r.predicate, "enables");

        let r = resolve_predicate("", "GO:0005783", "ECO:0000314", Aspect::CellularComponent)
            .unwrap();
        assert_eq!(r.predicate, "located_in");
    }

    #[test]
    fn test_unrecognized_qualifier_rejects_row() {
        assert!(resolve_predicate("regulates", "GO:0003723", "ECO:0000501", Aspect::MolecularFunction).is_none());
    }

    #[test]
    fn test_root_term_nd_override_beats_literal_qualifier() {
        let r = resolve_predicate(
            "acts_upstream_of_negative_effect",
            "GO:0008150",
            NO_EVIDENCE_TERM,
            Aspect::BiologicalProcess,
        )
        .unwrap();
        assert_eq!(r.predicate, "biolink:actively_involved_in");
        assert!(!r.negated);
    }

    #[test]
    fn test_override_requires_exact_pair() {
        // Same root term but real evidence: literal qualifier applies
        let r = resolve_predicate(
            "acts_upstream_of_negative_effect",
            "GO:0008150",
            "ECO:0000501",
            Aspect::BiologicalProcess,
        )
        .unwrap();
        assert_eq!(r.predicate, "biolink:acts_upstream_of_negative_effect");
    }

    #[test]
    fn test_override_all_three_root_terms() {
        for (go_id, expected) in [
            ("GO:0003674", "biolink:enables"),
            ("GO:0008150", "biolink:actively_involved_in"),
            ("GO:0005575", "biolink:is_active_in"),
        ] {
            let aspect = Aspect::parse("P").unwrap();
            let r = resolve_predicate("located_in", go_id, NO_EVIDENCE_TERM, aspect).unwrap();
            assert_eq!(r.predicate, expected);
        }
    }
}
