/// Core association types emitted by the GAF ingest.
/// These are Rust representations of the Biolink association shape the
/// knowledge-graph build consumes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Knowledge level / agent type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeLevel {
    KnowledgeAssertion,
    LogicalEntailment,
    Prediction,
    StatisticalAssociation,
    NotProvided,
}

impl KnowledgeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeLevel::KnowledgeAssertion     => "knowledge_assertion",
            KnowledgeLevel::LogicalEntailment      => "logical_entailment",
            KnowledgeLevel::Prediction             => "prediction",
            KnowledgeLevel::StatisticalAssociation => "statistical_association",
            KnowledgeLevel::NotProvided            => "not_provided",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    ManualAgent,
    AutomatedAgent,
    ComputationalModel,
    TextMiningAgent,
    NotProvided,
}

impl AgentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::ManualAgent        => "manual_agent",
            AgentType::AutomatedAgent     => "automated_agent",
            AgentType::ComputationalModel => "computational_model",
            AgentType::TextMiningAgent    => "text_mining_agent",
            AgentType::NotProvided        => "not_provided",
        }
    }
}

// ---------------------------------------------------------------------------
// Gene → GO term association
// ---------------------------------------------------------------------------

/// One gene/protein → GO term association claim.
/// Built once per accepted GAF row; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoTermAssociation {
    /// Fresh per-record identifier, e.g. "uuid:8c5f..."
    pub id: String,
    /// Biolink association class, e.g.
    /// "biolink:MacromolecularMachineToMolecularActivityAssociation"
    pub category: String,
    /// Gene/protein CURIE, e.g. "UniProtKB:A0A024RBG1"
    pub subject: String,
    /// Biolink predicate, e.g. "biolink:enables"
    pub predicate: String,
    /// GO term CURIE, e.g. "GO:0003723"
    pub object: String,
    /// Biolink category of the GO term node, e.g. "biolink:MolecularActivity"
    pub object_category: String,
    pub negated: bool,
    /// ECO evidence term(s), e.g. ["ECO:0000501"]
    pub has_evidence: Vec<String>,
    /// Publication CURIEs, e.g. ["PMID:18405346"]
    pub publications: Vec<String>,
    /// Primary taxon of the annotated gene, e.g. "NCBITaxon:9606"
    pub species_context_qualifier: Option<String>,
    /// infores tag derived from the GAF Assigned_By column
    pub primary_knowledge_source: String,
    pub aggregator_knowledge_source: Vec<String>,
    pub knowledge_level: KnowledgeLevel,
    pub agent_type: AgentType,
}

impl GoTermAssociation {
    /// Mint the "uuid:"-prefixed record identifier.
    pub fn new_id() -> String {
        format!("uuid:{}", Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_level_serializes_snake_case() {
        let s = serde_json::to_string(&KnowledgeLevel::KnowledgeAssertion).unwrap();
        assert_eq!(s, "\"knowledge_assertion\"");
        assert_eq!(KnowledgeLevel::KnowledgeAssertion.as_str(), "knowledge_assertion");
    }

    #[test]
    fn test_agent_type_serializes_snake_case() {
        let s = serde_json::to_string(&AgentType::ManualAgent).unwrap();
        assert_eq!(s, "\"manual_agent\"");
    }

    #[test]
    fn test_new_id_is_prefixed_and_unique() {
        let a = GoTermAssociation::new_id();
        let b = GoTermAssociation::new_id();
        assert!(a.starts_with("uuid:"));
        assert_ne!(a, b);
    }
}
