//! NDJSON association writer.
//!
//! One JSON object per line; how output is stored beyond that is the
//! downstream build's concern.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use gofer_common::{GoTermAssociation, Result};

pub struct NdjsonWriter<W: Write> {
    out: BufWriter<W>,
    written: u64,
}

impl NdjsonWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(File::create(path.as_ref())?))
    }
}

impl<W: Write> NdjsonWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { out: BufWriter::new(inner), written: 0 }
    }

    pub fn write(&mut self, association: &GoTermAssociation) -> Result<()> {
        serde_json::to_writer(&mut self.out, association)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Records written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn finish(mut self) -> Result<u64> {
        self.out.flush()?;
        Ok(self.written)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gofer_common::{AgentType, KnowledgeLevel};

    fn association() -> GoTermAssociation {
        GoTermAssociation {
            id: GoTermAssociation::new_id(),
            category: "biolink:MacromolecularMachineToMolecularActivityAssociation".into(),
            subject: "UniProtKB:A0A024RBG1".into(),
            predicate: "biolink:enables".into(),
            object: "GO:0003723".into(),
            object_category: "biolink:MolecularActivity".into(),
            negated: false,
            has_evidence: vec!["ECO:0000501".into()],
            publications: vec!["GO_REF:0000043".into()],
            species_context_qualifier: Some("NCBITaxon:9606".into()),
            primary_knowledge_source: "infores:uniprot".into(),
            aggregator_knowledge_source: vec!["infores:monarchinitiative".into()],
            knowledge_level: KnowledgeLevel::KnowledgeAssertion,
            agent_type: AgentType::ManualAgent,
        }
    }

    #[test]
    fn test_one_line_per_association() {
        let mut buf = Vec::new();
        {
            let mut w = NdjsonWriter::new(&mut buf);
            w.write(&association()).unwrap();
            w.write(&association()).unwrap();
            assert_eq!(w.finish().unwrap(), 2);
        }
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["predicate"], "biolink:enables");
            assert_eq!(v["knowledge_level"], "knowledge_assertion");
            assert_eq!(v["agent_type"], "manual_agent");
        }
    }
}
