//! gofer-ingest — Gene Ontology Annotation (GAF) ingest.
//!
//! Converts GAF 2.2 rows into gene/protein → GO term associations for the
//! knowledge-graph build. The heart of the crate is
//! [`transform::transform_row`]: a pure, per-row decision procedure that
//! either emits exactly one [`gofer_common::GoTermAssociation`] or skips the
//! row. Everything around it (reader, evidence map, writer, config) is thin
//! plumbing.

pub mod config;
pub mod eco;
pub mod gaf;
pub mod identifiers;
pub mod predicate;
pub mod transform;
pub mod writer;

pub use eco::EcoMap;
pub use gaf::{GafReader, GafRow};
pub use transform::transform_row;
