//! Gofer — GAF → knowledge-graph association ingest.
//! Entry point for the ingest binary.

use tracing::info;
use tracing_subscriber::EnvFilter;

use gofer_ingest::config::Config;
use gofer_ingest::writer::NdjsonWriter;
use gofer_ingest::{transform_row, EcoMap, GafReader};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gofer_ingest=debug,info")),
        )
        .init();

    info!("Gofer GAF ingest starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = match Config::load() {
        Ok(c) => {
            info!("Configuration loaded. GAF: {}", c.ingest.gaf_path);
            c
        }
        Err(e) => {
            tracing::warn!("Could not load gofer.toml: {e}");
            tracing::warn!("Copy gofer.example.toml to gofer.toml and edit it.");
            return Ok(());
        }
    };

    let eco_map = EcoMap::from_file(&config.ingest.eco_map_path)?;
    let mut writer = NdjsonWriter::create(&config.ingest.output_path)?;

    let mut skipped = 0u64;
    for row in GafReader::open(&config.ingest.gaf_path)? {
        let row = row?;
        match transform_row(&row, &eco_map) {
            Some(association) => writer.write(&association)?,
            None => skipped += 1,
        }
    }

    let written = writer.finish()?;
    info!("Ingest complete: {written} associations emitted, {skipped} rows skipped.");

    Ok(())
}
