//! Use case for loading the municipality catalog
//! 加载市镇目录的用例

use std::sync::Arc;

use anyhow::{Context, Result};
use cad_core::ports::MunicipalitySourcePort;
use cad_core::MunicipalityCatalog;
use tracing::{info, info_span, warn, Instrument};

/// Builds the catalog the validation engine checks municipality fields
/// against.
///
/// ## Behavior
/// - Options keep the source order
/// - Duplicate values are dropped, the first occurrence wins
pub struct LoadMunicipalityCatalog {
    source: Arc<dyn MunicipalitySourcePort>,
}

impl LoadMunicipalityCatalog {
    pub fn new(source: Arc<dyn MunicipalitySourcePort>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<MunicipalityCatalog> {
        let span = info_span!("usecase.load_municipality_catalog.execute");

        async {
            let options = self
                .source
                .load()
                .await
                .context("failed to load municipality options")?;

            let (catalog, duplicates) = MunicipalityCatalog::from_options(options);
            if !duplicates.is_empty() {
                warn!(?duplicates, "Dropped duplicate municipality values");
            }

            info!(count = catalog.len(), "Municipality catalog loaded");
            Ok(catalog)
        }
        .instrument(span)
        .await
    }
}
