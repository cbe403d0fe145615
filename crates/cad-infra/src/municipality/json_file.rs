use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cad_core::ports::{MunicipalitySourceError, MunicipalitySourcePort};
use cad_core::MunicipalityOption;
use tracing::debug;

/// Reads municipalities from a JSON array of `{"label": .., "value": ..}`.
#[derive(Debug, Clone)]
pub struct JsonFileMunicipalitySource {
    path: PathBuf,
}

impl JsonFileMunicipalitySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MunicipalitySourcePort for JsonFileMunicipalitySource {
    async fn load(&self) -> Result<Vec<MunicipalityOption>, MunicipalitySourceError> {
        debug!(path = %self.path.display(), "Loading municipalities from file");

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            MunicipalitySourceError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            MunicipalitySourceError::Malformed(format!("{}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn loads_options_in_file_order() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"label": "Sinop", "value": "sinop"},
                {"label": "Sorriso", "value": "sorriso"}
            ]"#,
        )
        .unwrap();

        let options = JsonFileMunicipalitySource::new(file.path())
            .load()
            .await
            .unwrap();

        assert_eq!(
            options,
            vec![
                MunicipalityOption::new("Sinop", "sinop"),
                MunicipalityOption::new("Sorriso", "sorriso"),
            ]
        );
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileMunicipalitySource::new(dir.path().join("municipios.json"));

        let err = source.load().await.unwrap_err();

        assert!(matches!(err, MunicipalitySourceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn wrong_shape_is_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(r#"["Cuiabá", "Sinop"]"#.as_bytes()).unwrap();

        let err = JsonFileMunicipalitySource::new(file.path())
            .load()
            .await
            .unwrap_err();

        assert!(matches!(err, MunicipalitySourceError::Malformed(_)));
    }
}
