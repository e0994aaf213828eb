use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::transcript::splice::DEFAULT_SPLICE_REGION_WINDOW;

fn default_splice_region_window() -> i32 {
    DEFAULT_SPLICE_REGION_WINDOW
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnnotationConfig {
    /// Transcript database file (plain text or bgzip).
    pub database: PathBuf,
    #[serde(default = "default_splice_region_window")]
    pub splice_region_window: i32,
    /// Chromosomes to annotate; empty means all.
    #[serde(default)]
    pub chromosomes: Vec<String>,
}

impl AnnotationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Config pointing at `database` with default settings.
    #[must_use]
    pub fn with_database(database: PathBuf) -> Self {
        Self {
            database,
            splice_region_window: DEFAULT_SPLICE_REGION_WINDOW,
            chromosomes: Vec::new(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.as_os_str().is_empty() {
            bail!("database path must not be empty");
        }
        if self.splice_region_window < 2 {
            bail!(
                "invalid spliceRegionWindow: expected at least 2, got {}",
                self.splice_region_window
            );
        }
        Ok(())
    }

    /// Whether variants on `chrom` should be annotated. Accepts either naming
    /// scheme ("7" or "chr7").
    #[must_use]
    pub fn includes_chromosome(&self, chrom: &str) -> bool {
        if self.chromosomes.is_empty() {
            return true;
        }
        let bare = |name: &str| name.strip_prefix("chr").unwrap_or(name).to_string();
        let wanted = bare(chrom);
        self.chromosomes.iter().any(|c| bare(c) == wanted)
    }
}
