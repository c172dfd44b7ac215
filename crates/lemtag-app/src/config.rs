use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File locations for one annotation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenCorpora morphology dictionary (XML)
    pub dictionary_path: PathBuf,
    /// Dataset to annotate, one sentence per line
    pub dataset_path: PathBuf,
    /// Annotated output; parent directories are created on demand
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: ["resources", "opencorpora", "dict.opcorpora.xml"]
                .iter()
                .collect(),
            dataset_path: ["resources", "dataset", "dataset_37845_1.txt"]
                .iter()
                .collect(),
            output_path: ["resources", "output", "output.txt"].iter().collect(),
        }
    }
}
