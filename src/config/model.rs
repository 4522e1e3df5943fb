//! Config struct definition and default implementation.

use super::types::*;
use crate::concept::PhotographyStyle;
use serde::{Deserialize, Serialize};

/// Configuration for prompt assembly and validation.
///
/// This struct represents the contents of `promode.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Assembly settings
    // =========================================================================
    /// Category used when neither the caller nor the concept supplies one.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Photography style used when no batch index or explicit style applies.
    #[serde(default = "default_style")]
    pub default_style: PhotographyStyle,

    /// Batch items with an index below this value are shot editorial.
    #[serde(default = "default_editorial_batch_size")]
    pub editorial_batch_size: usize,

    /// Whether to append the `Avoid:` section of negative instructions.
    #[serde(default = "default_true")]
    pub include_negative_instructions: bool,

    // =========================================================================
    // Validation settings
    // =========================================================================
    /// Word-overlap ratio above which two sentences count as duplicates.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Log level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            default_style: default_style(),
            editorial_batch_size: default_editorial_batch_size(),
            include_negative_instructions: default_true(),
            similarity_threshold: default_similarity_threshold(),
            log_level: default_log_level(),
        }
    }
}
