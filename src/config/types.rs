//! Configuration constants and serde default value functions.

use crate::concept::PhotographyStyle;

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "promode.yaml";

/// Category used when neither the caller nor the concept names one.
pub const DEFAULT_CATEGORY: &str = "LIFESTYLE";

// Default value functions for serde
pub(crate) fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}
pub(crate) fn default_style() -> PhotographyStyle {
    PhotographyStyle::Authentic
}
pub(crate) fn default_editorial_batch_size() -> usize {
    3
}
pub(crate) fn default_similarity_threshold() -> f64 {
    0.8
}
pub(crate) fn default_log_level() -> String {
    "warn".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
