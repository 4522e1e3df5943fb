//! Category defaults registry.
//!
//! A static, read-only table mapping a content category (`WELLNESS`,
//! `LUXURY`, `SEASONAL_CHRISTMAS`, ...) to its mood, aesthetic, environment,
//! camera and negative-instruction defaults. Unknown categories resolve to a
//! generic bundle instead of failing.

mod registry;
mod types;

#[cfg(test)]
mod tests;

pub use registry::{
    GENERAL_DEFAULTS, UNIVERSAL_NEGATIVE_INSTRUCTIONS, category_defaults, known_categories,
    normalize_category_key,
};
pub use types::CategoryDefaults;
