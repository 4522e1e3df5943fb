//! Brand pools and brand selection.
//!
//! An outfit is built on one or two accessible (mass-market) brands, chosen
//! from a pool that fits the category and theme. When the theme or the
//! user's request signals luxury, a single luxury accent brand is layered on
//! top. Never more than one.
//!
//! Rotation among equally valid candidate sets goes through a
//! [`RandomSource`], so tests can pin the choice.

mod pools;
mod random;
mod selector;


pub use pools::{BrandPool, LUXURY_BRANDS, all_known_brands, pool_for};
pub use random::{FixedPick, OsRandom, RandomSource, SeededRandom};
pub use selector::{BrandSelection, MIXED_BRAND_RULE, has_luxury_signal, select_brands};
