//! Seed color selection

mod scorer;

pub use scorer::{Scorer, DEFAULT_SEED};
