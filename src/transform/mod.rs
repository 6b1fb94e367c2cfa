//! Pure single-term transforms.
//!
//! Every function here is total: empty input gives empty output and
//! characters without a mapping pass through unchanged.

mod case;
mod substitute;

pub use case::{alternating_case, case_variants, reverse};
pub use substitute::{SubstitutionMode, letter_substitutions, number_substitutions};
