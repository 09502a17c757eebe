//! Pre-qualification calculators.
//!
//! Every calculator here is a pure function of its arguments: no shared
//! state, no I/O, identical inputs always give identical outputs.

pub mod affordability;
pub mod common;
pub mod deposit_gap;
pub mod lvr;

pub use affordability::{annuity_factor, compute_affordability};
pub use deposit_gap::compute_deposit_gap;
pub use lvr::{compute_lvr, lmi_likely};
