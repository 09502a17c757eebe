pub mod calculations;
pub mod checklist;
pub mod glossary;
pub mod models;
pub mod summary;

pub use calculations::{compute_affordability, compute_deposit_gap, compute_lvr, lmi_likely};
pub use models::*;
