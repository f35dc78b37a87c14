//! Ready-made survey definitions for tests, examples, and demos.

pub mod clinic_intake;
pub mod forest_expedition;

// Re-export clinic_intake builders
pub use clinic_intake::clinic_intake;

// Re-export forest_expedition builders
pub use forest_expedition::forest_expedition;
