//! Database models and DTOs for the dengue observation tables.

pub mod aggregates;
pub mod observation;
