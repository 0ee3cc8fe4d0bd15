//! Query services over the observation tables.

pub mod national;
pub mod observation;
pub mod spatial;
pub mod temporal;
