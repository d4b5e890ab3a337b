//! Card-pool generation from a seed and a candidate pool.

mod generator;

pub use generator::CardPoolGenerator;
