pub mod notes;
pub mod scales;
pub mod tunings;
