pub mod orrery;
pub mod types;
