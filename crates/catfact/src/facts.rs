pub mod base;
pub mod catfact;
pub mod configs;

pub use base::{get_fact, FactSource};

#[cfg(test)]
pub mod mock;
