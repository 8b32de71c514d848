pub mod errors;
pub mod facts;
pub mod profile;
