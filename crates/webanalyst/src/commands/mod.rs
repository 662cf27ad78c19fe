pub mod analyze;
pub mod version;
