// src/extractors/mod.rs
pub mod answers;
pub mod key;
pub mod name;

// Re-export key extraction functions for convenience
pub use answers::extract_answers;
pub use key::extract_key;
pub use name::extract_name;
