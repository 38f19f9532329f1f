pub mod format;
pub mod identifiers;
