pub mod convert;
pub mod simulate;
