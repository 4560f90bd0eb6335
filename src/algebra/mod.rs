pub mod coefficient;
pub mod field;
