pub mod fan;
pub mod responsive;
