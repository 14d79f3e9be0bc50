pub mod builder;
pub mod document;
pub mod stars;
pub mod style;
