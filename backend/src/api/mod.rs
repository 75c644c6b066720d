pub mod analytics;
pub mod course;

pub use analytics::*;
pub use course::*;
