// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod event;
pub mod grades;
pub mod terminal;
pub mod ui;

pub use data::{Tick, TickDataset};
pub use error::{DataError, GradeError};
pub use grades::{parse_grade, ParsedGrade};
