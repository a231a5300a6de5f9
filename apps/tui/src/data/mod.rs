pub mod build;
pub mod fetch;
pub mod first_sends;
pub mod models;
pub mod stats;

pub use build::build_dataset;
pub use fetch::{export_url, fetch_csv};
pub use first_sends::first_sends;
pub use models::{Tick, TickDataset, COLUMNS};
