// App module for ticklog-tui
// Handles application state and the refresh pipeline

pub mod actions;
pub mod input;
pub mod state;

pub use actions::AppActions;
pub use input::handle_input;
pub use state::{App, AppScreen, EditTarget};
