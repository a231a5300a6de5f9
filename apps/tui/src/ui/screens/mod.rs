pub mod charts;
pub mod first_sends;
pub mod main;
pub mod ticks;
