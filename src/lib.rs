pub mod config;
pub mod console_interface;
pub mod core;
pub mod high_score;
pub mod logging;
pub mod models;
pub mod swipe;

#[cfg(test)]
mod test;
