pub mod config;
pub mod show;
pub mod swipe;
pub mod weeks;
