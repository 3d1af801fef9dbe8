//! Background tasks

pub mod reaper;

pub use reaper::spawn_reaper_task;
