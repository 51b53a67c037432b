pub mod config;
pub mod day;
pub mod list;
pub mod month;
pub mod options;
pub mod search;
pub mod show;
pub mod validate;
