pub mod catalog;
pub mod config;
pub mod report;
pub mod riasec;
