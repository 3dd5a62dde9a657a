pub mod attribute;
pub mod config;
pub mod evidence;
pub mod report;
pub mod scoring;
