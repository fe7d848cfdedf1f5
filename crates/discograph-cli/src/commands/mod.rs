pub mod catalog;
pub mod config;
pub mod links;

pub use catalog::run_catalog;
pub use links::run_links;
