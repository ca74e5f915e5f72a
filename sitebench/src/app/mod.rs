mod app_error;
pub mod compare_ops;
mod sitebench_app;
pub mod table_display;

pub use app_error::SitebenchAppError;
pub use sitebench_app::{App, SitebenchApp};
