pub mod fleet_reader;
mod fleet_read_error;
mod report_format;
mod report_write_error;
pub mod report_writer;

pub use fleet_read_error::FleetReadError;
pub use report_format::ReportFormat;
pub use report_write_error::ReportWriteError;
