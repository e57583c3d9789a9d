mod verify_ops;
mod verify_report;

pub use verify_ops::verify_output;
pub use verify_report::VerifyReport;
