mod operation;
mod trajprep_app;
mod trajprep_cli_error;

pub use operation::TrajprepOperation;
pub use trajprep_app::TrajprepApp;
pub use trajprep_cli_error::TrajprepCliError;
