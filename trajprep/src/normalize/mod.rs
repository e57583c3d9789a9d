mod normalize_error;
mod normalize_ops;
mod run_context;
mod trajectory_reader;
mod trajectory_writer;

pub use normalize_error::NormalizeError;
pub use normalize_ops::{discover_trajectory_files, prepare_output_directory, run};
pub use run_context::{RunContext, RunSummary};
pub use trajectory_reader::{TrajectoryParseError, TrajectoryPoint, TrajectoryReader, TrajectoryScan};
pub use trajectory_writer::write_trajectory;
