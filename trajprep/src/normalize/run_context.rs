use serde::Serialize;
use std::fmt::Display;

/// run-scoped state threaded through a normalization run. output numbering
/// follows the order trajectories are accepted.
#[derive(Debug, Default)]
pub struct RunContext {
    output_files: Vec<String>,
    rejected: usize,
    malformed: usize,
}

impl RunContext {
    /// filename the next accepted trajectory is written to
    pub fn next_output_filename(&self) -> String {
        format!("{}.txt", self.output_files.len())
    }

    pub fn accept(&mut self, filename: String) {
        self.output_files.push(filename);
    }

    pub fn reject(&mut self) {
        self.rejected += 1;
    }

    pub fn skip_malformed(&mut self) {
        self.malformed += 1;
    }

    pub fn output_files(&self) -> &[String] {
        &self.output_files
    }

    pub fn finish(self) -> RunSummary {
        RunSummary {
            accepted: self.output_files.len(),
            rejected: self.rejected,
            malformed: self.malformed,
            output_files: self.output_files,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub accepted: usize,
    /// trajectories with at least one point outside the bounding box
    pub rejected: usize,
    /// trajectories skipped because they could not be parsed
    pub malformed: usize,
    pub output_files: Vec<String>,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Accepted {} trajectories. Deleted {} trajectories. Skipped {} malformed trajectories.",
            self.accepted, self.rejected, self.malformed
        )
    }
}
