use serde::Serialize;
use std::fmt::Display;

/// findings from checking a normalized output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// numbered output files found, in numeric order
    pub output_files: Vec<String>,
    /// output files are exactly `0.txt..k-1.txt`
    pub contiguous: bool,
    /// manifest lists exactly the output files, each once
    pub manifest_matches: bool,
    pub manifest_sorted: bool,
    /// outputs with a point outside the bounding box or an unparsable line
    pub invalid_files: Vec<String>,
}

impl VerifyReport {
    pub fn is_valid(&self) -> bool {
        self.contiguous
            && self.manifest_matches
            && self.manifest_sorted
            && self.invalid_files.is_empty()
    }
}

impl Display for VerifyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "output files:     {}", self.output_files.len())?;
        writeln!(f, "contiguous:       {}", self.contiguous)?;
        writeln!(f, "manifest matches: {}", self.manifest_matches)?;
        writeln!(f, "manifest sorted:  {}", self.manifest_sorted)?;
        write!(f, "invalid files:    {}", self.invalid_files.len())?;
        for name in &self.invalid_files {
            write!(f, "\n  {name}")?;
        }
        Ok(())
    }
}
