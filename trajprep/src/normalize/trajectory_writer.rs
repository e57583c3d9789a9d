use super::{NormalizeError, TrajectoryPoint};
use csv::QuoteStyle;
use std::{fs::File, path::Path};

/// writes one accepted trajectory as `<lat> <lon>` lines. fails if the
/// file already exists.
pub fn write_trajectory(path: &Path, points: &[TrajectoryPoint]) -> Result<(), NormalizeError> {
    let file = File::create_new(path).map_err(|source| NormalizeError::WriteError {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(file);
    for point in points {
        writer
            .write_record(point.fields())
            .map_err(|source| NormalizeError::CsvWriteError {
                path: path.display().to_string(),
                source,
            })?;
    }
    writer.flush().map_err(|source| NormalizeError::WriteError {
        path: path.display().to_string(),
        source,
    })
}
