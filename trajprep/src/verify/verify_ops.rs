use super::VerifyReport;
use crate::config::{BoundingBox, SourceFormat};
use crate::manifest::{self, MANIFEST_FILENAME};
use crate::normalize::{NormalizeError, TrajectoryReader, TrajectoryScan};
use std::{collections::HashSet, path::Path};

/// checks a normalized output directory: dense numbering, a manifest that
/// agrees with the files on disk, and every point inside `bounding_box`.
pub fn verify_output(
    directory: &Path,
    bounding_box: &BoundingBox,
) -> Result<VerifyReport, NormalizeError> {
    let format = SourceFormat::normalized();
    let reader = TrajectoryReader::new(&format, bounding_box)?;
    let output_files = manifest::list_numbered_files(directory, "", format.extension())?;

    let contiguous = output_files.iter().enumerate().all(|(idx, name)| {
        manifest::numbered_index(name, "", format.extension()) == Some(idx as u64)
    });

    let listed = manifest::read_manifest(&directory.join(MANIFEST_FILENAME))?;
    let listed_set: HashSet<&String> = listed.iter().collect();
    let written_set: HashSet<&String> = output_files.iter().collect();
    let manifest_matches = listed.len() == listed_set.len() && listed_set == written_set;
    let manifest_sorted = manifest::sort_numerically(&listed) == listed;

    let mut invalid_files = vec![];
    for name in output_files.iter() {
        let path = directory.join(name);
        match reader.read(&path) {
            Ok(TrajectoryScan::Valid(_)) => {}
            Ok(TrajectoryScan::OutOfBounds { point, .. }) => {
                log::warn!("{name}: point {point} is outside the bounding box");
                invalid_files.push(name.clone());
            }
            Err(source) if source.is_fatal() => {
                return Err(NormalizeError::TrajectoryReadError {
                    path: path.display().to_string(),
                    source,
                });
            }
            Err(e) => {
                log::warn!("{name}: {e}");
                invalid_files.push(name.clone());
            }
        }
    }

    Ok(VerifyReport {
        output_files,
        contiguous,
        manifest_matches,
        manifest_sorted,
        invalid_files,
    })
}
