use super::{
    write_trajectory, NormalizeError, RunContext, RunSummary, TrajectoryReader, TrajectoryScan,
};
use crate::config::{MalformedInputPolicy, NormalizerConfiguration};
use crate::manifest::{self, MANIFEST_FILENAME};
use itertools::Itertools;
use kdam::tqdm;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// normalizes every raw trajectory under `input_directory` into numbered
/// `<n>.txt` files in `output_directory` followed by the `dataset.txt` manifest.
///
/// raw files are visited in sorted path order, so numbering is reproducible
/// across runs. a trajectory with any point outside the bounding box is
/// dropped as a whole and counted as rejected.
///
/// # Arguments
///
/// * `input_directory` - root of the raw dataset, searched recursively
/// * `output_directory` - created if missing. must not hold a previous run's
///   output unless the configuration allows overwriting
/// * `conf` - source format, bounding box and policies for this run
pub fn run(
    input_directory: &Path,
    output_directory: &Path,
    conf: &NormalizerConfiguration,
) -> Result<RunSummary, NormalizeError> {
    let reader = TrajectoryReader::new(&conf.source_format, &conf.bounding_box)?;
    let inputs = discover_trajectory_files(input_directory, conf.source_format.extension())?;
    log::info!(
        "found {} '.{}' trajectory files under {}",
        inputs.len(),
        conf.source_format.extension(),
        input_directory.display()
    );
    prepare_output_directory(output_directory, conf.overwrite)?;

    let mut ctx = RunContext::default();
    for path in tqdm!(inputs.iter(), desc = "normalizing trajectories") {
        match reader.read(path) {
            Ok(TrajectoryScan::Valid(points)) => {
                let filename = ctx.next_output_filename();
                write_trajectory(&output_directory.join(&filename), &points)?;
                log::debug!("{} -> {filename}", path.display());
                ctx.accept(filename);
            }
            Ok(TrajectoryScan::OutOfBounds {
                point,
                latitude,
                longitude,
            }) => {
                log::debug!(
                    "dropping {}: point {point} ({latitude}, {longitude}) is outside the bounding box",
                    path.display()
                );
                ctx.reject();
            }
            Err(source) if source.is_fatal() => {
                return Err(NormalizeError::TrajectoryReadError {
                    path: path.display().to_string(),
                    source,
                });
            }
            Err(source) => match conf.malformed_input_policy {
                MalformedInputPolicy::Fail => {
                    return Err(NormalizeError::MalformedTrajectory {
                        path: path.display().to_string(),
                        source,
                    });
                }
                MalformedInputPolicy::Skip => {
                    log::warn!("skipping malformed trajectory {}: {source}", path.display());
                    ctx.skip_malformed();
                }
            },
        }
    }
    eprintln!();

    manifest::write_manifest(output_directory, ctx.output_files())?;
    Ok(ctx.finish())
}

/// recursively collects the files under `root` with the given extension,
/// sorted by their full path bytes.
pub fn discover_trajectory_files(
    root: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, NormalizeError> {
    if !root.is_dir() {
        return Err(NormalizeError::MissingInputDirectory(
            root.display().to_string(),
        ));
    }
    let mut files = vec![];
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).display().to_string();
            NormalizeError::ReadError {
                path,
                source: std::io::Error::from(e),
            }
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            files.push(path.to_path_buf());
        }
    }
    // walkdir can only order siblings, full paths are sorted here
    let sorted = files
        .into_iter()
        .sorted_by(|a, b| a.as_os_str().cmp(b.as_os_str()))
        .collect_vec();
    Ok(sorted)
}

/// makes sure `output_directory` exists and holds no numbered output or
/// manifest. with `overwrite`, those leftovers are removed instead.
pub fn prepare_output_directory(
    output_directory: &Path,
    overwrite: bool,
) -> Result<(), NormalizeError> {
    if !output_directory.exists() {
        return fs::create_dir_all(output_directory).map_err(|source| {
            NormalizeError::WriteError {
                path: output_directory.display().to_string(),
                source,
            }
        });
    }
    if !output_directory.is_dir() {
        return Err(NormalizeError::InvalidOutputDirectory(
            output_directory.display().to_string(),
        ));
    }

    let mut stale = manifest::list_numbered_files(output_directory, "", "txt")?;
    if output_directory.join(MANIFEST_FILENAME).is_file() {
        stale.push(String::from(MANIFEST_FILENAME));
    }
    if stale.is_empty() {
        return Ok(());
    }
    if !overwrite {
        return Err(NormalizeError::OutputNotEmpty(
            output_directory.display().to_string(),
        ));
    }
    log::info!(
        "removing {} files from previous run in {}",
        stale.len(),
        output_directory.display()
    );
    for name in stale {
        let path = output_directory.join(name);
        fs::remove_file(&path).map_err(|source| NormalizeError::WriteError {
            path: path.display().to_string(),
            source,
        })?;
    }
    Ok(())
}
