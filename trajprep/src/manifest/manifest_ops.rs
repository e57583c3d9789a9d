//! the manifest (`dataset.txt`) enumerates the trajectory files of a
//! benchmark dataset, one filename per line in numeric order.
use crate::normalize::NormalizeError;
use itertools::Itertools;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const MANIFEST_FILENAME: &str = "dataset.txt";

/// value of the first run of ASCII digits in a filename
fn numeric_key(name: &str) -> Option<u64> {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// sorts filenames by their embedded number, so `10.txt` follows `2.txt`.
/// names without a number sort last, lexicographically.
pub fn sort_numerically<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.as_ref().to_string())
        .sorted_by_cached_key(|n| {
            let key = numeric_key(n);
            (key.is_none(), key, n.clone())
        })
        .collect_vec()
}

/// the index of a filename shaped like `<prefix><digits>.<extension>`
pub fn numbered_index(name: &str, prefix: &str, extension: &str) -> Option<u64> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let digits = name.strip_prefix(prefix)?.strip_suffix(suffix.as_str())?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// lists the files of a directory named `<prefix><digits>.<extension>`, in
/// numeric order. the manifest itself is never listed.
pub fn list_numbered_files(
    directory: &Path,
    prefix: &str,
    extension: &str,
) -> Result<Vec<String>, NormalizeError> {
    let read_error = |source| NormalizeError::ReadError {
        path: directory.display().to_string(),
        source,
    };
    let mut names = vec![];
    for entry in fs::read_dir(directory).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if !entry.file_type().map_err(read_error)?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };
        if name != MANIFEST_FILENAME && numbered_index(&name, prefix, extension).is_some() {
            names.push(name);
        }
    }
    Ok(sort_numerically(&names))
}

/// writes `dataset.txt` into the directory, replacing any existing manifest.
pub fn write_manifest<S: AsRef<str>>(
    directory: &Path,
    filenames: &[S],
) -> Result<PathBuf, NormalizeError> {
    let path = directory.join(MANIFEST_FILENAME);
    let write_error = |source| NormalizeError::WriteError {
        path: path.display().to_string(),
        source,
    };
    let file = File::create(&path).map_err(write_error)?;
    let mut out = BufWriter::new(file);
    for filename in sort_numerically(filenames) {
        writeln!(out, "{filename}").map_err(write_error)?;
    }
    out.flush().map_err(write_error)?;
    log::info!("wrote {} entries to {}", filenames.len(), path.display());
    Ok(path)
}

/// regenerates the manifest from the numbered files already in a directory
pub fn rebuild_manifest(
    directory: &Path,
    prefix: &str,
    extension: &str,
) -> Result<Vec<String>, NormalizeError> {
    let names = list_numbered_files(directory, prefix, extension)?;
    write_manifest(directory, &names)?;
    Ok(names)
}

pub fn read_manifest(path: &Path) -> Result<Vec<String>, NormalizeError> {
    let contents = fs::read_to_string(path).map_err(|source| NormalizeError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    let names = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect_vec();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sort_numerically() {
        let names = ["10.txt", "2.txt", "0.txt", "1.txt", "readme.txt"];
        assert_eq!(
            sort_numerically(&names),
            vec!["0.txt", "1.txt", "2.txt", "10.txt", "readme.txt"]
        );
        let prefixed = ["file100", "file9", "file10"];
        assert_eq!(
            sort_numerically(&prefixed),
            vec!["file9", "file10", "file100"]
        );
    }

    #[test]
    fn test_numbered_index() {
        assert_eq!(numbered_index("12.txt", "", "txt"), Some(12));
        assert_eq!(numbered_index("file3.txt", "file", ".txt"), Some(3));
        assert_eq!(numbered_index("file3.txt", "", "txt"), None);
        assert_eq!(numbered_index(".txt", "", "txt"), None);
        assert_eq!(numbered_index("1a.txt", "", "txt"), None);
        assert_eq!(numbered_index("1.plt", "", "txt"), None);
    }

    #[test]
    fn test_rebuild_manifest() {
        let dir = TempDir::new().expect("failed to create temp dir");
        for name in ["file10.txt", "file2.txt", "file1.txt", "notes.txt", "2.txt"] {
            fs::write(dir.path().join(name), "").expect("failed writing test file");
        }
        fs::write(dir.path().join(MANIFEST_FILENAME), "stale\n").expect("failed writing manifest");

        let names = rebuild_manifest(dir.path(), "file", "txt").expect("rebuild should succeed");
        assert_eq!(names, vec!["file1.txt", "file2.txt", "file10.txt"]);

        let contents = fs::read_to_string(dir.path().join(MANIFEST_FILENAME))
            .expect("manifest should exist");
        assert_eq!(contents, "file1.txt\nfile2.txt\nfile10.txt\n");
        let read_back =
            read_manifest(&dir.path().join(MANIFEST_FILENAME)).expect("manifest is readable");
        assert_eq!(read_back, names);
    }

    #[test]
    fn test_empty_manifest() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let empty: Vec<String> = vec![];
        let path = write_manifest(dir.path(), &empty).expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).expect("readable"), "");
        assert!(read_manifest(&path).expect("readable").is_empty());
    }
}
