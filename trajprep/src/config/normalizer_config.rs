use super::{BoundingBox, MalformedInputPolicy, SourceFormat};
use crate::normalize::NormalizeError;
use serde::{Deserialize, Serialize};

/// defines behaviors for a trajectory normalization run. missing keys
/// fall back to the Geolife format and the Beijing bounding box.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct NormalizerConfiguration {
    pub source_format: SourceFormat,
    pub bounding_box: BoundingBox,
    pub malformed_input_policy: MalformedInputPolicy,
    /// remove numbered outputs and the manifest left by a previous run
    pub overwrite: bool,
}

impl NormalizerConfiguration {
    pub fn validate(&self) -> Result<(), NormalizeError> {
        self.source_format.validate()?;
        self.bounding_box.validate()
    }
}

impl TryFrom<&String> for NormalizerConfiguration {
    type Error = NormalizeError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: NormalizerConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                NormalizeError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                NormalizeError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                NormalizeError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                NormalizeError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(NormalizeError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::NormalizerConfiguration;
    use crate::config::{BoundingBox, MalformedInputPolicy, SourceFormat};
    use std::fs;
    use tempfile::TempDir;

    fn write_conf(dir: &TempDir, filename: &str, contents: &str) -> String {
        let path = dir.path().join(filename);
        fs::write(&path, contents).expect("failed writing test configuration");
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let f = write_conf(
            &dir,
            "conf.toml",
            r#"
malformed_input_policy = "fail"

[source_format]
header_lines = 1
delimiter = ";"
latitude_column = 2
longitude_column = 1
extension = "csv"
"#,
        );
        let conf = NormalizerConfiguration::try_from(&f).expect("should decode");
        assert_eq!(conf.source_format.header_lines, 1);
        assert_eq!(conf.source_format.delimiter, ';');
        assert_eq!(conf.source_format.latitude_column, 2);
        assert_eq!(conf.bounding_box, BoundingBox::BEIJING);
        assert_eq!(conf.malformed_input_policy, MalformedInputPolicy::Fail);
        assert!(!conf.overwrite);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_json_bounding_box() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let f = write_conf(
            &dir,
            "conf.json",
            r#"{
                "bounding_box": {
                    "min_latitude": 37.0,
                    "max_latitude": 38.0,
                    "min_longitude": -123.0,
                    "max_longitude": -122.0
                },
                "overwrite": true
            }"#,
        );
        let conf = NormalizerConfiguration::try_from(&f).expect("should decode");
        assert!(conf.bounding_box.contains(37.5, -122.5));
        assert!(conf.overwrite);
        assert_eq!(conf.source_format, SourceFormat::geolife());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let f = write_conf(&dir, "conf.yaml", "overwrite: true");
        assert!(NormalizerConfiguration::try_from(&f).is_err());
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let f = write_conf(
            &dir,
            "conf.toml",
            r#"
[bounding_box]
min_latitude = 41.0
max_latitude = 39.0
min_longitude = 115.0
max_longitude = 117.0
"#,
        );
        assert!(NormalizerConfiguration::try_from(&f).is_err());
    }

    #[test]
    fn test_missing_file() {
        let f = String::from("/this/path/does/not/exist.toml");
        assert!(NormalizerConfiguration::try_from(&f).is_err());
    }
}
