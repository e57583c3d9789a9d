use crate::normalize::NormalizeError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// layout of a raw trajectory file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFormat {
    /// number of leading non-data lines to skip
    pub header_lines: usize,
    /// single ASCII character separating fields in a record
    pub delimiter: char,
    /// zero-based index of the latitude field
    pub latitude_column: usize,
    /// zero-based index of the longitude field
    pub longitude_column: usize,
    /// extension of raw files to pick up, without the leading dot
    pub extension: String,
}

/// built-in source formats selectable from the command line
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormatPreset {
    /// Microsoft Research Geolife 1.3 `.plt` files
    Geolife,
    /// the normalized `<lat> <lon>` output of this tool
    Normalized,
}

impl SourceFormat {
    pub fn geolife() -> SourceFormat {
        SourceFormat {
            header_lines: 6,
            delimiter: ',',
            latitude_column: 0,
            longitude_column: 1,
            extension: String::from("plt"),
        }
    }

    pub fn normalized() -> SourceFormat {
        SourceFormat {
            header_lines: 0,
            delimiter: ' ',
            latitude_column: 0,
            longitude_column: 1,
            extension: String::from("txt"),
        }
    }

    pub fn delimiter_byte(&self) -> Result<u8, NormalizeError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(NormalizeError::ConfigurationError(format!(
                "delimiter must be a single ASCII character, found '{}'",
                self.delimiter
            )))
        }
    }

    /// extension with any leading '.' removed, so ".plt" and "plt" behave the same
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    pub fn validate(&self) -> Result<(), NormalizeError> {
        self.delimiter_byte()?;
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(NormalizeError::ConfigurationError(String::from(
                "delimiter cannot be a line terminator",
            )));
        }
        if self.latitude_column == self.longitude_column {
            return Err(NormalizeError::ConfigurationError(format!(
                "latitude and longitude cannot share column {}",
                self.latitude_column
            )));
        }
        if self.extension().is_empty() {
            return Err(NormalizeError::ConfigurationError(String::from(
                "raw file extension cannot be empty",
            )));
        }
        Ok(())
    }
}

impl Default for SourceFormat {
    fn default() -> Self {
        SourceFormat::geolife()
    }
}

impl From<&SourceFormatPreset> for SourceFormat {
    fn from(value: &SourceFormatPreset) -> Self {
        match value {
            SourceFormatPreset::Geolife => SourceFormat::geolife(),
            SourceFormatPreset::Normalized => SourceFormat::normalized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geolife_preset() {
        let format = SourceFormat::from(&SourceFormatPreset::Geolife);
        assert_eq!(format, SourceFormat::default());
        assert_eq!(format.header_lines, 6);
        assert_eq!(format.delimiter_byte().expect("ascii"), b',');
        assert!(format.validate().is_ok());
    }

    #[test]
    fn test_extension_leading_dot() {
        let format = SourceFormat {
            extension: String::from(".plt"),
            ..SourceFormat::geolife()
        };
        assert_eq!(format.extension(), "plt");
    }

    #[test]
    fn test_invalid_formats() {
        let non_ascii = SourceFormat {
            delimiter: '→',
            ..SourceFormat::geolife()
        };
        assert!(non_ascii.validate().is_err());
        let shared_column = SourceFormat {
            longitude_column: 0,
            ..SourceFormat::geolife()
        };
        assert!(shared_column.validate().is_err());
        let no_extension = SourceFormat {
            extension: String::from("."),
            ..SourceFormat::geolife()
        };
        assert!(no_extension.validate().is_err());
    }
}
