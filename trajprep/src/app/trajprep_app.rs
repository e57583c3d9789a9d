use super::TrajprepOperation;
use clap::Parser;

/// command line tool preparing trajectory datasets for the Fréchet distance benchmark
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TrajprepApp {
    #[command(subcommand)]
    pub op: TrajprepOperation,
}

#[cfg(test)]
mod tests {
    use super::TrajprepApp;
    use crate::app::TrajprepOperation;
    use crate::config::{MalformedInputPolicy, SourceFormatPreset};
    use clap::Parser;

    #[test]
    fn test_parse_convert() {
        let args = TrajprepApp::try_parse_from([
            "trajprep",
            "convert",
            "--input-directory",
            "Data",
            "--output-directory",
            "data",
            "--format",
            "geolife",
            "--malformed-input-policy",
            "fail",
            "--overwrite",
        ])
        .expect("arguments should parse");
        match args.op {
            TrajprepOperation::Convert {
                input_directory,
                output_directory,
                configuration_file,
                format,
                malformed_input_policy,
                overwrite,
            } => {
                assert_eq!(input_directory, "Data");
                assert_eq!(output_directory, "data");
                assert_eq!(configuration_file, None);
                assert_eq!(format, Some(SourceFormatPreset::Geolife));
                assert_eq!(malformed_input_policy, Some(MalformedInputPolicy::Fail));
                assert!(overwrite);
            }
            _ => panic!("expected convert operation"),
        }
    }

    #[test]
    fn test_parse_manifest_defaults() {
        let args =
            TrajprepApp::try_parse_from(["trajprep", "manifest", "--directory", "sigspatial"])
                .expect("arguments should parse");
        match args.op {
            TrajprepOperation::Manifest {
                directory,
                prefix,
                extension,
            } => {
                assert_eq!(directory, "sigspatial");
                assert_eq!(prefix, None);
                assert_eq!(extension, "txt");
            }
            _ => panic!("expected manifest operation"),
        }
    }

    #[test]
    fn test_convert_requires_directories() {
        assert!(TrajprepApp::try_parse_from(["trajprep", "convert"]).is_err());
    }
}
