//! subcommands of the `trajprep` binary. raw datasets are expected to be
//! downloaded and extracted already.
use super::TrajprepCliError;
use crate::config::{
    MalformedInputPolicy, NormalizerConfiguration, SourceFormat, SourceFormatPreset,
};
use crate::{manifest, normalize, verify};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TrajprepOperation {
    /// convert a tree of raw trajectory files into numbered `<n>.txt` files and a manifest
    Convert {
        /// root directory of the raw dataset, searched recursively
        #[arg(long)]
        input_directory: String,
        /// directory receiving the normalized trajectories and `dataset.txt`
        #[arg(long)]
        output_directory: String,
        #[arg(long, help = "path to .toml or .json file with normalizer parameters")]
        configuration_file: Option<String>,
        /// built-in raw format, replaces the configured source format
        #[arg(long, value_enum)]
        format: Option<SourceFormatPreset>,
        /// replaces the configured malformed input policy
        #[arg(long, value_enum)]
        malformed_input_policy: Option<MalformedInputPolicy>,
        /// remove numbered outputs and the manifest left by a previous run
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// rebuild `dataset.txt` from the numbered files already in a directory
    Manifest {
        #[arg(long)]
        directory: String,
        /// filename prefix before the number, such as "file"
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long, default_value_t = String::from("txt"))]
        extension: String,
    },
    /// check numbering, manifest and bounding box of a normalized output directory
    Verify {
        #[arg(long)]
        directory: String,
        #[arg(long, help = "path to .toml or .json file with normalizer parameters")]
        configuration_file: Option<String>,
    },
}

impl TrajprepOperation {
    pub fn run(&self) -> Result<(), TrajprepCliError> {
        match self {
            TrajprepOperation::Convert {
                input_directory,
                output_directory,
                configuration_file,
                format,
                malformed_input_policy,
                overwrite,
            } => {
                let mut conf = read_configuration(configuration_file.as_ref())?;
                if let Some(preset) = format {
                    conf.source_format = SourceFormat::from(preset);
                }
                if let Some(policy) = malformed_input_policy {
                    conf.malformed_input_policy = *policy;
                }
                conf.overwrite = conf.overwrite || *overwrite;

                println!(
                    "Start converting the trajectories in {input_directory}. This takes some time..."
                );
                let summary = normalize::run(
                    Path::new(input_directory),
                    Path::new(output_directory),
                    &conf,
                )?;
                println!("Finished conversion of data.");
                println!("{summary}");
                Ok(())
            }
            TrajprepOperation::Manifest {
                directory,
                prefix,
                extension,
            } => {
                let names = manifest::rebuild_manifest(
                    Path::new(directory),
                    prefix.as_deref().unwrap_or_default(),
                    extension,
                )?;
                println!(
                    "wrote {} entries to {}",
                    names.len(),
                    Path::new(directory).join(manifest::MANIFEST_FILENAME).display()
                );
                Ok(())
            }
            TrajprepOperation::Verify {
                directory,
                configuration_file,
            } => {
                let conf = read_configuration(configuration_file.as_ref())?;
                let report = verify::verify_output(Path::new(directory), &conf.bounding_box)?;
                println!("{report}");
                if report.is_valid() {
                    Ok(())
                } else {
                    Err(TrajprepCliError::VerificationFailed(directory.clone()))
                }
            }
        }
    }
}

fn read_configuration(
    configuration_file: Option<&String>,
) -> Result<NormalizerConfiguration, TrajprepCliError> {
    match configuration_file {
        None => Ok(NormalizerConfiguration::default()),
        Some(f) => {
            log::info!("reading trajprep configuration from {f}");
            Ok(NormalizerConfiguration::try_from(f)?)
        }
    }
}
