mod bounding_box;
mod malformed_input_policy;
mod normalizer_config;
mod source_format;

pub use bounding_box::BoundingBox;
pub use malformed_input_policy::MalformedInputPolicy;
pub use normalizer_config::NormalizerConfiguration;
pub use source_format::{SourceFormat, SourceFormatPreset};
