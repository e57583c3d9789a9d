mod manifest_ops;

pub use manifest_ops::{
    list_numbered_files, numbered_index, read_manifest, rebuild_manifest, sort_numerically,
    write_manifest, MANIFEST_FILENAME,
};
