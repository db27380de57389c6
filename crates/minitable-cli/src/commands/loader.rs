//! File loading shared by the commands.

use std::path::{Path, PathBuf};

use minitable_access::AccessError;
use minitable_layout::{AlignedVec, LayoutError, Platform};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("cannot serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a whole file into word-aligned storage.
pub fn read_aligned(path: &Path) -> Result<AlignedVec, LoadError> {
    AlignedVec::from_file(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Platform from the `--pointer-width` and `--stride` flags.
pub fn platform(pointer_width: Option<u32>, stride: Option<usize>) -> Result<Platform, LoadError> {
    let platform = match pointer_width {
        Some(bits) => Platform::for_pointer_bits(bits)?,
        None => Platform::NATIVE,
    };
    Ok(match stride {
        Some(stride) => platform.with_descriptor_stride(stride)?,
        None => platform,
    })
}
