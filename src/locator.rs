//! Project directory and descriptor discovery

use std::path::{Path, PathBuf};

use crate::error::{St2MakeError, St2MakeResult};
use crate::fs::FileSystem;
use crate::models::ProjectLocation;

/// Resource manifest filename
pub const RESOURCE_MANIFEST: &str = ".project";

/// Build-configuration manifest filename
pub const BUILD_MANIFEST: &str = ".cproject";

/// Resolve `dir` into a [`ProjectLocation`].
///
/// Fails with `ProjectDirNotFound` when `dir` is not a directory and with
/// `DescriptorMissing` when either descriptor is absent. Nothing is parsed
/// here.
pub fn locate_project<F: FileSystem>(fs: &F, dir: &Path) -> St2MakeResult<ProjectLocation> {
    let dir = std::path::absolute(dir).map_err(|_| St2MakeError::ProjectDirNotFound {
        path: dir.to_path_buf(),
    })?;

    if !fs.is_dir(&dir) {
        return Err(St2MakeError::ProjectDirNotFound { path: dir });
    }

    let resource_manifest = dir.join(RESOURCE_MANIFEST);
    let build_manifest = dir.join(BUILD_MANIFEST);
    for descriptor in [&resource_manifest, &build_manifest] {
        if !fs.is_file(descriptor) {
            return Err(St2MakeError::DescriptorMissing {
                path: descriptor.clone(),
            });
        }
    }

    let name = project_name(&dir).ok_or_else(|| St2MakeError::ProjectDirNotFound {
        path: dir.clone(),
    })?;

    Ok(ProjectLocation {
        dir,
        name,
        resource_manifest,
        build_manifest,
    })
}

/// Directory basename without extension, spaces replaced by underscores.
fn project_name(dir: &Path) -> Option<String> {
    let named: PathBuf = if dir.file_name().is_some() {
        dir.to_path_buf()
    } else {
        // `..` and similar have no basename until resolved
        dir.canonicalize().ok()?
    };

    named
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.replace(' ', "_"))
}
