use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::assets::decode::decode_image;
use crate::assets::raster::Raster;
use crate::foundation::error::{PhotoplateError, PhotoplateResult};

/// Extensions tried, in order, when an asset id names a file without one.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Turns template asset identifiers into decoded rasters.
pub trait AssetResolver {
    /// Resolve and decode `id`, failing with [`PhotoplateError::AssetNotFound`].
    fn resolve(&self, id: &str) -> PhotoplateResult<Raster>;
}

/// Normalize and validate template-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> PhotoplateResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(PhotoplateError::asset_not_found(format!(
            "asset paths must be relative: \"{source}\""
        )));
    }
    if s.is_empty() {
        return Err(PhotoplateError::asset_not_found(
            "asset path must be non-empty",
        ));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(PhotoplateError::asset_not_found(format!(
                "asset paths must not contain '..': \"{source}\""
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(PhotoplateError::asset_not_found(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// Resolves asset ids as relative paths under a root directory.
///
/// An id is tried as given first, then with each of [`IMAGE_EXTENSIONS`] appended, so template
/// authors can write `"beach"` for `beach.png`.
#[derive(Clone, Debug)]
pub struct DirAssetResolver {
    root: PathBuf,
}

impl DirAssetResolver {
    /// Resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory assets are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, id: &str) -> PhotoplateResult<Vec<PathBuf>> {
        let norm = normalize_rel_path(id)?;
        let base = self.root.join(Path::new(&norm));
        let mut out = vec![base.clone()];
        if base.extension().is_none() {
            for ext in IMAGE_EXTENSIONS {
                out.push(base.with_extension(ext));
            }
        }
        Ok(out)
    }
}

impl AssetResolver for DirAssetResolver {
    fn resolve(&self, id: &str) -> PhotoplateResult<Raster> {
        let candidates = self.candidates(id)?;
        let Some(path) = candidates.iter().find(|p| p.is_file()) else {
            return Err(PhotoplateError::asset_not_found(format!(
                "no file for asset \"{id}\" under '{}'",
                self.root.display()
            )));
        };
        let bytes = std::fs::read(path).map_err(|e| {
            PhotoplateError::asset_not_found(format!("read '{}': {e}", path.display()))
        })?;
        decode_image(&bytes).map_err(|e| {
            PhotoplateError::asset_not_found(format!("decode '{}': {e}", path.display()))
        })
    }
}

/// Resolver backed by rasters the host has already decoded.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetResolver {
    assets: HashMap<String, Raster>,
}

impl MemoryAssetResolver {
    /// Empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `raster` under `id`.
    pub fn insert(&mut self, id: impl Into<String>, raster: Raster) {
        self.assets.insert(id.into(), raster);
    }

    /// Builder-style [`MemoryAssetResolver::insert`].
    pub fn with_asset(mut self, id: impl Into<String>, raster: Raster) -> Self {
        self.insert(id, raster);
        self
    }
}

impl AssetResolver for MemoryAssetResolver {
    fn resolve(&self, id: &str) -> PhotoplateResult<Raster> {
        self.assets
            .get(id)
            .cloned()
            .ok_or_else(|| PhotoplateError::asset_not_found(format!("unknown asset \"{id}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolver.rs"]
mod tests;
