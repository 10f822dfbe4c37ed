use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PlotError, PlotResult};

/// Raw font file handed to the rendering backend for label text.
///
/// The engine never parses glyphs; it only guarantees the asset exists and is
/// non-empty before the frame loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAsset {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl FontAsset {
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| PlotError::ResourceLoad {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(PlotError::Configuration(format!(
                "font asset `{}` is empty",
                path.display()
            )));
        }
        info!(path = %path.display(), size = bytes.len(), "font asset loaded");
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_is_a_resource_error() {
        let err = FontAsset::load("definitely/not/here/font.otf").expect_err("missing font");
        assert!(matches!(err, PlotError::ResourceLoad { .. }));
    }

    #[test]
    fn loads_existing_file() {
        let path = std::env::temp_dir().join(format!("plotter-font-{}.otf", std::process::id()));
        std::fs::write(&path, b"OTTO").expect("write temp font");
        let font = FontAsset::load(&path).expect("load");
        assert_eq!(font.bytes(), b"OTTO");
        let _ = std::fs::remove_file(&path);
    }
}
