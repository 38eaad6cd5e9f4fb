//! Read-only asset loading at start-up
//!
//! The sprite sheet is required; the explosion sound is not.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audio::Clip;
use crate::error::SetupError;

pub const SPRITE_SHEET: &str = "spritesheet.bmp";
pub const EXPLOSION_SOUND: &str = "explosion.wav";

/// Everything loaded from the assets directory
#[derive(Debug, Clone)]
pub struct Assets {
    pub dir: PathBuf,
    /// Encoded sprite sheet, handed to the display backend as-is
    pub sprite_sheet: Vec<u8>,
    pub explosion: Option<Clip>,
}

impl Assets {
    /// Load assets from `dir`. A missing or broken sprite sheet is fatal.
    pub fn load(dir: &Path) -> Result<Self, SetupError> {
        let sheet_path = dir.join(SPRITE_SHEET);
        let sprite_sheet = read_required(&sheet_path)?;
        if !sprite_sheet.starts_with(b"BM") {
            return Err(SetupError::AssetCorrupt {
                path: sheet_path,
                reason: "missing BMP header".to_string(),
            });
        }
        log::info!(
            "Loaded sprite sheet {} ({} bytes)",
            sheet_path.display(),
            sprite_sheet.len()
        );

        let explosion = read_optional(&dir.join(EXPLOSION_SOUND)).map(Clip::new);

        Ok(Self {
            dir: dir.to_path_buf(),
            sprite_sheet,
            explosion,
        })
    }
}

fn read_required(path: &Path) -> Result<Vec<u8>, SetupError> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SetupError::AssetMissing {
            path: path.to_path_buf(),
        },
        _ => SetupError::AssetRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read an optional asset, logging (not failing) when it is unavailable
fn read_optional(path: &Path) -> Option<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => {
            log::warn!("{} is empty, skipping", path.display());
            None
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("blitz-assets-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_sheet_is_fatal() {
        let dir = scratch_dir("missing");
        let err = Assets::load(&dir).unwrap_err();
        assert!(matches!(err, SetupError::AssetMissing { .. }));
        assert!(err.to_string().contains(SPRITE_SHEET));
    }

    #[test]
    fn test_corrupt_sheet_is_fatal() {
        let dir = scratch_dir("corrupt");
        fs::write(dir.join(SPRITE_SHEET), b"GIF89a").unwrap();
        assert!(matches!(
            Assets::load(&dir),
            Err(SetupError::AssetCorrupt { .. })
        ));

        fs::write(dir.join(SPRITE_SHEET), b"").unwrap();
        let err = Assets::load(&dir).unwrap_err();
        assert!(matches!(err, SetupError::AssetCorrupt { .. }));
        assert!(err.to_string().contains("missing BMP header"));
    }

    #[test]
    fn test_missing_sound_degrades() {
        let dir = scratch_dir("nosound");
        fs::write(dir.join(SPRITE_SHEET), b"BM\0\0\0\0").unwrap();
        let assets = Assets::load(&dir).unwrap();
        assert!(assets.explosion.is_none());

        fs::write(dir.join(EXPLOSION_SOUND), b"RIFF....WAVE").unwrap();
        let assets = Assets::load(&dir).unwrap();
        assert_eq!(assets.explosion.unwrap().bytes(), b"RIFF....WAVE");
    }
}
