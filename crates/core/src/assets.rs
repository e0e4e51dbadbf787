//! Frame assets - static multi-line glyph blocks loaded once at startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Ship animation frames, in display order.
pub const SHIP_FRAME_FILES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// Debris frames; one is picked at random for every spawned piece.
pub const DEBRIS_FRAME_FILES: [&str; 3] = ["trash_small.txt", "trash_large.txt", "trash_xl.txt"];

/// Fatal startup error: a frame could not be loaded.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read frame {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("frame {path} is empty")]
    Empty { path: PathBuf },
    #[error("no {kind} frames provided")]
    Missing { kind: &'static str },
}

/// Immutable glyph blocks shared by every task of a session.
#[derive(Debug, Clone)]
pub struct Frames {
    ship: Vec<Rc<str>>,
    debris: Vec<Rc<str>>,
}

impl Frames {
    /// Load all frames from `dir`.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let ship = SHIP_FRAME_FILES
            .iter()
            .map(|name| read_frame(&dir.join(name)))
            .collect::<Result<Vec<_>, _>>()?;
        let debris = DEBRIS_FRAME_FILES
            .iter()
            .map(|name| read_frame(&dir.join(name)))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "loaded {} ship and {} debris frames from {}",
            ship.len(),
            debris.len(),
            dir.display()
        );
        Ok(Self { ship, debris })
    }

    /// Build frames from in-memory text.
    pub fn from_texts(ship: &[&str], debris: &[&str]) -> Result<Self, AssetError> {
        if ship.is_empty() {
            return Err(AssetError::Missing { kind: "ship" });
        }
        if debris.is_empty() {
            return Err(AssetError::Missing { kind: "debris" });
        }
        Ok(Self {
            ship: ship.iter().map(|s| Rc::from(*s)).collect(),
            debris: debris.iter().map(|s| Rc::from(*s)).collect(),
        })
    }

    pub fn ship(&self) -> &[Rc<str>] {
        &self.ship
    }

    pub fn debris(&self) -> &[Rc<str>] {
        &self.debris
    }
}

fn read_frame(path: &Path) -> Result<Rc<str>, AssetError> {
    let text = fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(AssetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(Rc::from(text.as_str()))
}
