// Split options: the recognized configuration keys, their defaults, and
// loading them from a JSON file (by default <config dir>/sash/split.json).

use std::path::{Path, PathBuf};

use sash_core::SplitDirection;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SIZE: f32 = 100.0;
pub const DEFAULT_GUTTER_SIZE: f32 = 10.0;
pub const DEFAULT_SNAP_OFFSET: f32 = 30.0;
pub const DEFAULT_DRAG_INTERVAL: f32 = 1.0;

/// Pixel minimum for panes: one value for every pane, or one per pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinSize {
    Uniform(f32),
    PerPane(Vec<f32>),
}

impl Default for MinSize {
    fn default() -> Self {
        MinSize::Uniform(DEFAULT_MIN_SIZE)
    }
}

impl MinSize {
    /// Expand to one minimum per pane. Entries missing from a short
    /// per-pane list get the default minimum.
    pub fn resolve(&self, count: usize) -> Vec<f32> {
        match self {
            MinSize::Uniform(min) => vec![*min; count],
            MinSize::PerPane(mins) => {
                if mins.len() < count {
                    log::warn!(
                        "min_size lists {} entries for {} panes, defaulting the rest to {}",
                        mins.len(),
                        count,
                        DEFAULT_MIN_SIZE
                    );
                }
                (0..count)
                    .map(|i| mins.get(i).copied().unwrap_or(DEFAULT_MIN_SIZE))
                    .collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Initial pane sizes in percent. Uniform when absent.
    pub sizes: Option<Vec<f32>>,
    pub min_size: MinSize,
    /// Pixel width of each gutter.
    pub gutter_size: f32,
    /// Distance in pixels within which a dragged gutter snaps to a pane minimum.
    pub snap_offset: f32,
    /// Drag offsets are rounded to multiples of this many pixels. 1 disables it.
    pub drag_interval: f32,
    /// Push further panes once a neighbor reaches its minimum.
    pub pushable_panes: bool,
    pub direction: SplitDirection,
    /// Cursor shown while dragging. Defaults to the direction's resize cursor.
    pub cursor: Option<String>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            sizes: None,
            min_size: MinSize::default(),
            gutter_size: DEFAULT_GUTTER_SIZE,
            snap_offset: DEFAULT_SNAP_OFFSET,
            drag_interval: DEFAULT_DRAG_INTERVAL,
            pushable_panes: false,
            direction: SplitDirection::Horizontal,
            cursor: None,
        }
    }
}

impl SplitOptions {
    pub fn cursor(&self) -> &str {
        self.cursor
            .as_deref()
            .unwrap_or_else(|| self.direction.default_cursor())
    }

    /// Sizes to start with: the configured list when it covers every pane,
    /// otherwise `100 / count` each.
    pub fn initial_sizes(&self, count: usize) -> Vec<f32> {
        match &self.sizes {
            Some(sizes) if sizes.len() == count => sizes.clone(),
            Some(sizes) => {
                log::warn!(
                    "sizes lists {} entries for {} panes, using uniform sizes",
                    sizes.len(),
                    count
                );
                uniform_sizes(count)
            }
            None => uniform_sizes(count),
        }
    }
}

pub(crate) fn uniform_sizes(count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    vec![100.0 / count as f32; count]
}

// ──────────────────────────────────────────────
// Options file I/O
// ──────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn default_options_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("sash").join("split.json"))
}

/// Read options from a JSON file. Keys that are absent take their defaults.
pub fn read_options(path: &Path) -> Result<SplitOptions, OptionsError> {
    let data = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| OptionsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load options from the default location, falling back to defaults when the
/// file is missing or unreadable.
pub fn load_options() -> SplitOptions {
    let path = match default_options_path() {
        Some(p) => p,
        None => return SplitOptions::default(),
    };
    if !path.exists() {
        return SplitOptions::default();
    }

    match read_options(&path) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("{}", e);
            SplitOptions::default()
        }
    }
}
