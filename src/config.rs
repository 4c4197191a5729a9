use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};
use tabletalk_core::StoneColor;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/tabletalk.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub watch: WatchConfig,
    pub gomoku: GomokuConfig,
    pub furniture: FurnitureConfig,
}

/// Where the external writer drops its command files.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WatchConfig {
    pub dir: PathBuf,
    pub poll_interval_ms: u64,
    pub gomoku_file: String,
    pub furniture_file: String,
    pub mode_file: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("StreamingAssets"),
            poll_interval_ms: 1000,
            gomoku_file: "step.json".to_string(),
            furniture_file: "furniture_command.json".to_string(),
            mode_file: "change.json".to_string(),
        }
    }
}

impl WatchConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn gomoku_path(&self) -> PathBuf {
        self.dir.join(&self.gomoku_file)
    }

    pub fn furniture_path(&self) -> PathBuf {
        self.dir.join(&self.furniture_file)
    }

    pub fn mode_path(&self) -> PathBuf {
        self.dir.join(&self.mode_file)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GomokuConfig {
    pub board_size: i32,
    /// Moves shown under the board.
    pub history_display_len: usize,
    /// Ignore the move file after a game ends until the mode is selected again.
    pub stop_polling_on_game_end: bool,
    /// Color played by the built-in opponent, if any.
    pub opponent: Option<String>,
}

impl Default for GomokuConfig {
    fn default() -> Self {
        Self {
            board_size: tabletalk_core::DEFAULT_BOARD_SIZE,
            history_display_len: tabletalk_core::history::DEFAULT_DISPLAY_LEN,
            stop_polling_on_game_end: false,
            opponent: None,
        }
    }
}

impl GomokuConfig {
    /// The opponent's color; unknown values are logged and ignored.
    pub fn opponent_color(&self) -> Option<StoneColor> {
        let raw = self.opponent.as_deref()?;
        let color = StoneColor::parse(raw);
        if color.is_none() {
            warn!(value = raw, "Unknown opponent color; playing without an opponent");
        }
        color
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FurnitureConfig {
    /// JSON catalog; the built-in catalog is used when unset.
    pub catalog: Option<PathBuf>,
    pub floor_size: [f32; 3],
    pub camera_height: f32,
    pub default_offset: f32,
}

impl Default for FurnitureConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            floor_size: [20.0, 0.1, 20.0],
            camera_height: 870.0,
            default_offset: 1.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    AppConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!("Config not found at {}. Using defaults", path.display());
                }
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabletalk.toml");
        fs::write(
            &path,
            "[gomoku]\nboard_size = 19\nopponent = \"white\"\n\n[watch]\ndir = \"drop\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from_path(&path);
        assert_eq!(cfg.gomoku.board_size, 19);
        assert_eq!(cfg.gomoku.history_display_len, 20);
        assert_eq!(cfg.gomoku.opponent_color(), Some(StoneColor::White));
        assert_eq!(cfg.watch.gomoku_path(), PathBuf::from("drop/step.json"));
        assert_eq!(cfg.watch.poll_interval(), Duration::from_secs(1));
        assert_eq!(cfg.furniture.floor_size, [20.0, 0.1, 20.0]);
    }

    #[test]
    fn missing_or_broken_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from_path(&dir.path().join("absent.toml"));
        assert_eq!(cfg.watch.mode_file, "change.json");

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[gomoku\nboard_size = ").unwrap();
        let cfg = AppConfig::load_from_path(&broken);
        assert_eq!(cfg.gomoku.board_size, 15);
        assert!(!cfg.gomoku.stop_polling_on_game_end);
    }

    #[test]
    fn unknown_opponent_is_ignored() {
        let cfg = GomokuConfig {
            opponent: Some("purple".to_string()),
            ..GomokuConfig::default()
        };
        assert_eq!(cfg.opponent_color(), None);
    }
}
