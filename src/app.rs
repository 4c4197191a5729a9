//! The run loop: owns both systems and feeds them watched file events.

use crate::config::AppConfig;
use crate::dispatch::{DispatchError, Effect, FurnitureDispatcher, GomokuDispatcher, Reply};
use crate::journal::{StatusJournal, StatusRecord};
use crate::protocol::{decode_mode, Mode};
use crate::watcher::{Source, WatchEvent};
use glam::Vec3;
use std::sync::mpsc::Receiver;
use tabletalk_furniture::{FurnitureCatalog, FurnitureController, FurnitureScene};
use tracing::{debug, info, warn};

pub struct App {
    config: AppConfig,
    catalog: FurnitureCatalog,
    mode: Mode,
    gomoku: GomokuDispatcher,
    furniture: FurnitureDispatcher,
    journal: Option<StatusJournal>,
}

impl App {
    pub fn new(config: AppConfig, mode: Mode, journal: Option<StatusJournal>) -> Self {
        let catalog = load_catalog(&config);
        let gomoku = new_gomoku(&config);
        let furniture = new_furniture(&config, &catalog);
        info!(mode = mode.as_str(), "Active mode");
        Self {
            config,
            catalog,
            mode,
            gomoku,
            furniture,
            journal,
        }
    }

    #[cfg(test)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[cfg(test)]
    pub fn gomoku(&self) -> &GomokuDispatcher {
        &self.gomoku
    }

    #[cfg(test)]
    pub fn furniture(&self) -> &FurnitureDispatcher {
        &self.furniture
    }

    /// Drain events until a quit command or until the poller closes the channel.
    pub fn run(&mut self, rx: &Receiver<WatchEvent>) -> Effect {
        for event in rx.iter() {
            if self.handle(&event) == Effect::Quit {
                return Effect::Quit;
            }
        }
        Effect::Continue
    }

    pub fn handle(&mut self, event: &WatchEvent) -> Effect {
        match event.source {
            Source::Mode => {
                self.select_mode(&event.contents);
                Effect::Continue
            }
            Source::Gomoku if self.mode == Mode::Gomoku => {
                if self.config.gomoku.stop_polling_on_game_end && self.gomoku.session().is_ended() {
                    debug!("Game over; move file ignored until the mode is selected again");
                    return Effect::Continue;
                }
                let result = self.gomoku.handle(&event.contents);
                let effect = self.report(Mode::Gomoku, result);
                println!("{}", self.gomoku.render());
                effect
            }
            Source::Furniture if self.mode == Mode::Furniture => {
                let result = self.furniture.handle(&event.contents);
                let effect = self.report(Mode::Furniture, result);
                println!("{}", self.furniture.render());
                effect
            }
            Source::Gomoku | Source::Furniture => {
                debug!(source = ?event.source, mode = self.mode.as_str(), "Ignoring payload for inactive mode");
                Effect::Continue
            }
        }
    }

    /// Switch systems. A newly selected system starts fresh; re-selecting the
    /// active one only restarts a finished game.
    fn select_mode(&mut self, payload: &str) {
        let mode = match decode_mode(payload) {
            Ok(mode) => mode,
            Err(err) => {
                self.report(self.mode, Err(DispatchError::Format(err)));
                return;
            }
        };

        let finished_game = mode == Mode::Gomoku && self.gomoku.session().is_ended();
        if mode == self.mode && !finished_game {
            debug!(mode = mode.as_str(), "Mode already active");
            return;
        }

        self.mode = mode;
        let message = match mode {
            Mode::Gomoku => {
                self.gomoku = new_gomoku(&self.config);
                "Switched to Gomoku. Black to move."
            }
            Mode::Furniture => {
                self.furniture = new_furniture(&self.config, &self.catalog);
                "Switched to furniture control."
            }
        };
        info!(mode = mode.as_str(), "Mode selected");
        self.report(
            mode,
            Ok(Reply {
                lines: vec![message.to_string()],
                effect: Effect::Continue,
            }),
        );
        if mode == Mode::Gomoku {
            println!("{}", self.gomoku.render());
        }
    }

    fn report(&mut self, mode: Mode, result: Result<Reply, DispatchError>) -> Effect {
        let (ok, lines, effect) = match result {
            Ok(reply) => (true, reply.lines, reply.effect),
            Err(err) => {
                warn!(mode = mode.as_str(), %err, "Command rejected");
                (false, vec![err.to_string()], Effect::Continue)
            }
        };

        for line in &lines {
            println!("{line}");
            if ok {
                info!(mode = mode.as_str(), "{line}");
            }
            if let Some(journal) = self.journal.as_mut() {
                let record = StatusRecord {
                    mode: mode.as_str(),
                    ok,
                    message: line,
                };
                if let Err(err) = journal.write(&record) {
                    warn!(%err, "Failed to write status journal");
                }
            }
        }
        effect
    }
}

fn load_catalog(config: &AppConfig) -> FurnitureCatalog {
    let Some(path) = config.furniture.catalog.as_deref() else {
        return FurnitureCatalog::builtin();
    };
    match FurnitureCatalog::from_path(path) {
        Ok(catalog) => {
            info!(path = %path.display(), entries = catalog.len(), "Loaded furniture catalog");
            catalog
        }
        Err(err) => {
            warn!("Failed to load {}: {err}. Using built-in catalog", path.display());
            FurnitureCatalog::builtin()
        }
    }
}

fn new_gomoku(config: &AppConfig) -> GomokuDispatcher {
    GomokuDispatcher::new(
        config.gomoku.board_size,
        config.gomoku.opponent_color(),
        config.gomoku.history_display_len,
    )
}

fn new_furniture(config: &AppConfig, catalog: &FurnitureCatalog) -> FurnitureDispatcher {
    let floor = Vec3::from_array(config.furniture.floor_size);
    let scene = FurnitureScene::new(floor, config.furniture.camera_height);
    let controller = FurnitureController::new(scene, catalog.clone())
        .with_default_offset(config.furniture.default_offset);
    FurnitureDispatcher::new(controller)
}
