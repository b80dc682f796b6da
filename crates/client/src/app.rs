//! Glue code tying the runtime, authored content, and terminal UI together.

use std::sync::Arc;
use std::time::{Duration as StdDuration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{self, Duration};

use game_core::{Activation, Settings};
use runtime::{
    Event as RuntimeEvent, FileSaveRepository, Runtime, RuntimeConfig, RuntimeError, RuntimeHandle,
    SettingsStore, Slot, Topic,
};
use strum::IntoEnumIterator;

use crate::config::ClientConfig;
use crate::input::{ActivationTracker, InputHandler, KeyAction, MenuAction};
use crate::presentation::{terminal, terminal::Tui, ui, widgets};
use crate::state::{AppMode, AppState, PanelKind};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct App {
    handle: RuntimeHandle,
    state: AppState,
    tracker: ActivationTracker,
    settings_store: SettingsStore,
}

impl App {
    /// Loads settings and content, starts the runtime, and takes the initial
    /// session snapshot.
    pub async fn bootstrap(config: ClientConfig) -> Result<App> {
        let settings_store = SettingsStore::new(config.settings_path());
        let settings = settings_store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "settings unreadable, using defaults");
            Settings::default()
        });

        let registry = game_content::builtin_registry().context("loading authored maps")?;
        let grids = game_content::builtin_maps().context("loading authored maps")?;
        let saves = Arc::new(
            FileSaveRepository::new(config.save_dir()).context("opening save directory")?,
        );

        let handle = Runtime::start(
            RuntimeConfig::new(registry)
                .with_settings(settings)
                .with_saves(saves),
        )?;
        let snapshot = handle.snapshot().await?;
        let state = AppState::new(grids, snapshot, settings);

        Ok(App {
            handle,
            state,
            tracker: ActivationTracker::new(),
            settings_store,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!("client starting");

        let mut session_rx = self.handle.subscribe(Topic::Session);
        let mut dialogue_rx = self.handle.subscribe(Topic::Dialogue);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let mut frame_interval = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frame_interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        while !self.state.should_quit {
            tokio::select! {
                result = session_rx.recv() => self.on_runtime_event(result),
                result = dialogue_rx.recv() => self.on_runtime_event(result),
                _ = frame_interval.tick() => {
                    self.frame_tick(&mut terminal).await?;
                }
            }
        }

        self.handle.shutdown().await.ok();
        terminal::restore()?;
        tracing::info!("client exiting");
        Ok(())
    }

    fn on_runtime_event(&mut self, result: Result<RuntimeEvent, RecvError>) {
        match result {
            Ok(RuntimeEvent::Session(event)) => self.state.apply_session_event(event),
            Ok(RuntimeEvent::Dialogue(event)) => self.state.apply_dialogue_event(event),
            Err(RecvError::Closed) => {
                tracing::warn!("event stream closed");
                self.state.should_quit = true;
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("dropped {} stale events", skipped);
                self.state.dirty = true;
            }
        }
    }

    /// Per-frame work: drain pending terminal input, then redraw if needed.
    async fn frame_tick(&mut self, terminal: &mut Tui) -> Result<()> {
        while event::poll(StdDuration::ZERO)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.on_key(key).await?;
                }
                TermEvent::Resize(_, _) => self.state.dirty = true,
                _ => {}
            }
        }

        if self.state.dirty {
            ui::render(terminal, &self.state)?;
            self.state.dirty = false;
        }
        Ok(())
    }

    async fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.mode {
            AppMode::Playing => self.on_game_key(key).await,
            AppMode::StartScreen => {
                self.on_start_screen_key(key);
                Ok(())
            }
            AppMode::Help => {
                if !matches!(InputHandler::menu_key(key), MenuAction::None) {
                    self.state.mode = AppMode::StartScreen;
                    self.state.dirty = true;
                }
                Ok(())
            }
            AppMode::Panel(panel) => self.on_panel_key(panel, key).await,
        }
    }

    async fn on_game_key(&mut self, key: KeyEvent) -> Result<()> {
        match InputHandler::game_key(key) {
            KeyAction::Quit => self.state.should_quit = true,
            KeyAction::MoveCursor(dx, dy) => self.state.move_cursor(dx, dy),
            KeyAction::Activate => {
                let activation = self.tracker.classify(self.state.cursor, Instant::now());
                self.handle.activate(self.state.cursor, activation).await?;
            }
            KeyAction::Interact => {
                self.handle
                    .activate(self.state.cursor, Activation::Double)
                    .await?;
            }
            KeyAction::OpenPanel(panel) => {
                if matches!(panel, PanelKind::SaveMenu | PanelKind::LoadMenu) {
                    self.refresh_saves().await;
                }
                self.state.open_panel(panel);
            }
            KeyAction::Help => {
                self.state.mode = AppMode::Help;
                self.state.dirty = true;
            }
            KeyAction::Back => {
                if self.state.dialogue.is_some() {
                    self.handle.close_dialogue().await?;
                } else {
                    self.state.mode = AppMode::StartScreen;
                    self.state.dirty = true;
                }
            }
            KeyAction::None => {}
        }
        Ok(())
    }

    fn on_start_screen_key(&mut self, key: KeyEvent) {
        match InputHandler::menu_key(key) {
            MenuAction::Up => {
                self.state.menu_index = self.state.menu_index.saturating_sub(1);
                self.state.dirty = true;
            }
            MenuAction::Down => {
                self.state.menu_index =
                    (self.state.menu_index + 1).min(widgets::start_screen::MENU_ITEMS - 1);
                self.state.dirty = true;
            }
            MenuAction::Confirm => {
                match self.state.menu_index {
                    0 => self.state.mode = AppMode::Playing,
                    1 => self.state.mode = AppMode::Help,
                    _ => self.state.should_quit = true,
                }
                self.state.dirty = true;
            }
            MenuAction::Quit => self.state.should_quit = true,
            _ => {}
        }
    }

    async fn on_panel_key(&mut self, panel: PanelKind, key: KeyEvent) -> Result<()> {
        let items = match panel {
            PanelKind::Settings => widgets::panels::SETTINGS_ITEMS,
            PanelKind::SaveMenu | PanelKind::LoadMenu => widgets::panels::SLOT_ITEMS,
            PanelKind::Items => 0,
        };

        match InputHandler::menu_key(key) {
            MenuAction::Back | MenuAction::Quit => {
                self.state.mode = AppMode::Playing;
                self.state.dirty = true;
            }
            MenuAction::Up if items > 0 => {
                self.state.panel_index = self.state.panel_index.saturating_sub(1);
                self.state.dirty = true;
            }
            MenuAction::Down if items > 0 => {
                self.state.panel_index = (self.state.panel_index + 1).min(items - 1);
                self.state.dirty = true;
            }
            MenuAction::Confirm => self.on_panel_confirm(panel).await?,
            MenuAction::Delete if panel == PanelKind::LoadMenu => {
                if let Some(slot) = Slot::new(self.state.panel_index as u8) {
                    if let Err(e) = self.handle.delete_save(slot).await {
                        tracing::warn!(error = %e, "delete failed");
                    }
                    self.refresh_saves().await;
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn on_panel_confirm(&mut self, panel: PanelKind) -> Result<()> {
        match panel {
            PanelKind::Settings => self.on_settings_confirm(),
            PanelKind::Items => {}
            PanelKind::SaveMenu => {
                if let Some(slot) = Slot::new(self.state.panel_index as u8) {
                    match self.handle.save(slot).await {
                        Ok(_) => self.refresh_saves().await,
                        Err(e) => tracing::warn!(error = %e, "save failed"),
                    }
                }
            }
            PanelKind::LoadMenu => {
                if let Some(slot) = Slot::new(self.state.panel_index as u8) {
                    match self.handle.load(slot).await {
                        Ok(_) => {
                            // The SessionLoaded event repositions everything.
                            self.state.mode = AppMode::Playing;
                            self.state.dirty = true;
                        }
                        Err(RuntimeError::EmptySlot(_)) => {}
                        Err(e) => tracing::warn!(error = %e, "load failed"),
                    }
                }
            }
        }
        Ok(())
    }

    fn on_settings_confirm(&mut self) {
        let mut settings = self.state.settings;
        match self.state.panel_index {
            0 => {
                self.state.mode = AppMode::StartScreen;
                self.state.dirty = true;
                return;
            }
            1 => settings.movement = cycle(settings.movement),
            2 => settings.language = cycle(settings.language),
            3 => settings.show_labels = !settings.show_labels,
            4 => settings.animate_dialogue = !settings.animate_dialogue,
            _ => settings = Settings::default(),
        }
        self.apply_settings(settings);
    }

    fn apply_settings(&mut self, settings: Settings) {
        self.state.settings = settings;
        self.handle.update_settings(settings);
        if let Err(e) = self.settings_store.save(&settings) {
            tracing::warn!(error = %e, "failed to persist settings");
        }
        self.state.dirty = true;
    }

    async fn refresh_saves(&mut self) {
        match self.handle.list_saves().await {
            Ok(saves) => self.state.saves = saves,
            Err(e) => tracing::warn!(error = %e, "listing saves failed"),
        }
        self.state.dirty = true;
    }
}

/// Next variant in declaration order, wrapping around.
fn cycle<T: Copy + PartialEq + IntoEnumIterator>(current: T) -> T {
    let variants: Vec<T> = T::iter().collect();
    let index = variants.iter().position(|v| *v == current).unwrap_or(0);
    variants[(index + 1) % variants.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Language, SpeedPreset};

    #[test]
    fn cycle_wraps_through_all_variants() {
        assert_eq!(cycle(SpeedPreset::Slow), SpeedPreset::Normal);
        assert_eq!(cycle(SpeedPreset::Fast), SpeedPreset::Slow);
        assert_eq!(cycle(Language::Ar), Language::En);
    }
}
