use crate::clipboard::ShareTarget;
use crate::config::Config;
use crate::lifecycle::{LifecycleEvent, LifecycleStage, LifecycleTracker, LogObserver};
use crate::state::DiceStore;

/// Ticks a status message stays visible (~3s at the default tick rate).
const STATUS_TICKS: u8 = 12;

/// The transient dice screen.
///
/// Created on navigation and destroyed on leave; the dice store it
/// renders lives in [`App`] and survives it.
pub struct DiceScreen {
    lifecycle: LifecycleTracker,
}

impl DiceScreen {
    fn enter(store: &mut DiceStore, roll_on_entry: bool) -> Self {
        let mut lifecycle = LifecycleTracker::new();
        lifecycle.observe(LogObserver);
        lifecycle.emit(LifecycleEvent::Created);

        let had_prior_session = store.was_session_active_before();
        if roll_on_entry {
            store.restore_or_initialize(had_prior_session);
        } else {
            store.mark_session_active();
        }

        lifecycle.emit(LifecycleEvent::Started);
        lifecycle.emit(LifecycleEvent::Resumed);
        Self { lifecycle }
    }

    fn leave(&mut self) {
        self.lifecycle.emit(LifecycleEvent::Paused);
        self.lifecycle.emit(LifecycleEvent::Stopped);
        self.lifecycle.emit(LifecycleEvent::Destroyed);
    }

    pub fn stage(&self) -> LifecycleStage {
        self.lifecycle.stage()
    }
}

/// Which screen is showing.
pub enum Screen {
    Home,
    Dice(DiceScreen),
}

struct StatusLine {
    text: String,
    ok: bool,
    ticks_left: u8,
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    store: DiceStore,
    config: Config,
    share: Option<ShareTarget>,
    status: Option<StatusLine>,
}

impl App {
    /// Build the app around a session-owned store.
    pub fn new(store: DiceStore, config: Config, share: Option<ShareTarget>) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Home,
            store,
            config,
            share,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        if let Screen::Dice(screen) = &mut self.screen {
            screen.leave();
        }
        self.should_quit = true;
    }

    pub fn store(&self) -> &DiceStore {
        &self.store
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn on_dice_screen(&self) -> bool {
        matches!(self.screen, Screen::Dice(_))
    }

    /// Navigate Home → Dice. No-op if already there.
    pub fn open_dice_screen(&mut self) {
        if self.on_dice_screen() {
            return;
        }
        let screen = DiceScreen::enter(&mut self.store, self.config.ui.roll_on_entry);
        self.screen = Screen::Dice(screen);
    }

    /// Navigate Dice → Home, tearing the screen down. The store keeps
    /// its state for the next visit.
    pub fn close_dice_screen(&mut self) {
        if let Screen::Dice(mut screen) = std::mem::replace(&mut self.screen, Screen::Home) {
            screen.leave();
        }
    }

    /// Roll the dice (dice screen only).
    pub fn roll(&mut self) {
        if self.on_dice_screen() {
            self.store.roll();
        }
    }

    /// Hand the current result to the share target.
    pub fn share_result(&mut self) {
        let text = self.store.share_text(&self.config.share.prefix);
        match &mut self.share {
            Some(target) => match target.share(&text) {
                Ok(()) => self.set_status("Result copied to clipboard", true),
                Err(err) => {
                    tracing::warn!(error = %err, "share failed");
                    self.set_status(&err, false);
                }
            },
            None => self.set_status("Clipboard unavailable", false),
        }
    }

    pub fn status(&self) -> Option<(&str, bool)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.ok))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    fn set_status(&mut self, text: &str, ok: bool) {
        self.status = Some(StatusLine {
            text: text.to_string(),
            ok,
            ticks_left: STATUS_TICKS,
        });
    }
}
