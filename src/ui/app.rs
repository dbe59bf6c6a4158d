use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use eframe::egui;
use tracing::debug;

use crate::engine::client::HttpGameServer;
use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::cycle::StoryCycle;
use crate::model::typing::{TickOutcome, TypingTask};
use crate::model::wizard::WizardStatus;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;
use crate::ui::{choices_panel, options_panel, status_panel, story_panel};

/* =========================
   Phases
   ========================= */

/// Where the UI is in the story cycle. One phase at a time; a new cycle
/// always goes through Streaming → Typing → Choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start button visible, nothing running.
    Title,
    /// `/start_game` in flight.
    Starting,
    /// Story stream in flight; loading indicator shown.
    Streaming,
    /// Typing animation running.
    Typing,
    /// Waiting for or showing choices.
    Choosing,
    /// The wizard has perished; Start button returns.
    GameOver,
}

/* =========================
   UI State
   ========================= */

pub struct UiState {
    pub phase: Phase,
    pub status: Option<WizardStatus>,
    /// Fully typed story text, shown once the animation has finished.
    pub story: String,
    pub choices: Vec<String>,
    /// Dim one-liner for failures and the game-over message.
    pub notice: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            phase: Phase::Title,
            status: None,
            story: String::new(),
            choices: Vec::new(),
            notice: None,
        }
    }
}

/* =========================
   App
   ========================= */

pub struct App {
    pub ui: UiState,
    pub settings: UiSettings,
    pub settings_dirty: bool,

    cycle: Option<StoryCycle>,
    typing: Option<TypingTask>,
    next_cycle_id: u64,
    /// Choices on screen when the current cycle started, restored if the
    /// story request fails so the player is never stranded.
    prior_choices: Vec<String>,

    cmd_tx: Sender<EngineCommand>,
    resp_rx: Receiver<EngineResponse>,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let settings = settings_io::load_settings();

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let server = HttpGameServer::new(
            &settings.server_url,
            Duration::from_secs(settings.request_timeout_secs),
        )?;

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, server);
            engine.run();
        });

        Ok(Self::with_parts(settings, cmd_tx, resp_rx))
    }

    fn with_parts(
        settings: UiSettings,
        cmd_tx: Sender<EngineCommand>,
        resp_rx: Receiver<EngineResponse>,
    ) -> Self {
        Self {
            ui: UiState::default(),
            settings,
            settings_dirty: false,
            cycle: None,
            typing: None,
            next_cycle_id: 0,
            prior_choices: Vec::new(),
            cmd_tx,
            resp_rx,
        }
    }

    fn send(&self, cmd: EngineCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /* ----- user actions ----- */

    pub fn start_game(&mut self) {
        self.ui.phase = Phase::Starting;
        self.ui.notice = None;
        self.ui.status = None;
        self.send(EngineCommand::StartGame);
    }

    /// Player clicked the choice at `index`; its position in the list is
    /// exactly what the server gets back.
    pub fn choose(&mut self, index: usize) {
        self.begin_story_cycle(index as i32);
    }

    fn begin_story_cycle(&mut self, choice: i32) {
        self.ui.story.clear();
        self.ui.notice = None;
        self.prior_choices = std::mem::take(&mut self.ui.choices);
        self.typing = None;

        self.next_cycle_id += 1;
        let id = self.next_cycle_id;
        self.cycle = Some(StoryCycle::new(id));
        self.ui.phase = Phase::Streaming;

        self.send(EngineCommand::RequestStory { cycle: id, choice });
    }

    /* ----- engine responses ----- */

    fn handle_response(&mut self, resp: EngineResponse, now: Instant) {
        match resp {
            EngineResponse::GameStarted => {
                self.send(EngineCommand::RefreshStatus);
                self.begin_story_cycle(-1);
            }

            EngineResponse::StartFailed => {
                self.ui.phase = Phase::Title;
                self.ui.notice = Some("The journey could not begin. Is the server awake?".into());
            }

            EngineResponse::Status(status) => {
                let game_over = status.game_over;
                self.ui.status = Some(status);
                if game_over {
                    self.ui.phase = Phase::GameOver;
                    self.ui.choices.clear();
                    // Drop anything in flight so a late StoryDone cannot
                    // pull the UI back out of the perished screen. Text
                    // already typed stays on screen.
                    self.cycle = None;
                    if let Some(task) = self.typing.take() {
                        self.ui.story = task.revealed().to_string();
                    }
                    self.ui.notice = Some("The wizard has perished.".into());
                }
            }

            EngineResponse::StoryChunk { cycle, text } => match &mut self.cycle {
                Some(current) if current.id == cycle => current.append(&text),
                _ => debug!("dropping chunk from stale cycle {cycle}"),
            },

            EngineResponse::StoryDone { cycle } => {
                let Some(current) = &self.cycle else { return };
                if current.id != cycle {
                    debug!("dropping completion of stale cycle {cycle}");
                    return;
                }
                let interval = Duration::from_millis(self.settings.typing_interval_ms);
                self.typing = Some(TypingTask::new(current.text(), interval, now));
                self.ui.phase = Phase::Typing;
            }

            EngineResponse::StoryFailed { cycle } => {
                let Some(current) = &self.cycle else { return };
                if current.id != cycle {
                    return;
                }
                self.cycle = None;
                self.ui.notice = Some("The story faltered. Try again.".into());
                if self.ui.status.is_none() {
                    // Nothing has loaded yet; fall back to the Start button.
                    self.ui.phase = Phase::Title;
                } else {
                    self.ui.choices = std::mem::take(&mut self.prior_choices);
                    self.ui.phase = Phase::Choosing;
                }
            }

            EngineResponse::Choices(labels) => {
                if self.ui.phase == Phase::Choosing {
                    self.ui.choices = labels;
                }
            }
        }
    }

    /* ----- typing ----- */

    /// Advance the typing animation; returns how long until the next
    /// character is due, for repaint scheduling.
    fn tick_typing(&mut self, now: Instant) -> Option<Duration> {
        if self.ui.phase != Phase::Typing {
            return None;
        }
        let task = self.typing.as_mut()?;

        match task.tick(now) {
            TickOutcome::Finished => {
                if let Some(cycle) = self.cycle.take() {
                    self.ui.story = cycle.text().to_string();
                }
                self.typing = None;
                self.ui.phase = Phase::Choosing;
                // Choices and status only after the full text has typed out.
                self.send(EngineCommand::FetchChoices);
                self.send(EngineCommand::RefreshStatus);
                None
            }
            _ => Some(task.time_until_due(now)),
        }
    }

    /// Text for the story area right now: partial while typing, full after.
    pub fn story_display(&self) -> &str {
        match &self.typing {
            Some(task) => task.revealed(),
            None => &self.ui.story,
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        let now = Instant::now();

        let mut batch = Vec::new();
        while let Ok(resp) = self.resp_rx.try_recv() {
            batch.push(resp);
        }
        for resp in batch {
            self.handle_response(resp, now);
        }

        let next_char_due = self.tick_typing(now);

        options_panel::draw(ctx, self);
        status_panel::draw(ctx, &self.ui);
        choices_panel::draw(ctx, self);
        story_panel::draw(ctx, self);

        if self.settings_dirty {
            settings_io::save_settings(&self.settings);
            self.settings_dirty = false;
        }

        // mpsc responses do not wake egui on their own; keep polling while
        // anything is in flight, and tick on character cadence while typing.
        match self.ui.phase {
            Phase::Typing => {
                let due = next_char_due.unwrap_or(Duration::ZERO);
                ctx.request_repaint_after(due.max(Duration::from_millis(1)));
            }
            Phase::Starting | Phase::Streaming | Phase::Choosing => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            Phase::Title | Phase::GameOver => {}
        }
    }
}
