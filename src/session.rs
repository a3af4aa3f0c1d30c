//! Game session controller.
//!
//! Owns every piece of mutable game state and runs the per-tick sequence:
//! input → spawn → motion/collision → scoring → render request.  Nothing
//! here touches the terminal; each operation returns the `Effect`s the host
//! should carry out.
//!
//! The loop is a chain of `TickTicket`s.  A tick only runs when it presents
//! the ticket the session last handed out, and pausing, ending or restarting
//! voids that ticket.  Control operations outside their valid phases are
//! silent no-ops that return no effects.

use rand::Rng;

use crate::clock::TickTicket;
use crate::compute;
use crate::config::{ConfigError, GameConfig};
use crate::entities::{
    Basket, CatchEvent, Expression, FallingItem, Outcome, SessionPhase,
};
use crate::score::{self, Scoreboard};
use crate::spawn::SpawnController;

pub use crate::compute::InputSnapshot;

pub const PAUSED_MESSAGE: &str = "Paused";

/// Which controls the UI surface should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlsView {
    /// Start screen; score board hidden
    StartScreen,
    /// Score board and pause control
    Playing,
    /// Score board and resume control
    Paused,
    /// Score board and restart control
    GameOver,
}

/// A request from the core to its host.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Draw the current basket and items.
    Render,
    /// Show this score.
    Score(i32),
    /// Replace the message line (empty clears it).
    Message(String),
    Controls(ControlsView),
    /// Run `tick` with this ticket on the next frame.
    ScheduleTick(TickTicket),
    GameOver(Outcome),
}

/// Deferred "cheer up" after a catch.  Only fires if the session that
/// scheduled it is still the current, running one.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FeedbackReset {
    due_ms: u64,
    epoch: u64,
}

#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    phase: SessionPhase,
    basket: Basket,
    items: Vec<FallingItem>,
    scoreboard: Scoreboard,
    spawner: SpawnController,
    message: String,
    epoch: u64,
    next_seq: u64,
    pending_tick: Option<TickTicket>,
    feedback_reset: Option<FeedbackReset>,
}

fn initial_basket(config: &GameConfig) -> Basket {
    Basket {
        x: config.basket_start_x(),
        y: config.basket_y(),
        width: config.basket_width,
        height: config.basket_height,
        expression: Expression::Happy,
    }
}

impl Session {
    /// Build a session in `NotStarted`.  The config is validated first so
    /// no later operation can trip over an out-of-range value.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            basket: initial_basket(&config),
            spawner: SpawnController::new(config.spawn_interval_ms, 0),
            config,
            phase: SessionPhase::NotStarted,
            items: Vec::new(),
            scoreboard: Scoreboard::new(),
            message: String::new(),
            epoch: 0,
            next_seq: 0,
            pending_tick: None,
            feedback_reset: None,
        })
    }

    // ── Observables ──────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> i32 {
        self.scoreboard.score
    }

    pub fn outcome(&self) -> Outcome {
        self.scoreboard.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn items(&self) -> &[FallingItem] {
        &self.items
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The ticket the next tick must present, if the loop is live.
    pub fn pending_tick(&self) -> Option<TickTicket> {
        self.pending_tick
    }

    pub fn is_looping(&self) -> bool {
        self.pending_tick.is_some()
    }

    // ── Control plane ────────────────────────────────────────────────────────

    pub fn start_game(&mut self, now_ms: u64) -> Vec<Effect> {
        if !matches!(self.phase, SessionPhase::NotStarted | SessionPhase::Ended) {
            log::debug!("start ignored in {:?}", self.phase);
            return Vec::new();
        }

        self.epoch += 1;
        self.scoreboard = Scoreboard::new();
        self.items.clear();
        self.basket = initial_basket(&self.config);
        self.message.clear();
        self.spawner.reset(now_ms);
        self.feedback_reset = None;
        self.phase = SessionPhase::Running;
        log::info!("session {} started", self.epoch);

        let ticket = self.issue_ticket();
        vec![
            Effect::Controls(ControlsView::Playing),
            Effect::Score(0),
            Effect::Message(String::new()),
            Effect::ScheduleTick(ticket),
        ]
    }

    /// Toggle between running and paused.  The spawn timer keeps counting
    /// through a pause.
    pub fn pause_game(&mut self) -> Vec<Effect> {
        match self.phase {
            SessionPhase::Running => {
                self.pending_tick = None;
                self.phase = SessionPhase::Paused;
                self.message = PAUSED_MESSAGE.to_string();
                log::info!("session {} paused", self.epoch);
                vec![
                    Effect::Controls(ControlsView::Paused),
                    Effect::Message(self.message.clone()),
                ]
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Running;
                self.message.clear();
                log::info!("session {} resumed", self.epoch);
                let ticket = self.issue_ticket();
                vec![
                    Effect::Controls(ControlsView::Playing),
                    Effect::Message(String::new()),
                    Effect::ScheduleTick(ticket),
                ]
            }
            _ => {
                log::debug!("pause ignored in {:?}", self.phase);
                Vec::new()
            }
        }
    }

    /// Back to the start screen from anywhere.  Does not start a new game.
    pub fn restart_game(&mut self) -> Vec<Effect> {
        self.pending_tick = None;
        self.epoch += 1;
        self.phase = SessionPhase::NotStarted;
        self.items.clear();
        self.feedback_reset = None;
        self.message.clear();
        log::info!("restart: back to start screen");
        vec![
            Effect::Controls(ControlsView::StartScreen),
            Effect::Message(String::new()),
        ]
    }

    // ── Simulation ───────────────────────────────────────────────────────────

    /// Run one tick.  Stale or unexpected tickets are ignored.
    pub fn tick(
        &mut self,
        ticket: TickTicket,
        now_ms: u64,
        input: InputSnapshot,
        rng: &mut impl Rng,
    ) -> Vec<Effect> {
        if self.phase != SessionPhase::Running || self.pending_tick != Some(ticket) {
            log::debug!("stale tick {:?} ignored in {:?}", ticket, self.phase);
            return Vec::new();
        }
        self.pending_tick = None;

        let mut effects = Vec::new();
        self.fire_feedback_reset(now_ms, &mut effects);

        compute::move_basket(&mut self.basket, input, &self.config);

        if let Some(item) = self.spawner.maybe_spawn(now_ms, &self.config, rng) {
            self.items.push(item);
        }

        let report = compute::step_items(&mut self.items, &self.basket, &self.config);
        if report.missed > 0 {
            log::debug!("{} item(s) missed", report.missed);
        }
        for event in report.caught {
            self.handle_catch(event, now_ms, &mut effects);
            if self.phase != SessionPhase::Running {
                // Game over: no render, loop stays halted.
                return effects;
            }
        }

        effects.push(Effect::Render);
        let next = self.issue_ticket();
        effects.push(Effect::ScheduleTick(next));
        effects
    }

    /// Feed a catch event straight to the score machine, as the collision
    /// step does.  Ignored unless running.
    pub fn inject_catch(&mut self, event: CatchEvent, now_ms: u64) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.phase != SessionPhase::Running {
            log::debug!("catch ignored in {:?}", self.phase);
            return effects;
        }
        self.handle_catch(event, now_ms, &mut effects);
        effects
    }

    fn handle_catch(&mut self, event: CatchEvent, now_ms: u64, effects: &mut Vec<Effect>) {
        let Some(result) = self.scoreboard.apply_catch(event, &self.config) else {
            return;
        };
        log::debug!("caught {:?} {:?}: {:+} -> {}", event.freshness, event.kind, result.delta, result.score);

        self.basket.expression = result.expression;
        self.message = result.message;
        effects.push(Effect::Score(result.score));
        effects.push(Effect::Message(self.message.clone()));

        if result.outcome.is_terminal() {
            self.game_over(result.outcome, effects);
        } else {
            self.feedback_reset = Some(FeedbackReset {
                due_ms: now_ms.saturating_add(self.config.feedback_reset_ms),
                epoch: self.epoch,
            });
        }
    }

    fn game_over(&mut self, outcome: Outcome, effects: &mut Vec<Effect>) {
        self.pending_tick = None;
        self.phase = SessionPhase::Ended;
        self.items.clear();
        self.feedback_reset = None;
        self.epoch += 1;
        self.message = score::outcome_message(outcome).to_string();
        log::info!("game over: {:?} with score {}", outcome, self.scoreboard.score);

        effects.push(Effect::Message(self.message.clone()));
        effects.push(Effect::Controls(ControlsView::GameOver));
        effects.push(Effect::GameOver(outcome));
    }

    fn fire_feedback_reset(&mut self, now_ms: u64, effects: &mut Vec<Effect>) {
        let Some(reset) = self.feedback_reset else {
            return;
        };
        if now_ms < reset.due_ms {
            return;
        }
        self.feedback_reset = None;
        if reset.epoch != self.epoch || self.phase != SessionPhase::Running {
            return;
        }
        self.basket.expression = Expression::Happy;
        self.message.clear();
        effects.push(Effect::Message(String::new()));
    }

    fn issue_ticket(&mut self) -> TickTicket {
        self.next_seq += 1;
        let ticket = TickTicket {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.pending_tick = Some(ticket);
        ticket
    }
}
