use crate::config::TableConfig;
use crate::game::{Game, GameError};
use crate::policy::{DecisionPolicy, ScriptedPolicy};
use crate::report::HandReport;
use log::error;

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    NewHand,
    PrevHand,
    NextHand,
    ToggleHelp,
    ToggleLog,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub game: Game,
    pub policy: ScriptedPolicy,
    reports: Vec<HandReport>,
    // Index into `reports` of the hand on screen
    selected: usize,
    help_open: bool,
    log_open: bool,
    last_error: Option<String>,
}

impl AppState {
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        Ok(Self {
            game: Game::new(config)?,
            policy: ScriptedPolicy::default(),
            reports: Vec::new(),
            selected: 0,
            help_open: false,
            log_open: false,
            last_error: None,
        })
    }

    pub fn reports(&self) -> &[HandReport] {
        &self.reports
    }

    /// The hand currently on screen, if any has been dealt.
    pub fn selected_report(&self) -> Option<&HandReport> {
        self.reports.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn viewing_latest(&self) -> bool {
        self.selected + 1 >= self.reports.len()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn log_open(&self) -> bool {
        self.log_open
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    fn deal(&mut self) -> bool {
        match self.game.play_hand(&mut self.policy) {
            Ok(report) => {
                self.reports.push(report);
                self.selected = self.reports.len() - 1;
                self.last_error = None;
                true
            }
            Err(e) => {
                error!("hand failed: {e}");
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// Apply one input; returns whether anything changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.log_open = false;
                self.help_open = !self.help_open;
                true
            }
            InputAction::ToggleLog => {
                self.help_open = false;
                self.log_open = !self.log_open;
                true
            }
            InputAction::NewHand => self.deal(),
            InputAction::PrevHand => {
                if self.selected == 0 {
                    return false;
                }
                self.selected -= 1;
                true
            }
            InputAction::NextHand => {
                if self.viewing_latest() {
                    return false;
                }
                self.selected += 1;
                true
            }
        }
    }
}
