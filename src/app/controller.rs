use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::info;

use crate::{
    domain::{RemovePolicy, RosterProfile},
    form::{CommandEffect, RosterCommand, RosterState, RowSeed, apply_command},
    presentation::{self, UiContext},
    submit,
};

use super::{
    keymap::{AppCommand, help_text, route_key},
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

/// Final state handed back when the user accepts the edit session.
#[derive(Debug)]
pub struct RosterOutcome {
    pub roster: RosterState,
}

impl RosterOutcome {
    pub fn submission_pairs(&self) -> Vec<(String, String)> {
        submit::submission_pairs(&self.roster)
    }

    pub fn urlencoded_body(&self) -> String {
        submit::urlencoded_body(&self.roster)
    }

    pub fn json(&self) -> serde_json::Value {
        submit::roster_json(&self.roster)
    }
}

/// Interactive roster editor. Build one, optionally seed it, then `run()`.
#[derive(Debug)]
pub struct RosterUI {
    roster: RosterState,
    title: String,
    description: Option<String>,
    options: UiOptions,
}

impl RosterUI {
    pub fn new(profile: RosterProfile) -> Self {
        Self {
            roster: RosterState::new(profile),
            title: "Mailing list".to_string(),
            description: None,
            options: UiOptions::default(),
        }
    }

    pub fn from_state(roster: RosterState) -> Self {
        Self {
            roster,
            title: "Mailing list".to_string(),
            description: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn seed_rows(mut self, seeds: Vec<RowSeed>) -> Self {
        self.roster.seed_rows(seeds);
        self
    }

    /// Run the editor. `Ok(Some(..))` when the user accepted with Ctrl+S,
    /// `Ok(None)` when they quit without accepting.
    pub fn run(self) -> Result<Option<RosterOutcome>> {
        let RosterUI {
            roster,
            title,
            description,
            options,
        } = self;
        let mut app = App::new(roster, title, description, options);
        let mut terminal = TerminalGuard::new()?;
        let outcome = app.run(&mut terminal);
        drop(terminal);
        outcome
    }
}

struct App {
    roster: RosterState,
    title: String,
    description: Option<String>,
    options: UiOptions,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
    accepted: bool,
}

impl App {
    fn new(
        roster: RosterState,
        title: String,
        description: Option<String>,
        options: UiOptions,
    ) -> Self {
        Self {
            roster,
            title,
            description,
            options,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
            accepted: false,
        }
    }

    fn run(&mut self, terminal: &mut TerminalGuard) -> Result<Option<RosterOutcome>> {
        while !self.should_quit {
            self.draw(terminal)?;
            if event::poll(self.options.tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }
        if self.accepted {
            info!(
                "roster accepted: {} row(s), counter {}",
                self.roster.row_count(),
                self.roster.total_forms()
            );
            let mut roster = self.roster.clone();
            roster.mark_clean();
            Ok(Some(RosterOutcome { roster }))
        } else {
            Ok(None)
        }
    }

    fn draw(&mut self, terminal: &mut TerminalGuard) -> Result<()> {
        let warning = self
            .roster
            .duplicate_address()
            .map(|address| format!("duplicate address {address}"));
        let help = self
            .options
            .show_help
            .then(|| help_text(self.roster.focus()));
        let ctx = UiContext {
            roster: &self.roster,
            title: &self.title,
            description: self.description.as_deref(),
            status_message: self.status.message(),
            help,
            warning: warning.as_deref(),
        };
        terminal.draw(|frame| presentation::draw(frame, ctx))?;
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match route_key(&key) {
            AppCommand::Accept => {
                self.accepted = true;
                self.should_quit = true;
            }
            AppCommand::Quit => {
                if self.options.confirm_exit && self.roster.is_dirty() && !self.exit_armed {
                    self.exit_armed = true;
                    self.status.pending_exit();
                } else {
                    self.should_quit = true;
                }
            }
            AppCommand::Roster(command) => {
                self.exit_armed = false;
                match apply_command(&mut self.roster, command) {
                    CommandEffect::RowAdded(index) => self.status.row_added(index),
                    CommandEffect::RowRemoved => {
                        match self.roster.profile().remove_policy {
                            RemovePolicy::Detach => {
                                self.status.row_detached(self.roster.visible_len());
                            }
                            RemovePolicy::MarkDeleted => {
                                self.status
                                    .row_marked_deleted(self.roster.pending_deletions());
                            }
                        }
                    }
                    CommandEffect::Nothing => {
                        if matches!(command, RosterCommand::RemoveRow) {
                            self.status.nothing_to_remove();
                        }
                    }
                    CommandEffect::SelectionMoved | CommandEffect::FocusMoved => {
                        self.status.ready();
                    }
                }
            }
            AppCommand::Edit => {
                if self.roster.handle_key(&key) {
                    self.exit_armed = false;
                }
            }
        }
    }
}
