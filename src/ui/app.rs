use crate::ai::Agent;
use crate::error::{IllegalMoveError, RoundError};
use crate::game::{Placement, Round, RoundState, COLS};
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::RngCore;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App<A, R> {
    session: Session<A, R>,
    round: Round,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl<A: Agent, R: RngCore> App<A, R> {
    pub fn new(mut session: Session<A, R>) -> Self {
        let round = session.start_round();
        let mut app = App {
            session,
            round,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        };
        app.computer_turn();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_tile();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_tile();
            }
            KeyCode::Char('r') => {
                self.round = self.session.start_round();
                self.selected_column = COLS / 2;
                self.message = Some("New round started!".to_string());
                self.computer_turn();
            }
            _ => {}
        }
    }

    /// Drop the player's tile in the selected column, then let the computer reply
    fn drop_tile(&mut self) {
        if self.round.is_over() {
            self.message = Some("Round over! Press 'r' to play again.".to_string());
            return;
        }

        match self.round.play(self.selected_column) {
            Ok(placement) => {
                if !self.finish_if_over(placement) {
                    self.computer_turn();
                }
            }
            Err(RoundError::IllegalMove(IllegalMoveError::ColumnFull(_))) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(RoundError::IllegalMove(IllegalMoveError::ColumnOutOfRange(_))) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(RoundError::RoundOver) => {
                self.message = Some("Round is over!".to_string());
            }
            Err(err @ RoundError::NoColumnChosen) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn computer_turn(&mut self) {
        match self.session.computer_move(&mut self.round) {
            Ok(Some(placement)) => {
                self.finish_if_over(placement);
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("computer could not move: {err}");
                self.message = Some(format!("Computer could not move: {err}"));
            }
        }
    }

    /// Record a finished round; returns whether it is over
    fn finish_if_over(&mut self, placement: Placement) -> bool {
        if !placement.state.is_terminal() {
            return false;
        }
        self.session.record(placement.state);
        self.message = Some(
            match placement.state {
                RoundState::PlayerWon => "You win!",
                RoundState::ComputerWon => "The computer wins!",
                _ => "It's a tie!",
            }
            .to_string(),
        );
        true
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.round,
            self.selected_column,
            &self.message,
            &self.session.scoreboard(),
            self.session.agent_name(),
        );
    }
}
