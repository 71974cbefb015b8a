//! Line-oriented front end: prints the board, prompts for 1-indexed columns,
//! and asks to play again after each round.

use std::io::{self, BufRead, Write};

use rand::RngCore;

use crate::ai::Agent;
use crate::config::DisplayConfig;
use crate::game::{Board, Cell, Player, Round, RoundState, COLS};
use crate::session::{Scoreboard, Session};

/// Render the board with a 1-indexed column header, each symbol followed by
/// a space.
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::from("Game board:\n");
    for col in 0..COLS {
        out.push_str(&format!("{} ", col + 1));
    }
    out.push('\n');

    for (row, col) in Board::positions() {
        let symbol = match board.slot_at(row, col) {
            Some(Cell::Occupied(Player::Human)) => display.player,
            Some(Cell::Occupied(Player::Computer)) => display.computer,
            _ => display.empty,
        };
        out.push(symbol);
        out.push(' ');
        if col == COLS - 1 {
            out.push('\n');
        }
    }
    out
}

pub fn result_message(state: RoundState) -> &'static str {
    match state {
        RoundState::PlayerWon => "The player won!",
        RoundState::ComputerWon => "The computer won!",
        RoundState::Draw | RoundState::InProgress => "Tie!",
    }
}

pub struct Console<I, O> {
    input: I,
    output: O,
    display: DisplayConfig,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O, display: DisplayConfig) -> Self {
        Console {
            input,
            output,
            display,
        }
    }

    /// Play rounds until the user declines another or input runs out.
    pub fn run<A: Agent, R: RngCore>(
        &mut self,
        session: &mut Session<A, R>,
    ) -> io::Result<Scoreboard> {
        loop {
            if self.play_round(session)?.is_none() {
                break;
            }
            if !self.ask_play_again()? {
                break;
            }
        }
        Ok(session.scoreboard())
    }

    /// Play one round to the end. `None` means input ended mid-round.
    pub fn play_round<A: Agent, R: RngCore>(
        &mut self,
        session: &mut Session<A, R>,
    ) -> io::Result<Option<RoundState>> {
        let mut round = session.start_round();

        while !round.is_over() {
            match round.to_move() {
                Player::Human => {
                    if !self.player_turn(&mut round)? {
                        return Ok(None);
                    }
                }
                Player::Computer => {
                    session.computer_move(&mut round).map_err(io::Error::other)?;
                }
            }
        }

        let state = round.state();
        session.record(state);
        self.print_board(round.board())?;
        writeln!(self.output, "{}", result_message(state))?;
        Ok(Some(state))
    }

    /// Show the board and play the column the user picks; false on end of input
    fn player_turn(&mut self, round: &mut Round) -> io::Result<bool> {
        self.print_board(round.board())?;
        match self.prompt_column(round.board())? {
            Some(col) => {
                round.play(col).map_err(io::Error::other)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Ask until the user names a legal column; returns it 0-indexed
    pub fn prompt_column(&mut self, board: &Board) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "What column would you like to select? (1-7): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let col = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .filter(|&col| board.is_legal_move(col));

            match col {
                Some(col) => return Ok(Some(col)),
                None => writeln!(self.output, "Error: Invalid placement!")?,
            }
        }
    }

    /// Ask until the answer is exactly `Y` or `N`; end of input counts as `N`
    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "Do you want to play again? (Y/N): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match line.trim() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => writeln!(self.output, "Error: Invalid input!")?,
            }
        }
    }

    fn print_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", render_board(board, &self.display))
    }

    /// Next input line, or `None` at end of input. Bytes that are not UTF-8
    /// become replacement characters, so they fail validation like any other
    /// bad answer.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
