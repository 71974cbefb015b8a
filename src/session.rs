//! A sequence of rounds against the computer: who opens each round, the
//! computer's turns, and the running score.

use std::fmt;

use rand::{Rng, RngCore};

use crate::ai::Agent;
use crate::error::RoundError;
use crate::game::{Placement, Player, Round, RoundState};

/// Policy for choosing who opens a round.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// Fair coin flip every round
    #[default]
    #[serde(rename = "coin")]
    #[value(name = "coin")]
    CoinFlip,
    #[value(name = "player")]
    Player,
    #[value(name = "computer")]
    Computer,
}

impl FirstMover {
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> Player {
        match self {
            FirstMover::CoinFlip => {
                if rng.random_bool(0.5) {
                    Player::Human
                } else {
                    Player::Computer
                }
            }
            FirstMover::Player => Player::Human,
            FirstMover::Computer => Player::Computer,
        }
    }
}

/// Round results for one run of the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn rounds(&self) -> u32 {
        self.player_wins + self.computer_wins + self.draws
    }

    /// Count a finished round; in-progress states are ignored
    pub fn record(&mut self, state: RoundState) {
        match state {
            RoundState::PlayerWon => self.player_wins += 1,
            RoundState::ComputerWon => self.computer_wins += 1,
            RoundState::Draw => self.draws += 1,
            RoundState::InProgress => {}
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player {} / computer {} / draws {}",
            self.player_wins, self.computer_wins, self.draws
        )
    }
}

/// Owns the single random source of a run and lends it to the coin flip and
/// the computer agent.
pub struct Session<A, R> {
    agent: A,
    rng: R,
    first_mover: FirstMover,
    scoreboard: Scoreboard,
}

impl<A: Agent, R: RngCore> Session<A, R> {
    pub fn new(agent: A, rng: R, first_mover: FirstMover) -> Self {
        Session {
            agent,
            rng,
            first_mover,
            scoreboard: Scoreboard::default(),
        }
    }

    /// New empty round with the opener chosen by policy
    pub fn start_round(&mut self) -> Round {
        let first = self.first_mover.pick(&mut self.rng);
        log::info!(
            "round {} starts, {} moves first",
            self.scoreboard.rounds() + 1,
            first.name()
        );
        Round::new(first)
    }

    /// Let the agent play the computer's turn.
    ///
    /// Returns `Ok(None)` when it is not the computer's turn or the round is
    /// already over.
    pub fn computer_move(&mut self, round: &mut Round) -> Result<Option<Placement>, RoundError> {
        if round.is_over() || round.to_move() != Player::Computer {
            return Ok(None);
        }
        match self.agent.select_column(round.board(), &mut self.rng) {
            Some(col) => round.play(col).map(Some),
            None => Err(RoundError::NoColumnChosen),
        }
    }

    /// Add a finished round to the score
    pub fn record(&mut self, state: RoundState) {
        self.scoreboard.record(state);
        if state.is_terminal() {
            log::info!("round over: {:?} ({})", state, self.scoreboard);
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn agent_name(&self) -> &str {
        self.agent.name()
    }
}
