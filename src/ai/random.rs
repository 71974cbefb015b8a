use rand::seq::IndexedRandom;
use rand::RngCore;

use super::agent::Agent;
use crate::game::Board;

/// An agent that selects uniformly at random from legal columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board, rng: &mut dyn RngCore) -> Option<usize> {
        board.legal_columns().choose(rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, Round, COLS, ROWS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_agent_selects_legal_column() {
        let mut agent = RandomAgent::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place(2, Player::Human).unwrap();
        }
        let legal = board.legal_columns();

        for _ in 0..200 {
            let col = agent.select_column(&board, &mut rng).unwrap();
            assert!(legal.contains(&col), "column {} is not legal", col);
        }
    }

    #[test]
    fn test_random_agent_covers_every_legal_column() {
        let mut agent = RandomAgent::new();
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::new();
        let mut seen = [false; COLS];
        for _ in 0..500 {
            seen[agent.select_column(&board, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_agent_is_deterministic_for_a_seed() {
        let board = Board::new();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| RandomAgent.select_column(&board, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn test_random_agent_on_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place(col, Player::Computer).unwrap();
            }
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(RandomAgent.select_column(&board, &mut rng), None);
    }

    #[test]
    fn test_random_agents_play_full_round() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut agent = RandomAgent::new();
        let mut round = Round::new(Player::Human);

        while !round.is_over() {
            let col = agent.select_column(round.board(), &mut rng).unwrap();
            round.play(col).unwrap();
        }

        assert!(round.state().is_terminal());
    }

    #[test]
    fn test_random_agent_name() {
        assert_eq!(RandomAgent::new().name(), "Random");
    }
}
