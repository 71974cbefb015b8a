#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Tile symbol in the default rendering
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Player> {
        match symbol {
            'X' => Some(Player::Human),
            'O' => Some(Player::Computer),
            _ => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "player",
            Player::Computer => "computer",
        }
    }
}
