//! Core types shared across the application
//!
//! Pure data types with no external dependencies, usable in any context
//! (core logic, UI rendering, tests).

/// The three playable moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in display order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Parse a move from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rock" | "r" => Some(Move::Rock),
            "paper" | "p" => Some(Move::Paper),
            "scissors" | "s" => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

/// The two seats at the shared device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Display label ("Player 1" / "Player 2").
    pub fn label(&self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Which step of a round is currently active.
///
/// `ShowingResult` is terminal until an explicit reset returns the round to
/// `AwaitingPlayerOne`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    AwaitingPlayerOne,
    AwaitingPlayerTwo,
    ShowingResult,
}

impl TurnPhase {
    /// The player whose move is expected, if any.
    pub fn awaiting(&self) -> Option<Player> {
        match self {
            TurnPhase::AwaitingPlayerOne => Some(Player::One),
            TurnPhase::AwaitingPlayerTwo => Some(Player::Two),
            TurnPhase::ShowingResult => None,
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Record a move for whichever player is up.
    Select(Move),
    /// Clear the round, keep the score ("Play Again").
    ResetRound,
    /// Clear the round and zero the score ("New Game").
    ResetGame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_string_round_trip() {
        for mv in Move::ALL {
            assert_eq!(Move::from_str(mv.as_str()), Some(mv));
        }
        assert_eq!(Move::from_str("ROCK"), Some(Move::Rock));
        assert_eq!(Move::from_str("x"), None);
    }

    #[test]
    fn test_move_shorthand() {
        assert_eq!(Move::from_str("r"), Some(Move::Rock));
        assert_eq!(Move::from_str("p"), Some(Move::Paper));
        assert_eq!(Move::from_str("s"), Some(Move::Scissors));
    }

    #[test]
    fn test_phase_awaiting() {
        assert_eq!(TurnPhase::AwaitingPlayerOne.awaiting(), Some(Player::One));
        assert_eq!(TurnPhase::AwaitingPlayerTwo.awaiting(), Some(Player::Two));
        assert_eq!(TurnPhase::ShowingResult.awaiting(), None);
    }

    #[test]
    fn test_player_labels() {
        assert_eq!(Player::One.label(), "Player 1");
        assert_eq!(Player::Two.label(), "Player 2");
    }
}
