use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Invalid suit: {0}")]
    InvalidSuit(String),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Hand notation is defined for exactly 2 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("Cannot deal {requested} distinct cards from a {deck}-card deck")]
    InvalidDealCount { requested: usize, deck: usize },

    #[error("No range data for position: {0}")]
    PositionNotFound(String),

    #[error("Failed to read range file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed range file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DrillResult<T> = Result<T, DrillError>;
