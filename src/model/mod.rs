pub mod bet;
pub mod game;

pub use bet::{Bet, BetType};
pub use game::{Game, GamesDocument};

use serde::{Deserialize, Serialize};

/// Error body the API sends alongside a non-2xx status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
