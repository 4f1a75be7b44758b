use serde::{Deserialize, Serialize};

/// A game offered in the catalog. Bets reference it by `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    // Category key, also used as the `type[]` filter on the bets endpoint
    #[serde(rename = "type")]
    pub type_field: String,
    pub color: String,
}

/// Body of `GET /cart_games`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GamesDocument {
    #[serde(default)]
    pub types: Vec<Game>,
}
