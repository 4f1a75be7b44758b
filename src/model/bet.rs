use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub id: i64,
    // Field name as sent by the server
    pub choosen_numbers: String,
    pub price: f64,
    pub created_at: String,
    #[serde(rename = "type")]
    pub type_field: BetType,
}

/// The game a bet was placed on, as embedded in the bet record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BetType {
    pub id: i64,
    #[serde(rename = "type")]
    pub type_field: String,
}
