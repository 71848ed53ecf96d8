use serde::{Deserialize, Serialize};

/// Per-side outcome as reported by the games archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameResult {
    Win,
    Checkmated,
    Resigned,
    Timeout,
    Abandoned,
    Agreed,
    Repetition,
    Stalemate,
    Insufficient,
    FiftyMove,
    TimeVsInsufficient,
    Lose,
    KingOfTheHill,
    ThreeCheck,
    BughousePartnerLose,
    Other(String),
}

impl GameResult {
    pub fn as_str(&self) -> &str {
        match self {
            GameResult::Win => "win",
            GameResult::Checkmated => "checkmated",
            GameResult::Resigned => "resigned",
            GameResult::Timeout => "timeout",
            GameResult::Abandoned => "abandoned",
            GameResult::Agreed => "agreed",
            GameResult::Repetition => "repetition",
            GameResult::Stalemate => "stalemate",
            GameResult::Insufficient => "insufficient",
            GameResult::FiftyMove => "50move",
            GameResult::TimeVsInsufficient => "timevsinsufficient",
            GameResult::Lose => "lose",
            GameResult::KingOfTheHill => "kingofthehill",
            GameResult::ThreeCheck => "threecheck",
            GameResult::BughousePartnerLose => "bughousepartnerlose",
            GameResult::Other(raw) => raw,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::Win)
    }

    /// Only resignation and checkmate count as losses. Timeouts, abandonment
    /// and every drawn outcome are neither a win nor a loss.
    pub fn is_loss(&self) -> bool {
        matches!(self, GameResult::Checkmated | GameResult::Resigned)
    }
}

impl From<&str> for GameResult {
    fn from(value: &str) -> Self {
        match value {
            "win" => GameResult::Win,
            "checkmated" => GameResult::Checkmated,
            "resigned" => GameResult::Resigned,
            "timeout" => GameResult::Timeout,
            "abandoned" => GameResult::Abandoned,
            "agreed" => GameResult::Agreed,
            "repetition" => GameResult::Repetition,
            "stalemate" => GameResult::Stalemate,
            "insufficient" => GameResult::Insufficient,
            "50move" => GameResult::FiftyMove,
            "timevsinsufficient" => GameResult::TimeVsInsufficient,
            "lose" => GameResult::Lose,
            "kingofthehill" => GameResult::KingOfTheHill,
            "threecheck" => GameResult::ThreeCheck,
            "bughousepartnerlose" => GameResult::BughousePartnerLose,
            other => GameResult::Other(other.to_string()),
        }
    }
}

impl From<String> for GameResult {
    fn from(value: String) -> Self {
        GameResult::from(value.as_str())
    }
}

impl From<GameResult> for String {
    fn from(result: GameResult) -> Self {
        result.as_str().to_string()
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

/// One side of a game as it arrives from the provider.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPlayer {
    pub username: Option<String>,
    pub rating: Option<i32>,
    pub result: Option<String>,
}

/// A game object exactly as the provider's monthly archive returns it.
/// Every field is optional; nothing is checked until normalization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawGame {
    pub url: Option<String>,
    pub pgn: Option<String>,
    pub eco: Option<String>,
    pub eco_url: Option<String>,
    pub white: Option<RawPlayer>,
    pub black: Option<RawPlayer>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub rated: Option<bool>,
    pub time_class: Option<String>,
    pub time_control: Option<String>,
    pub rules: Option<String>,
}

/// Archive response wrapper: `{"games": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGameArchive {
    #[serde(default)]
    pub games: Vec<RawGame>,
}

/// Canonical game shape consumed by the analytics core.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GameRecord {
    pub id: Option<String>,
    pub move_text: Option<String>,
    pub opening_url: Option<String>,
    pub eco_code: Option<String>,
    pub white_username: Option<String>,
    pub black_username: Option<String>,
    pub white_result: Option<GameResult>,
    pub black_result: Option<GameResult>,
    pub white_rating: Option<i32>,
    pub black_rating: Option<i32>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub rated: Option<bool>,
    pub time_class: Option<String>,
}

impl GameRecord {
    pub fn username(&self, side: Side) -> Option<&str> {
        match side {
            Side::White => self.white_username.as_deref(),
            Side::Black => self.black_username.as_deref(),
        }
    }

    pub fn result(&self, side: Side) -> Option<&GameResult> {
        match side {
            Side::White => self.white_result.as_ref(),
            Side::Black => self.black_result.as_ref(),
        }
    }
}
