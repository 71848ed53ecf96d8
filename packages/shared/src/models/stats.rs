use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Time-control category a rating belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Blitz,
    Bullet,
    Rapid,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Blitz, Mode::Bullet, Mode::Rapid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Blitz => "blitz",
            Mode::Bullet => "bullet",
            Mode::Rapid => "rapid",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blitz" => Ok(Mode::Blitz),
            "bullet" => Ok(Mode::Bullet),
            "rapid" => Ok(Mode::Rapid),
            other => Err(format!("Unknown mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawRating {
    pub rating: Option<i32>,
    pub date: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawModeStats {
    pub last: Option<RawRating>,
    pub best: Option<RawRating>,
}

/// Player stats document as the provider returns it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawStats {
    pub chess_blitz: Option<RawModeStats>,
    pub chess_bullet: Option<RawModeStats>,
    pub chess_rapid: Option<RawModeStats>,
}

impl RawStats {
    pub fn mode(&self, mode: Mode) -> Option<&RawModeStats> {
        match mode {
            Mode::Blitz => self.chess_blitz.as_ref(),
            Mode::Bullet => self.chess_bullet.as_ref(),
            Mode::Rapid => self.chess_rapid.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RatingPoint {
    pub rating: i32,
    pub observed_at: i64,
}

/// A mode's current rating. `observed_at` is absent when the provider sent
/// no date with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatestRating {
    pub rating: i32,
    pub observed_at: Option<i64>,
}

/// Latest rating per mode. A mode the player has never played is absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StatsSnapshot {
    pub modes: BTreeMap<Mode, LatestRating>,
}

impl StatsSnapshot {
    pub fn get(&self, mode: Mode) -> Option<&LatestRating> {
        self.modes.get(&mode)
    }
}

impl From<&RawStats> for StatsSnapshot {
    fn from(raw: &RawStats) -> Self {
        let modes = Mode::ALL
            .iter()
            .filter_map(|mode| {
                let last = raw.mode(*mode)?.last.as_ref()?;
                // A "last" entry without a rating carries nothing usable.
                let rating = last.rating?;
                Some((
                    *mode,
                    LatestRating {
                        rating,
                        observed_at: last.date,
                    },
                ))
            })
            .collect();

        StatsSnapshot { modes }
    }
}

/// One point of a player's rating time series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RatingObservation {
    pub username: String,
    pub mode: Mode,
    pub rating: i32,
    pub observed_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_raw_stats_keeps_modes_with_last_entry() {
        let raw: RawStats = serde_json::from_str(
            r#"{
                "chess_blitz": {"last": {"rating": 1510, "date": 1700000000, "rd": 45}},
                "chess_bullet": {"best": {"rating": 1800, "date": 1600000000}},
                "fide": 0
            }"#,
        )
        .unwrap();

        let snapshot = StatsSnapshot::from(&raw);

        assert_eq!(
            snapshot.get(Mode::Blitz),
            Some(&LatestRating {
                rating: 1510,
                observed_at: Some(1700000000)
            })
        );
        assert!(snapshot.get(Mode::Bullet).is_none());
        assert!(snapshot.get(Mode::Rapid).is_none());
    }

    #[test]
    fn test_snapshot_keeps_undated_rating_without_a_timestamp() {
        let raw: RawStats =
            serde_json::from_str(r#"{"chess_rapid": {"last": {"rating": 1400}}}"#).unwrap();

        let snapshot = StatsSnapshot::from(&raw);

        assert_eq!(
            snapshot.get(Mode::Rapid),
            Some(&LatestRating {
                rating: 1400,
                observed_at: None
            })
        );
    }

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        assert!("daily".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serializes_as_map_key() {
        let mut snapshot = StatsSnapshot::default();
        snapshot.modes.insert(
            Mode::Rapid,
            LatestRating {
                rating: 1400,
                observed_at: Some(1),
            },
        );

        let serialized = serde_json::to_string(&snapshot).unwrap();
        assert!(serialized.contains("\"rapid\""));
    }
}
