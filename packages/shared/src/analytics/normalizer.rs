use std::collections::HashSet;

use tracing::debug;

use crate::models::game::{GameRecord, GameResult, RawGame, RawPlayer};

const OPENINGS_SEGMENT: &str = "/openings/";

/// Map a provider game into the canonical record.
///
/// Usernames are lower-cased. Missing or blank fields become `None`; the
/// downstream derivations simply skip whatever dimension they cannot compute.
pub fn normalize(raw: RawGame) -> GameRecord {
    let RawGame {
        url,
        pgn,
        eco,
        eco_url,
        white,
        black,
        start_time,
        end_time,
        rated,
        time_class,
        ..
    } = raw;

    let eco = non_blank(eco);
    let mut opening_url = non_blank(eco_url);
    let mut eco_code = None;

    // The archive publishes the opening page under `eco` when no separate
    // `eco_url` is sent.
    match eco {
        Some(value) if opening_url.is_none() && value.contains(OPENINGS_SEGMENT) => {
            opening_url = Some(value);
        }
        other => eco_code = other,
    }

    let (white_username, white_result, white_rating) = split_player(white);
    let (black_username, black_result, black_rating) = split_player(black);

    GameRecord {
        id: non_blank(url),
        move_text: non_blank(pgn),
        opening_url,
        eco_code,
        white_username,
        black_username,
        white_result,
        black_result,
        white_rating,
        black_rating,
        start_time,
        end_time,
        rated,
        time_class: non_blank(time_class).map(|class| class.to_lowercase()),
    }
}

/// Normalize a batch, keeping the first occurrence of each game id.
/// Records without an id cannot collide and are always kept.
pub fn normalize_all(raws: Vec<RawGame>) -> Vec<GameRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raws.len());

    for raw in raws {
        let record = normalize(raw);
        if let Some(id) = &record.id {
            if !seen.insert(id.clone()) {
                debug!("Dropping duplicate game {}", id);
                continue;
            }
        }
        records.push(record);
    }

    records
}

fn split_player(player: Option<RawPlayer>) -> (Option<String>, Option<GameResult>, Option<i32>) {
    match player {
        Some(player) => (
            non_blank(player.username).map(|name| name.to_lowercase()),
            non_blank(player.result).map(GameResult::from),
            player.rating,
        ),
        None => (None, None, None),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
