use crate::models::game::GameRecord;

const OPENINGS_SEGMENT: &str = "/openings/";

/// Opening identifier for a game.
///
/// Prefers the last path component of an `/openings/` URL, hyphens turned
/// into spaces; falls back to `"ECO <code>"`. `None` leaves the game out of
/// the opening ranking only.
pub fn classify(record: &GameRecord) -> Option<String> {
    if let Some(key) = record.opening_url.as_deref().and_then(key_from_url) {
        return Some(key);
    }

    record
        .eco_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| format!("ECO {}", code))
}

fn key_from_url(url: &str) -> Option<String> {
    let (_, tail) = url.rsplit_once(OPENINGS_SEGMENT)?;
    let tail = tail.split(['?', '#']).next().unwrap_or_default();
    let component = tail.trim_end_matches('/').rsplit('/').next()?;

    if component.is_empty() {
        return None;
    }

    Some(component.replace('-', " "))
}
