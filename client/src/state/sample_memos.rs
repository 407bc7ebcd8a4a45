//! Sample memos shown until a backend feeds real ones.

#[cfg(test)]
#[path = "sample_memos_test.rs"]
mod sample_memos_test;

use canvas::memo::Memo;

const SAMPLE_MEMOS_JSON: &str = include_str!("sample_memos.json");

/// Parse a JSON array of memos.
///
/// # Errors
///
/// Returns the `serde_json` error when `raw` is not a memo array.
pub fn parse_memos(raw: &str) -> Result<Vec<Memo>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// The bundled sample memos. A broken bundle logs and yields an empty board.
pub fn sample_memos() -> Vec<Memo> {
    match parse_memos(SAMPLE_MEMOS_JSON) {
        Ok(memos) => memos,
        Err(err) => {
            log::warn!("sample memos: {err}");
            Vec::new()
        }
    }
}
