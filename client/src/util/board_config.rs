//! Board configuration loading from the host page.
//!
//! The page may embed `<script id="board-config" type="application/json">`
//! with any subset of `BoardConfig` fields. Anything missing or unreadable
//! falls back to the built-in defaults.

#[cfg(test)]
#[path = "board_config_test.rs"]
mod board_config_test;

use canvas::config::BoardConfig;

/// Element id of the embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

/// Resolve the board configuration from the raw text of the config block.
pub fn resolve_config(raw: Option<&str>) -> BoardConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        log::debug!("config: no #{CONFIG_ELEMENT_ID} block, using defaults");
        return BoardConfig::default();
    };
    match BoardConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("config: loaded from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("config: {err}; using defaults");
            BoardConfig::default()
        }
    }
}

/// Read and resolve the page's config block.
#[cfg(feature = "csr")]
pub fn load_page_config() -> BoardConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    resolve_config(raw.as_deref())
}
