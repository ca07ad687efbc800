//! The session relay.
//!
//! The browser original carried the staged prescription across a
//! full-page navigation in `sessionStorage`. Here the relay is an
//! explicit [`SessionStore`] value created for the run and handed from
//! the intake stage to the page flows, so nothing relies on ambient
//! process-wide state. Lifetime matches the run: nothing is persisted.
//!
//! The store keeps the raw string key/value surface (`set`, `get`,
//! `clear_all`) and layers the typed staging contract on top of it:
//! exactly one discriminant key and one payload key at a time.

use std::collections::HashMap;

use meds_types::{EncodedImage, NonEmptyText, StagedInput};

use crate::constants::{
    MODE_IMAGE, MODE_TEXT, SESSION_KEY_IMAGE, SESSION_KEY_MODE, SESSION_KEY_TEXT,
};

/// Session-scoped key/value store for the staged prescription input.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under a key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value stored under a key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Removes every entry from the store.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stages a prescription input for the next page.
    ///
    /// Clears the store first, then writes the `mode` discriminant and
    /// the single matching payload key. A previous run's payload never
    /// survives a new staging.
    pub fn stage_input(&mut self, input: &StagedInput) {
        self.clear_all();
        match input {
            StagedInput::Text(text) => {
                self.set(SESSION_KEY_MODE, MODE_TEXT);
                self.set(SESSION_KEY_TEXT, text.as_str());
            }
            StagedInput::Image(image) => {
                self.set(SESSION_KEY_MODE, MODE_IMAGE);
                self.set(SESSION_KEY_IMAGE, image.to_data_url());
            }
        }
    }

    /// Reads back the staged input, if any.
    ///
    /// Returns `None` when no discriminant is set. A discriminant whose
    /// payload is missing or unparseable is logged and treated as
    /// absent rather than trusted.
    pub fn staged_input(&self) -> Option<StagedInput> {
        let mode = self.get(SESSION_KEY_MODE)?;

        match mode {
            MODE_TEXT => {
                let payload = match self.get(SESSION_KEY_TEXT) {
                    Some(payload) => payload,
                    None => {
                        tracing::warn!("staged mode is text but no text payload is present");
                        return None;
                    }
                };
                match NonEmptyText::new(payload) {
                    Ok(text) => Some(StagedInput::Text(text)),
                    Err(e) => {
                        tracing::warn!("staged text payload is invalid: {}", e);
                        None
                    }
                }
            }
            MODE_IMAGE => {
                let payload = match self.get(SESSION_KEY_IMAGE) {
                    Some(payload) => payload,
                    None => {
                        tracing::warn!("staged mode is image but no image payload is present");
                        return None;
                    }
                };
                match EncodedImage::from_data_url(payload) {
                    Ok(image) => Some(StagedInput::Image(image)),
                    Err(e) => {
                        tracing::warn!("staged image payload is invalid: {}", e);
                        None
                    }
                }
            }
            other => {
                tracing::warn!("unknown staged input mode: {}", other);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_input(text: &str) -> StagedInput {
        StagedInput::Text(NonEmptyText::new(text).unwrap())
    }

    fn image_input() -> StagedInput {
        StagedInput::Image(EncodedImage::new("image/png", vec![1, 2, 3]))
    }

    #[test]
    fn test_set_get_clear() {
        let mut store = SessionStore::new();
        assert!(store.is_empty());

        store.set("key", "value");
        assert_eq!(store.get("key"), Some("value"));

        store.set("key", "other");
        assert_eq!(store.get("key"), Some("other"));

        store.clear_all();
        assert!(store.get("key").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_stage_text_writes_exactly_two_keys() {
        let mut store = SessionStore::new();
        store.stage_input(&text_input("Metformin 500mg"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(SESSION_KEY_MODE), Some(MODE_TEXT));
        assert_eq!(store.get(SESSION_KEY_TEXT), Some("Metformin 500mg"));
        assert!(store.get(SESSION_KEY_IMAGE).is_none());
    }

    #[test]
    fn test_staging_replaces_previous_payload() {
        let mut store = SessionStore::new();
        store.stage_input(&text_input("old text"));
        store.stage_input(&image_input());

        // The text payload from the previous run must not survive.
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(SESSION_KEY_MODE), Some(MODE_IMAGE));
        assert!(store.get(SESSION_KEY_TEXT).is_none());
    }

    #[test]
    fn test_staged_input_round_trips_text() {
        let mut store = SessionStore::new();
        store.stage_input(&text_input("Metformin"));

        assert_eq!(store.staged_input(), Some(text_input("Metformin")));
    }

    #[test]
    fn test_staged_input_round_trips_image() {
        let mut store = SessionStore::new();
        store.stage_input(&image_input());

        assert_eq!(store.staged_input(), Some(image_input()));
    }

    #[test]
    fn test_staged_input_absent_when_no_mode() {
        let store = SessionStore::new();
        assert!(store.staged_input().is_none());
    }

    #[test]
    fn test_staged_input_absent_when_payload_missing() {
        let mut store = SessionStore::new();
        store.set(SESSION_KEY_MODE, MODE_TEXT);
        assert!(store.staged_input().is_none());
    }

    #[test]
    fn test_staged_input_absent_when_payload_unparseable() {
        let mut store = SessionStore::new();
        store.set(SESSION_KEY_MODE, MODE_IMAGE);
        store.set(SESSION_KEY_IMAGE, "not a data url");
        assert!(store.staged_input().is_none());
    }

    #[test]
    fn test_staged_input_absent_for_unknown_mode() {
        let mut store = SessionStore::new();
        store.set(SESSION_KEY_MODE, "pdf");
        assert!(store.staged_input().is_none());
    }
}
