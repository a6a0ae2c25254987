use crate::config::DARK_MODE_KEY;
use crate::utils::storage::KeyValueStore;

pub fn load_dark_mode<S: KeyValueStore>(store: &S) -> bool {
    store.load(DARK_MODE_KEY).unwrap_or(false)
}

pub fn save_dark_mode<S: KeyValueStore>(store: &S, enabled: bool) {
    if let Err(e) = store.save(DARK_MODE_KEY, &enabled) {
        log::warn!("Could not persist theme preference: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn defaults_to_light() {
        assert!(!load_dark_mode(&MemoryStore::default()));
    }

    #[test]
    fn preference_persists() {
        let store = MemoryStore::default();
        save_dark_mode(&store, true);
        assert!(load_dark_mode(&store));
        save_dark_mode(&store, false);
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("false"));
    }
}
