use crate::config::USED_EMAILS_KEY;
use crate::utils::storage::KeyValueStore;

/// Emails that already went through a successful submission in this browser.
///
/// Membership is an exact string match. Nothing stops two tabs from passing
/// the check for the same address at the same time.
#[derive(Clone, Debug)]
pub struct UsedEmailSet<S> {
    store: S,
}

impl<S: KeyValueStore> UsedEmailSet<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn emails(&self) -> Vec<String> {
        self.store.load(USED_EMAILS_KEY).unwrap_or_default()
    }

    pub fn is_used(&self, email: &str) -> bool {
        self.emails().iter().any(|used| used == email)
    }

    /// Appends without checking for an existing entry and writes through.
    pub fn record(&self, email: &str) {
        let mut emails = self.emails();
        emails.push(email.to_string());
        if let Err(e) = self.store.save(USED_EMAILS_KEY, &emails) {
            log::warn!("Could not remember submitted email: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn unknown_email_is_unused_until_recorded() {
        let set = UsedEmailSet::new(MemoryStore::default());
        assert!(!set.is_used("a@b.com"));
        set.record("a@b.com");
        assert!(set.is_used("a@b.com"));
    }

    #[test]
    fn comparison_is_exact() {
        let set = UsedEmailSet::new(MemoryStore::default());
        set.record("a@b.com");
        assert!(!set.is_used("A@b.com"));
        assert!(!set.is_used(" a@b.com"));
        assert!(!set.is_used("a@b.com "));
    }

    #[test]
    fn record_appends_duplicates_and_persists_json_array() {
        let store = MemoryStore::default();
        let set = UsedEmailSet::new(store.clone());
        set.record("a@b.com");
        set.record("a@b.com");
        assert_eq!(set.emails(), vec!["a@b.com", "a@b.com"]);
        assert_eq!(
            store.raw(USED_EMAILS_KEY).as_deref(),
            Some(r#"["a@b.com","a@b.com"]"#)
        );
    }

    #[test]
    fn survives_a_reload() {
        let store = MemoryStore::default();
        UsedEmailSet::new(store.clone()).record("x@y.org");
        let reloaded = UsedEmailSet::new(store);
        assert!(reloaded.is_used("x@y.org"));
    }

    #[test]
    fn corrupt_storage_reads_as_empty() {
        let store = MemoryStore::default();
        store.put_raw(USED_EMAILS_KEY, "{oops");
        let set = UsedEmailSet::new(store);
        assert!(set.emails().is_empty());
        set.record("a@b.com");
        assert!(set.is_used("a@b.com"));
    }

    #[test]
    fn write_failure_is_swallowed() {
        let store = MemoryStore::default();
        store.fail_writes();
        let set = UsedEmailSet::new(store);
        set.record("a@b.com");
        assert!(!set.is_used("a@b.com"));
    }
}
