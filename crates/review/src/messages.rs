use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Messages shown when a row is marked done.
const DEFAULT_MESSAGES: [&str; 6] = [
    "Nice work!",
    "Another one invoiced.",
    "Row handled, on to the next.",
    "That account is squared away.",
    "Clean books, clear mind.",
    "Done and dusted.",
];

/// Editors tend to paste numbered lists ("3. Nice work!"); strip the numbering.
fn strip_numbering(raw: &str) -> String {
    static NUMBERING: OnceLock<Regex> = OnceLock::new();
    let re = NUMBERING.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("static pattern"));
    re.replace(raw.trim(), "").trim().to_string()
}

/// An editable, deduplicating pool of done-confirmation messages.
///
/// The pool itself is pure data: picking takes an externally supplied seed,
/// so callers own the entropy and persistence. Serde derives give the
/// storage layer its interface without the pool knowing where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePool {
    messages: Vec<String>,
}

impl Default for MessagePool {
    fn default() -> Self {
        MessagePool {
            messages: DEFAULT_MESSAGES.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

impl MessagePool {
    /// Create a pool with the built-in default messages
    #[must_use]
    pub fn new() -> Self {
        MessagePool::default()
    }

    /// Create an empty pool
    #[must_use]
    pub fn empty() -> Self {
        MessagePool {
            messages: Vec::new(),
        }
    }

    /// The messages in insertion order
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of messages in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the pool is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Add a message, cleaning pasted numbering and surrounding whitespace.
    ///
    /// Returns false (and leaves the pool untouched) if the cleaned message
    /// is empty or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let cleaned = strip_numbering(raw);
        if cleaned.is_empty() || self.messages.contains(&cleaned) {
            return false;
        }
        self.messages.push(cleaned);
        true
    }

    /// Replace the message at a position with a cleaned version of `raw`.
    ///
    /// Returns false if the position is out of range or the cleaned text is
    /// empty.
    pub fn replace(&mut self, index: usize, raw: &str) -> bool {
        let cleaned = strip_numbering(raw);
        if cleaned.is_empty() {
            return false;
        }
        match self.messages.get_mut(index) {
            Some(slot) => {
                *slot = cleaned;
                true
            }
            None => false,
        }
    }

    /// Remove the message at a position, if it exists
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.messages.len() {
            Some(self.messages.remove(index))
        } else {
            None
        }
    }

    /// Pick a message deterministically from an externally supplied seed.
    ///
    /// Returns `None` only when the pool is empty.
    #[must_use]
    pub fn pick(&self, seed: u64) -> Option<&str> {
        if self.messages.is_empty() {
            return None;
        }
        let index = usize::try_from(seed % self.messages.len() as u64).ok()?;
        self.messages.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_is_populated() {
        let pool = MessagePool::new();
        assert!(!pool.is_empty());
        assert_eq!(pool.len(), DEFAULT_MESSAGES.len());
    }

    #[test]
    fn test_add_strips_numbering_and_dedupes() {
        let mut pool = MessagePool::empty();
        assert!(pool.add("1. Great job"));
        assert_eq!(pool.messages(), ["Great job"]);

        // same message with different numbering is a duplicate
        assert!(!pool.add("12.   Great job  "));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_add_rejects_empty_after_cleaning() {
        let mut pool = MessagePool::empty();
        assert!(!pool.add("   "));
        assert!(!pool.add("3. "));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_replace_and_remove_respect_bounds() {
        let mut pool = MessagePool::empty();
        pool.add("first");
        assert!(pool.replace(0, "2. second"));
        assert_eq!(pool.messages(), ["second"]);
        assert!(!pool.replace(9, "x"));

        assert_eq!(pool.remove(9), None);
        assert_eq!(pool.remove(0), Some("second".to_string()));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pick_is_deterministic_and_in_bounds() {
        let pool = MessagePool::new();
        let n = pool.len() as u64;
        assert_eq!(pool.pick(0), pool.pick(n));
        for seed in 0..n * 2 {
            assert!(pool.pick(seed).is_some());
        }
        assert_eq!(MessagePool::empty().pick(7), None);
    }
}
