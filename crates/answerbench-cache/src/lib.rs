mod fifo;

pub use fifo::{FifoCache, DEFAULT_CAPACITY};

/// Storage for generated answers, keyed by the exact prompt text that produced them.
///
/// Implementations carry no internal synchronisation: `put` takes `&mut self`, so an
/// owner shared between tasks has to be wrapped in a mutex by whoever shares it.
pub trait AnswerCache: Send {
    /// Look up the answer stored for an exact-match key.
    fn get(&self, key: &str) -> Option<String>;
    /// Store an answer, evicting according to the cache's policy.
    fn put(&mut self, key: String, value: String);
    /// Number of entries currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
