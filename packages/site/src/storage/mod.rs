pub mod memory;

pub use memory::MemoryStore;

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

/// Persistent key-value storage for user preferences.
///
/// Writes are best-effort: implementations log and swallow failures.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
