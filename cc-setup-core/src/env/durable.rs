use super::PersistenceError;

/// A store that outlives the current process.
///
/// Implementations only need to make the pair visible to processes started later;
/// the current process is handled by [`SystemEnvStore`](super::SystemEnvStore).
pub trait DurableStore {
    fn persist(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    fn description(&self) -> String;

    fn activation_hint(&self) -> String;
}
