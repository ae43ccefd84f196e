//! Read-then-write increment shared by the click and visitor paths.

use tracing::debug;

use crate::domain::entities::RunningCounter;
use crate::domain::event_store::EventStore;
use crate::error::AppError;

/// Increments `counter` by one and returns the value written.
///
/// The store has no atomic increment, so this reads the current value
/// (absent = 0) and writes back `value + 1`. Two requests that read the same
/// value both write the same result and one increment is lost. The returned
/// value is what this request wrote, which may understate the true total.
///
/// # Errors
///
/// Returns [`AppError::Store`] if either store call fails and
/// [`AppError::CorruptCounter`] if the stored value is not an integer.
pub async fn increment_counter(
    store: &EventStore,
    counter: RunningCounter,
) -> Result<u64, AppError> {
    let current = store.read_counter(counter).await?;
    let next = current.saturating_add(1);
    store.write_counter(counter, next).await?;

    debug!(counter = %counter, from = current, to = next, "Counter incremented");

    Ok(next)
}
