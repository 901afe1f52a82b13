//! Fan-out / join helper
//!
//! Spawns one task per child future and waits for every one of them before
//! returning. Results come back in input order. The first failure observed
//! fails the whole group; children still running are allowed to finish but
//! their results are discarded.
//!
//! Tasks live in a [`JoinSet`] owned by the returned future, so dropping
//! that future (e.g. on a deadline) aborts every child still in flight.

use std::future::Future;

use tokio::task::JoinSet;
use tracing::warn;

use super::errors::DomainError;

/// Run `futures` concurrently and collect their outputs.
///
/// Any child error, or a panicked/aborted child, collapses into
/// [`DomainError::Internal`].
pub async fn join_all_or_first_error<I, F, T>(futures: I) -> Result<Vec<T>, DomainError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, DomainError>> + Send + 'static,
    T: Send + 'static,
{
    let mut set = JoinSet::new();
    let mut count = 0usize;
    for (idx, fut) in futures.into_iter().enumerate() {
        set.spawn(async move { (idx, fut.await) });
        count += 1;
    }

    let mut slots: Vec<Option<T>> = (0..count).map(|_| None).collect();
    let mut first_error: Option<DomainError> = None;

    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, Ok(value))) => {
                if first_error.is_none() {
                    slots[idx] = Some(value);
                }
            }
            Ok((idx, Err(e))) => {
                warn!(child = idx, error = %e, "Fan-out child failed");
                first_error.get_or_insert(e);
            }
            Err(join_err) => {
                warn!(error = %join_err, "Fan-out child did not complete");
                first_error
                    .get_or_insert(DomainError::internal(format!("task failed: {join_err}")));
            }
        }
    }

    if let Some(e) = first_error {
        return Err(match e {
            DomainError::Internal(_) => e,
            other => DomainError::internal(other.to_string()),
        });
    }

    slots
        .into_iter()
        .map(|slot| slot.ok_or_else(|| DomainError::internal("fan-out child produced no result")))
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────
