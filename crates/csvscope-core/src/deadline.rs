//! Racing a unit of work against a deadline.
//!
//! The browser side supplies both futures (a `fetch` and a timer), so
//! this module stays executor- and platform-agnostic and can be tested
//! natively with hand-built futures.

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

/// Outcome of [`race`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Raced<T> {
    /// The work finished first.
    Completed(T),
    /// The deadline fired first. The work future has been dropped.
    Elapsed,
}

impl<T> Raced<T> {
    /// Map an elapsed deadline to `on_elapsed`, passing a completed value
    /// through unchanged.
    pub fn or_elapsed(self, on_elapsed: impl FnOnce() -> T) -> T {
        match self {
            Self::Completed(value) => value,
            Self::Elapsed => on_elapsed(),
        }
    }
}

/// Drive `work` and `deadline` concurrently and report whichever
/// resolves first.
///
/// The loser is dropped without being polled again. When both are ready
/// on the same poll, `work` wins.
pub async fn race<W, D>(work: W, deadline: D) -> Raced<W::Output>
where
    W: Future,
    D: Future<Output = ()>,
{
    let work = pin!(work);
    let deadline = pin!(deadline);
    match select(work, deadline).await {
        Either::Left((output, _)) => Raced::Completed(output),
        Either::Right(((), _)) => Raced::Elapsed,
    }
}
