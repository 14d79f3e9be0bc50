use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex, PoisonError},
    task::{Context, Poll},
};

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// The host page's "about to unload" signal.
///
/// Firing it cancels every run that is pending at that moment. Runs started afterwards (a page
/// restored from the back/forward cache) listen on a fresh token and play normally.
#[derive(Clone, Debug, Default)]
pub struct PageLifecycle {
    unload: Arc<Mutex<CancellationToken>>,
}

impl PageLifecycle {
    /// A lifecycle with no runs attached yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The page is being discarded (`pagehide`).
    pub fn page_hide(&self) {
        let pending = {
            let mut unload = self.unload.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *unload)
        };
        pending.cancel();
        tracing::debug!("page hidden, pending runs cancelled");
    }

    /// Token a single run listens on; cancelled by the next [`page_hide`](Self::page_hide).
    pub(crate) fn run_token(&self) -> CancellationToken {
        self.unload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .child_token()
    }
}

/// Resolves once a run's final stage is satisfied.
///
/// A run cancelled by page unload never resolves this future: the page is going away, so nobody
/// is left to observe it.
#[derive(Debug)]
#[must_use = "the transition keeps running, but nothing observes its end"]
pub struct Completion {
    rx: Option<oneshot::Receiver<()>>,
}

impl Completion {
    pub(crate) fn channel() -> (CompletionSignal, Self) {
        let (tx, rx) = oneshot::channel();
        (CompletionSignal { tx }, Self { rx: Some(rx) })
    }

    /// A completion for a run that never started.
    pub(crate) fn never() -> Self {
        Self { rx: None }
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Some(rx) = self.rx.as_mut() else {
            return Poll::Pending;
        };
        match Pin::new(rx).poll(cx) {
            Poll::Ready(Ok(())) => {
                self.rx = None;
                Poll::Ready(())
            }
            Poll::Ready(Err(_)) => {
                // Sender dropped without resolving: the run was cancelled.
                self.rx = None;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Sequencer-side half of a [`Completion`].
#[derive(Debug)]
pub(crate) struct CompletionSignal {
    tx: oneshot::Sender<()>,
}

impl CompletionSignal {
    pub(crate) fn resolve(self) {
        // The caller may have dropped its Completion; that is fine.
        let _ = self.tx.send(());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/completion.rs"]
mod tests;
