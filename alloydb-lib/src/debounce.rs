//! Debounced recalculation for interactive editors.
//!
//! Every edit calls [`Debouncer::schedule`]; only the last edit within the
//! delay window is predicted and published.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::composition::CompositionElement;
use crate::config::DebounceConfig;
use crate::engine::Engine;
use crate::prediction::PredictionResult;

/// A result tagged with the schedule call that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Published {
    pub generation: u64,
    pub result: PredictionResult,
}

#[derive(Default)]
struct Pending {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

struct Shared {
    engine: Arc<Engine>,
    pending: Mutex<Pending>,
    tx: watch::Sender<Option<Published>>,
}

pub struct Debouncer {
    shared: Arc<Shared>,
    delay: Duration,
}

impl Debouncer {
    pub fn new(engine: Arc<Engine>, config: &DebounceConfig) -> Self {
        let (tx, _) = watch::channel(None);
        Debouncer {
            shared: Arc::new(Shared {
                engine,
                pending: Mutex::new(Pending::default()),
                tx,
            }),
            delay: Duration::from_millis(config.delay_ms),
        }
    }

    /// Replace any pending calculation with one for `composition`.
    ///
    /// Must be called from within a tokio runtime. Returns the generation
    /// assigned to this request.
    pub fn schedule(&self, composition: Vec<CompositionElement>) -> u64 {
        let mut pending = self.shared.pending.lock();
        pending.generation += 1;
        let generation = pending.generation;
        if let Some(task) = pending.task.take() {
            task.abort();
            trace!(generation, "superseded pending prediction");
        }

        let shared = Arc::clone(&self.shared);
        let delay = self.delay;
        pending.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = shared.engine.predict(&composition);

            let mut pending = shared.pending.lock();
            if pending.generation != generation {
                return;
            }
            pending.task = None;
            debug!(generation, valid = result.is_valid, "publishing prediction");
            shared.tx.send_replace(Some(Published { generation, result }));
        }));
        generation
    }

    /// Drop the pending calculation, if any, without publishing.
    pub fn cancel(&self) {
        let mut pending = self.shared.pending.lock();
        pending.generation += 1;
        if let Some(task) = pending.task.take() {
            task.abort();
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Published>> {
        self.shared.tx.subscribe()
    }

    pub fn is_pending(&self) -> bool {
        self.shared.pending.lock().task.is_some()
    }

    pub fn latest(&self) -> Option<Published> {
        self.shared.tx.borrow().clone()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::sleep;

    use super::*;

    fn comp(parts: &[(&str, f64)]) -> Vec<CompositionElement> {
        parts
            .iter()
            .map(|&(s, p)| CompositionElement::from_symbol(s, p).unwrap())
            .collect()
    }

    fn debouncer() -> Debouncer {
        Debouncer::new(Arc::new(Engine::new()), &DebounceConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn only_last_edit_is_published() {
        let d = debouncer();
        let rx = d.subscribe();

        d.schedule(comp(&[("Fe", 100.0)]));
        sleep(Duration::from_millis(100)).await;
        let second = d.schedule(comp(&[("Cu", 100.0)]));
        assert_eq!(second, 2);

        sleep(Duration::from_millis(250)).await;
        assert!(rx.borrow().is_none());
        assert!(d.is_pending());

        sleep(Duration::from_millis(100)).await;
        let published = rx.borrow().clone().unwrap();
        assert_eq!(published.generation, 2);
        assert_eq!(published.result.properties.density, 8.96);
        assert!(!d.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_publication() {
        let d = debouncer();
        d.schedule(comp(&[("Fe", 100.0)]));
        d.cancel();
        assert!(!d.is_pending());

        sleep(Duration::from_millis(1_000)).await;
        assert_eq!(d.latest(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_input_is_still_published() {
        let d = debouncer();
        let mut rx = d.subscribe();
        d.schedule(Vec::new());

        rx.changed().await.unwrap();
        let published = rx.borrow().clone().unwrap();
        assert!(!published.result.is_valid);
    }
}
