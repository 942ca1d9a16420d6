//! # Transcript
//!
//! Collects the lines a run prints, in emission order. Handler callbacks and
//! the driver append to the same transcript, so the interleaving matches what a
//! direct `println!` would have produced.

use order_framework::{Order, OrderHandler};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: impl Into<String>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.into());
    }

    /// Snapshot of every line recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A handler that records `Order created: ...`, `Order updated: ...` and
    /// `Order completed: ...` lines.
    pub fn handler(&self) -> OrderHandler {
        OrderHandler::new()
            .on_created(self.recorder("Order created"))
            .on_updated(self.recorder("Order updated"))
            .on_completed(self.recorder("Order completed"))
    }

    fn recorder(&self, label: &'static str) -> impl Fn(&Order) + Send + Sync + 'static {
        let transcript = self.clone();
        move |order: &Order| transcript.push(format!("{label}: {order}"))
    }
}
