use std::cell::RefCell;
use std::path::Path;

use lazy_expr::{Bounded, Evaluable};
use serde::{Deserialize, Serialize};

/// A single element read: which operand, which index, what came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalEvent {
    pub label: String,
    pub index: usize,
    pub value: f64,
}

/// Append-only log of [`EvalEvent`]s, shared by reference between any
/// number of [`Traced`] operands.
#[derive(Debug, Default)]
pub struct Trace {
    events: RefCell<Vec<EvalEvent>>,
}

#[derive(Serialize, Deserialize)]
struct TraceFile {
    reads: usize,
    events: Vec<EvalEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `inner` so that each read of it is recorded under `label`.
    pub fn wrap<E: Evaluable>(&self, label: impl Into<String>, inner: E) -> Traced<'_, E> {
        Traced {
            label: label.into(),
            inner,
            trace: self,
        }
    }

    #[cfg(feature = "trace")]
    fn record(&self, event: EvalEvent) {
        self.events.borrow_mut().push(event);
    }

    #[cfg(not(feature = "trace"))]
    fn record(&self, _event: EvalEvent) {}

    pub fn events(&self) -> Vec<EvalEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Number of reads recorded for operands wrapped under `label`.
    pub fn count_for(&self, label: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.label == label)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let events = self.events();
        serde_json::to_string_pretty(&TraceFile {
            reads: events.len(),
            events,
        })
    }

    /// Parse events back out of the output of [`Trace::to_json`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let file: TraceFile = serde_json::from_str(json)?;
        Ok(Self {
            events: RefCell::new(file.events),
        })
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        log::info!("writing {} recorded reads to {}", self.len(), path.display());
        std::fs::write(path, json)
    }
}

/// An [`Evaluable`] that reports each read to a [`Trace`] before returning it.
#[derive(Debug)]
pub struct Traced<'t, E> {
    label: String,
    inner: E,
    trace: &'t Trace,
}

impl<E> Traced<'_, E> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Evaluable> Evaluable for Traced<'_, E> {
    fn evaluate(&self, index: usize) -> f64 {
        let value = self.inner.evaluate(index);
        self.trace.record(EvalEvent {
            label: self.label.clone(),
            index,
            value,
        });
        value
    }
}

impl<E: Bounded> Bounded for Traced<'_, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
