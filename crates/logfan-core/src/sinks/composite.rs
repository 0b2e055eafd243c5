//! Composite sink: ordered fan-out to owned children

use crate::record::Record;
use crate::sink::Sink;
use logfan_core_types::SinkKind;
use logfan_errors::{LogError, Result};
use std::collections::TryReserveError;
use std::fmt;

/// Capacity reserved by the first `add`.
pub const INITIAL_CAPACITY: usize = 4;

/// Owns an ordered list of child sinks and forwards every call to them.
///
/// Insertion order is fan-out order. `start` and `stop` stop at the first
/// failing child and return its error; children before it are left as they
/// are. `emit` always reaches every child.
#[derive(Default)]
pub struct CompositeSink {
    children: Vec<Box<dyn Sink>>,
}

impl CompositeSink {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Append `child`, taking ownership.
    ///
    /// Capacity grows from [`INITIAL_CAPACITY`] by doubling, and only when
    /// the list is full.
    ///
    /// # Errors
    ///
    /// Returns [`AddError`] carrying [`LogError::OutOfMemory`] and the
    /// untouched child when the allocation fails.
    pub fn add(&mut self, child: Box<dyn Sink>) -> std::result::Result<(), AddError> {
        self.add_with(child, Vec::try_reserve_exact)
    }

    /// `add` with the growth step supplied by the caller.
    pub(crate) fn add_with<R>(
        &mut self,
        child: Box<dyn Sink>,
        reserve: R,
    ) -> std::result::Result<(), AddError>
    where
        R: FnOnce(&mut Vec<Box<dyn Sink>>, usize) -> std::result::Result<(), TryReserveError>,
    {
        if self.children.len() == self.children.capacity() {
            let target = match self.children.capacity() {
                0 => INITIAL_CAPACITY,
                cap => cap.saturating_mul(2),
            };
            let additional = target - self.children.len();
            if reserve(&mut self.children, additional).is_err() {
                return Err(AddError {
                    error: LogError::OutOfMemory {
                        context: "growing the composite sink",
                    },
                    child,
                });
            }
        }
        self.children.push(child);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.children.capacity()
    }

    /// Kinds of the children, in fan-out order.
    pub fn kinds(&self) -> Vec<SinkKind> {
        self.children.iter().map(|c| c.kind()).collect()
    }
}

impl Sink for CompositeSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Composite
    }

    fn start(&mut self) -> Result<()> {
        for child in &mut self.children {
            child.start()?;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        for child in &mut self.children {
            child.stop()?;
        }
        Ok(())
    }

    fn emit(&mut self, record: &Record<'_>) {
        for child in &mut self.children {
            child.emit(record);
        }
    }

    fn destroy(self: Box<Self>) {
        for child in self.children {
            child.destroy();
        }
    }
}

/// A failed [`CompositeSink::add`]: the error plus the child handed back.
pub struct AddError {
    error: LogError,
    child: Box<dyn Sink>,
}

impl AddError {
    pub fn error(&self) -> &LogError {
        &self.error
    }

    pub fn into_parts(self) -> (LogError, Box<dyn Sink>) {
        (self.error, self.child)
    }
}

impl fmt::Debug for AddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddError")
            .field("error", &self.error)
            .field("child", &self.child.kind())
            .finish()
    }
}

impl fmt::Display for AddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot add {} sink: {}", self.child.kind(), self.error)
    }
}

impl std::error::Error for AddError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<AddError> for LogError {
    fn from(err: AddError) -> Self {
        // The child is dropped here; callers that want it back use into_parts.
        err.error
    }
}
