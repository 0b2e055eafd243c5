//! The sink contract
//!
//! Every output destination implements [`Sink`]. The logger only ever talks
//! to a single trait object (usually a [`CompositeSink`](crate::CompositeSink))
//! and never to a concrete variant.

use crate::record::Record;
use logfan_core_types::SinkKind;
use logfan_errors::Result;

/// A pluggable output destination for formatted log messages.
///
/// Sinks are owned by exactly one parent (a composite or the logger) and do
/// no internal synchronization. They must be `Send` so a logger can live
/// behind a mutex.
pub trait Sink: Send {
    /// Which variant this sink is.
    fn kind(&self) -> SinkKind;

    /// Acquire runtime resources. Only required to work on a fresh instance.
    ///
    /// # Errors
    ///
    /// Returns the sink-specific failure; composites return the first
    /// failing child's error.
    fn start(&mut self) -> Result<()>;

    /// Flush and release runtime resources.
    ///
    /// Must be safe to call more than once and without a following
    /// [`destroy`](Sink::destroy).
    ///
    /// # Errors
    ///
    /// Returns the flush failure, if any.
    fn stop(&mut self) -> Result<()>;

    /// Write one record. Best-effort: failures drop the message silently.
    fn emit(&mut self, record: &Record<'_>);

    /// Release everything this sink owns, including itself.
    ///
    /// Consuming the box makes a second destroy unrepresentable. The default
    /// simply drops the sink.
    fn destroy(self: Box<Self>) {}
}
