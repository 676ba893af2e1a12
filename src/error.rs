// Error types for the few fallible paths: the embedded-io adapters,
// which may not report a zero-length write as success, and raw
// payload submission, which can lose to an earlier flush.

use core::fmt;

/// Why an `embedded-io` write made no progress.
///
/// The writer's own API never errors (it reports short counts); this
/// only exists because `embedded_io::Write` forbids `Ok(0)` for a
/// non-empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// No room left in the chunk.
    ChunkFull,
    /// The payload was already handed to the sink.
    Submitted,
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::ChunkFull => write!(f, "response chunk full"),
            WriteError::Submitted => write!(f, "response payload already submitted"),
        }
    }
}

impl core::error::Error for WriteError {}

impl embedded_io::Error for WriteError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            WriteError::ChunkFull => embedded_io::ErrorKind::WriteZero,
            WriteError::Submitted => embedded_io::ErrorKind::Other,
        }
    }
}

/// Why [`set_payload`](crate::ResponseWriter::set_payload) did not
/// deliver its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError<E> {
    /// A payload was already handed to the sink; this one was dropped.
    AlreadySubmitted,
    /// The sink rejected the payload.
    Sink(E),
}

impl<E: fmt::Debug> fmt::Display for SubmitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::AlreadySubmitted => write!(f, "response payload already submitted"),
            SubmitError::Sink(e) => write!(f, "sink rejected payload: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for SubmitError<E> {}
