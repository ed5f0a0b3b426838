//! # Terminal Control Signals
//!
//! The bridge between console input and process-group signal delivery. The
//! terminal hands every input byte to the [`Dispatcher`] together with its
//! foreground process group; for the fixed set of control characters the
//! dispatcher requests one group-wide signal, and every other byte is left to
//! the normal input path.
//!
//! Delivery itself belongs to the process subsystem. The dispatcher only
//! consumes the [`ProcessGroupSignals`] capability, which keeps it decoupled
//! from the process table and testable against a fake target. The dispatcher
//! may run from an interrupt path, so implementations of the capability must
//! be non-blocking and bounded-time.
//!
//! A failed delivery (group gone) is deliberately not an error here: the
//! default policy discards it, and [`UndeliveredPolicy`] is the hook for
//! hosts that want to count or log lost deliveries instead.

#![cfg_attr(not(any(test, doctest)), no_std)]

mod dispatch;
mod signal;

pub use dispatch::{Discard, Dispatcher, LoggingDiscard, UndeliveredPolicy};
pub use signal::{Pgid, Signal};

/// Failure channel of the delivery capability.
///
/// An *empty* group is not a failure — delivery to zero members is an
/// idempotent no-op. Only a group id that names nothing at all reports here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum DeliveryError {
    #[error("no such process group")]
    NoSuchGroup,
}

/// Capability to fan a signal out to a process group.
///
/// Implemented by the process subsystem, consumed by the [`Dispatcher`].
/// Implementations must be safe to call from an interrupt-like context:
/// non-blocking, bounded-time, no suspension.
pub trait ProcessGroupSignals {
    /// Deliver `signal` to every process whose group id is `pgid`.
    ///
    /// # Errors
    /// [`DeliveryError::NoSuchGroup`] when `pgid` names no group. A group
    /// with zero members is a successful no-op.
    fn deliver(&self, pgid: Pgid, signal: Signal) -> Result<(), DeliveryError>;
}

impl<T> ProcessGroupSignals for &T
where
    T: ProcessGroupSignals + ?Sized,
{
    #[inline]
    fn deliver(&self, pgid: Pgid, signal: Signal) -> Result<(), DeliveryError> {
        (**self).deliver(pgid, signal)
    }
}
