use crate::{DeliveryError, Pgid, ProcessGroupSignals, Signal};

/// What to do with a delivery the target rejected.
///
/// The dispatcher itself never treats a failed delivery as an error; this
/// policy is the explicit, overridable point where a host can observe one.
pub trait UndeliveredPolicy {
    fn on_undelivered(&self, pgid: Pgid, signal: Signal, error: DeliveryError);
}

/// Drop failed deliveries without a trace. The default.
#[derive(Debug, Default, Copy, Clone)]
pub struct Discard;

impl UndeliveredPolicy for Discard {
    #[inline]
    fn on_undelivered(&self, _pgid: Pgid, _signal: Signal, _error: DeliveryError) {}
}

/// Drop failed deliveries but note them on the log facade.
#[derive(Debug, Default, Copy, Clone)]
pub struct LoggingDiscard;

impl UndeliveredPolicy for LoggingDiscard {
    fn on_undelivered(&self, pgid: Pgid, signal: Signal, error: DeliveryError) {
        log::debug!("signal {signal:?} for group {pgid} not delivered: {error}");
    }
}

/// Per-byte control-character dispatcher.
///
/// Invoked with each terminal input byte and the terminal's foreground
/// process group. A byte in the mapped control set produces exactly one
/// delivery request against the injected target; every other byte is a
/// no-op here and stays on the normal input path.
#[derive(Debug, Clone)]
pub struct Dispatcher<T, P = Discard> {
    target: T,
    policy: P,
}

impl<T> Dispatcher<T>
where
    T: ProcessGroupSignals,
{
    /// Dispatcher with the default silent-discard policy.
    #[must_use]
    pub const fn new(target: T) -> Self {
        Self::with_policy(target, Discard)
    }
}

impl<T, P> Dispatcher<T, P>
where
    T: ProcessGroupSignals,
    P: UndeliveredPolicy,
{
    #[must_use]
    pub const fn with_policy(target: T, policy: P) -> Self {
        Self { target, policy }
    }

    /// Inspect one input byte for the foreground group `pgid`.
    ///
    /// Fire-and-forget: the delivery result is routed to the policy, never
    /// to the caller. Safe to invoke from an interrupt path as long as the
    /// target and policy are.
    pub fn dispatch(&self, pgid: Pgid, byte: u8) {
        let Some(signal) = Signal::from_control_char(byte) else {
            return;
        };
        if let Err(error) = self.target.deliver(pgid, signal) {
            self.policy.on_undelivered(pgid, signal, error);
        }
    }
}
