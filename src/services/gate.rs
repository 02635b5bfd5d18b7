//! At-most-one-in-flight admission gate.
//!
//! The original UI only disabled its submit button while a request was
//! outstanding; here the invariant is enforced inside each orchestrator
//! instead of relying on the presentation layer.

use std::sync::atomic::{AtomicBool, Ordering};

/// Single-slot gate. A permit is held for the duration of one
/// orchestration; a second acquire while the permit is out fails
/// immediately instead of blocking.
#[derive(Debug, Default)]
pub struct Gate {
    busy: AtomicBool,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to enter the gate. Returns a permit that reopens the gate
    /// when dropped, or `None` if an operation is already in flight.
    pub fn try_enter(&self) -> Option<GatePermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .ok()
            .map(|_| GatePermit { gate: self })
    }
}

/// RAII permit; dropping it reopens the gate.
#[derive(Debug)]
pub struct GatePermit<'a> {
    gate: &'a Gate,
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_permit_at_a_time() {
        let gate = Gate::new();
        let permit = gate.try_enter();
        assert!(permit.is_some());
        assert!(gate.try_enter().is_none());
    }

    #[test]
    fn dropping_permit_reopens_gate() {
        let gate = Gate::new();
        drop(gate.try_enter());
        assert!(gate.try_enter().is_some());
    }
}
