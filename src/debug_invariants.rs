//! Invariant hooks for structures that keep derived bookkeeping next to
//! their records (e.g. the node index of a [`Ring`](crate::ring::Ring)).

use crate::ring_error::RingError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), RingError>;

    /// Panic on the first violation when invariant checking is compiled in;
    /// a no-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
}

/// Run a fallible check and panic with context on error, but only in debug
/// builds or with the `strict-invariants` / `check-invariants` features.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[ring invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
