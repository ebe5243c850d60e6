//! External interrupt dispatch table.
//!
//! The core signals external interrupts through `mcause` with bit 31 set and
//! the IRQ line number in the low five bits. A fixed table of handler
//! function pointers maps lines to handlers; unregistered lines hit a no-op
//! stub so a spurious interrupt never jumps through a null slot.

/// Number of external interrupt lines the core exposes.
pub const MAX_IRQ_HANDLERS: usize = 32;

/// External-interrupt bit in `mcause`.
const MCAUSE_IRQ: u32 = 1 << 31;

fn handler_stub() {}

/// Fixed-size dispatch table, one handler per IRQ line.
pub struct InterruptTable {
    handlers: [fn(); MAX_IRQ_HANDLERS],
}

impl InterruptTable {
    /// All slots start at the no-op stub.
    pub const fn new() -> Self {
        Self {
            handlers: [handler_stub; MAX_IRQ_HANDLERS],
        }
    }

    /// Install `handler` for IRQ line `irq`. Returns `false` when `irq` is
    /// out of range, leaving the table unchanged.
    pub fn register(&mut self, irq: usize, handler: fn()) -> bool {
        if irq >= MAX_IRQ_HANDLERS {
            return false;
        }
        self.handlers[irq] = handler;
        true
    }

    /// Reset IRQ line `irq` back to the stub.
    pub fn unregister(&mut self, irq: usize) -> bool {
        if irq >= MAX_IRQ_HANDLERS {
            return false;
        }
        self.handlers[irq] = handler_stub;
        true
    }

    /// Dispatch from a trap: calls the registered handler when `mcause`
    /// reports an external interrupt, otherwise does nothing (exceptions are
    /// not ours to handle).
    pub fn dispatch(&self, mcause: u32) {
        if mcause & MCAUSE_IRQ != 0 {
            (self.handlers[(mcause & 0x1f) as usize])();
        }
    }
}

impl Default for InterruptTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};

    static FIRED: AtomicUsize = AtomicUsize::new(0);

    fn count_handler() {
        FIRED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_dispatch_registered_line() {
        FIRED.store(0, Ordering::SeqCst);
        let mut table = InterruptTable::new();
        assert!(table.register(7, count_handler));
        table.dispatch(MCAUSE_IRQ | 7);
        assert_eq!(FIRED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_exception_cause_ignored() {
        FIRED.store(0, Ordering::SeqCst);
        let mut table = InterruptTable::new();
        table.register(7, count_handler);
        // Bit 31 clear: an exception, not an external interrupt.
        table.dispatch(7);
        assert_eq!(FIRED.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unregistered_line_hits_stub() {
        let table = InterruptTable::new();
        // Must not panic.
        table.dispatch(MCAUSE_IRQ | 31);
    }

    #[test]
    fn test_register_out_of_range() {
        let mut table = InterruptTable::new();
        assert!(!table.register(32, count_handler));
        assert!(!table.unregister(32));
    }
}
