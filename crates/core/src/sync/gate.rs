use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number handed to one request. Only comparable within the gate that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Lets only the most recently issued request update the view.
///
/// Every request takes a ticket before it suspends. When its response arrives it may update the
/// view only if no later ticket has been issued since, whatever order the responses land in.
#[derive(Debug, Default)]
pub struct SequenceGate {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl SequenceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no newer ticket has been issued.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Claims the view for `ticket`. Fails once a newer ticket has been issued, or if this
    /// ticket already claimed it.
    pub fn try_apply(&self, ticket: Ticket) -> bool {
        self.applied
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |applied| {
                (ticket.0 > applied && self.is_latest(ticket)).then_some(ticket.0)
            })
            .is_ok()
    }

    /// Issues and applies a ticket in one step, fencing off every response still in flight.
    pub fn invalidate(&self) {
        let ticket = self.issue();
        self.try_apply(ticket);
    }
}
