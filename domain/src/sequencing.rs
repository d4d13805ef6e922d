//! Request tickets so that, for each kind of request, only the most recently
//! issued one may land its response.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Login,
    Logs,
    Prompt,
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: RequestKind,
    epoch: u64,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct Sequencer {
    epoch: u64,
    next_seq: u64,
    latest: HashMap<RequestKind, u64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier ticket of the same kind.
    pub fn issue(&mut self, kind: RequestKind) -> Ticket {
        self.next_seq += 1;
        self.latest.insert(kind, self.next_seq);
        Ticket {
            kind,
            epoch: self.epoch,
            seq: self.next_seq,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.epoch == self.epoch && self.latest.get(&ticket.kind) == Some(&ticket.seq)
    }

    /// Consumes the ticket if it is current. A settled ticket cannot land twice.
    pub fn settle(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.latest.remove(&ticket.kind);
        true
    }

    /// Starts a new epoch. Every ticket issued before this call becomes stale.
    pub fn invalidate_all(&mut self) {
        self.epoch += 1;
        self.latest.clear();
    }
}
