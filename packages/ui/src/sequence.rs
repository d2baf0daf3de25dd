//! Request sequencing for views that can have several requests in flight.
//!
//! Every request takes a [`Ticket`] from the view's [`RequestSeq`] before it
//! is sent. When the response arrives it is applied only if its ticket is
//! still the latest one issued; anything older lost the race and is dropped.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
