//! Pending book edits.
//!
//! Bedrock sends a packet for every page change while a book is open. Java
//! only wants the final contents, so edits are held here and the newest one
//! is flushed before the next player action.

use ferry_protocol::packets::java::SEditBook;

/// Holds at most one pending book edit.
#[derive(Debug, Default)]
pub struct BookEditCache {
    pending: Option<SEditBook>,
}

impl BookEditCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Queues an edit, replacing any edit not yet sent.
    pub fn set_packet(&mut self, packet: SEditBook) {
        self.pending = Some(packet);
    }

    /// Whether an edit is waiting to be sent.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending edit, leaving the cache empty.
    pub const fn check_for_send(&mut self) -> Option<SEditBook> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(page: &str) -> SEditBook {
        SEditBook {
            slot: 0,
            pages: vec![page.to_string()],
            title: None,
        }
    }

    #[test]
    fn newest_edit_wins() {
        let mut cache = BookEditCache::new();
        cache.set_packet(edit("first"));
        cache.set_packet(edit("second"));

        assert_eq!(cache.check_for_send(), Some(edit("second")));
        assert_eq!(cache.check_for_send(), None);
        assert!(!cache.has_pending());
    }
}
