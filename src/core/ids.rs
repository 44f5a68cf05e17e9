use crate::domain::TransactionId;

/// Hands out time-based transaction ids that never repeat.
///
/// An id is the creation time in milliseconds, moved past the last id handed
/// out (or loaded from storage) whenever the clock has not advanced.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn seeded(max_existing: Option<TransactionId>) -> Self {
        Self {
            last: max_existing.map(TransactionId::value).unwrap_or(0),
        }
    }

    pub fn next(&mut self, now_millis: i64) -> TransactionId {
        let now = u64::try_from(now_millis).unwrap_or(0);
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        TransactionId(id)
    }
}
