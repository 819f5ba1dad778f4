use crate::{
    config::TOAST_TTL_MS,
    models::{ToastKind, ToastMessage},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct QueuedToast {
    message: ToastMessage,
    expires_at_ms: i64,
}

/// Ordered list of transient notifications.
///
/// Every toast carries a deadline `ttl_ms` after it was queued. Callers either
/// drive [`ToastQueue::expire`] with the current time or schedule a timer per
/// toast that calls [`ToastQueue::dismiss`]; both end in the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    entries: Vec<QueuedToast>,
    ttl_ms: i64,
    seq: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_TTL_MS)
    }
}

impl ToastQueue {
    /// Empty queue whose toasts live `ttl_ms`.
    pub fn new(ttl_ms: i64) -> Self {
        Self {
            entries: Vec::new(),
            ttl_ms: ttl_ms.max(0),
            seq: 0,
        }
    }

    /// Toast lifetime.
    pub fn ttl_ms(&self) -> i64 {
        self.ttl_ms
    }

    /// Queue a message and return its id. Ids stay unique for toasts queued
    /// within the same millisecond.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind, now_ms: i64) -> String {
        self.seq = self.seq.wrapping_add(1);
        let id = format!("{now_ms}-{}", self.seq);
        self.entries.push(QueuedToast {
            message: ToastMessage {
                id: id.clone(),
                kind,
                message: message.into(),
            },
            expires_at_ms: now_ms.saturating_add(self.ttl_ms),
        });
        id
    }

    /// Remove a toast right away. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.message.id != id);
        before != self.entries.len()
    }

    /// Drop every toast whose deadline is at or before `now_ms`.
    pub fn expire(&mut self, now_ms: i64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.expires_at_ms > now_ms);
        before - self.entries.len()
    }

    /// Queued messages, oldest first.
    pub fn messages(&self) -> Vec<ToastMessage> {
        self.entries
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    /// Number of queued toasts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently queued message.
    pub fn last(&self) -> Option<&ToastMessage> {
        self.entries.last().map(|entry| &entry.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_is_visible_until_ttl_elapses() {
        let mut queue = ToastQueue::default();
        let id = queue.notify("Post created successfully!", ToastKind::Success, 10_000);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.messages()[0].id, id);

        assert_eq!(queue.expire(12_999), 0);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.expire(13_000), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.notify("Saved", ToastKind::Info, 0);
        assert!(queue.dismiss(&id));
        assert!(!queue.dismiss(&id));
        assert_eq!(queue.expire(10_000), 0);
    }

    #[test]
    fn same_millisecond_toasts_get_distinct_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.notify("one", ToastKind::Success, 42);
        let second = queue.notify("two", ToastKind::Error, 42);
        assert_ne!(first, second);

        assert!(queue.dismiss(&first));
        let remaining = queue.messages();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "two");
        assert_eq!(remaining[0].kind, ToastKind::Error);
    }

    #[test]
    fn expiry_keeps_later_toasts() {
        let mut queue = ToastQueue::new(3_000);
        queue.notify("early", ToastKind::Info, 0);
        queue.notify("late", ToastKind::Info, 2_000);
        assert_eq!(queue.expire(3_000), 1);
        assert_eq!(queue.last().map(|toast| toast.message.as_str()), Some("late"));
    }
}
