//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Pushing is fire-and-forget: callers get an id back but nothing reads it
//! except the dismiss timer and the toast's own close handler.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Upper bound on simultaneously visible toasts; the oldest is dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    /// CSS modifier for the rendered toast.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Error => "toast--error",
            Self::Success => "toast--success",
        }
    }
}

/// A user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub description: String,
}

impl Notice {
    pub fn error(description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, description: description.into() }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, description: description.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    /// Queue a notice and return the id of the new toast.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}
