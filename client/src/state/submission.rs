//! Per-form submission state and the submit control derived from it.
//!
//! DESIGN
//! ======
//! Each attempt gets a fresh sequence number. Answers are accepted only for
//! the attempt in flight, and the result reducer keys its side effects on the
//! sequence rather than on re-renders, so a repeated `failed` still notifies
//! once per attempt.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::SubmissionResult;

/// Observable state of the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitControl {
    /// Interactive.
    #[default]
    Ready,
    /// An attempt is in flight.
    Pending,
    /// The attempt succeeded; terminal for this mounted form.
    DisabledSuccess,
}

impl SubmitControl {
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn shows_spinner(self) -> bool {
        !self.is_interactive()
    }

    /// Text for the polite live region announcing the control's state.
    pub fn live_label(self) -> &'static str {
        if self.is_interactive() { "Submit form" } else { "Loading" }
    }
}

/// Submission state scoped to one mounted auth form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    /// Sequence number of the latest attempt; `0` before the first one.
    pub seq: u64,
    pub pending: bool,
    pub result: SubmissionResult,
    pub succeeded: bool,
}

impl SubmissionState {
    pub fn control(&self) -> SubmitControl {
        if self.succeeded {
            SubmitControl::DisabledSuccess
        } else if self.pending {
            SubmitControl::Pending
        } else {
            SubmitControl::Ready
        }
    }

    /// Start a new attempt and return its sequence number.
    ///
    /// Returns `None` while an attempt is pending or after success.
    pub fn begin(&mut self) -> Option<u64> {
        if !self.control().is_interactive() {
            return None;
        }
        self.seq += 1;
        self.pending = true;
        Some(self.seq)
    }

    /// Record the endpoint's answer for attempt `seq`.
    ///
    /// Returns `false` when `seq` is not the attempt in flight.
    pub fn resolve(&mut self, seq: u64, result: SubmissionResult) -> bool {
        if !self.pending || seq != self.seq {
            return false;
        }
        self.pending = false;
        self.result = result;
        true
    }

    pub fn mark_success(&mut self) {
        self.succeeded = true;
        self.pending = false;
    }

    /// The attempt the reducer should react to, once an answer has arrived.
    pub fn settled(&self) -> Option<(u64, SubmissionResult)> {
        (!self.pending && self.seq > 0).then_some((self.seq, self.result))
    }
}
