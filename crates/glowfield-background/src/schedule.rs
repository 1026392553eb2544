//! Per-frame schedule with explicit cancellation.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that, once tripped, stops a schedule for good.
///
/// Clones observe the same flag. Single-threaded by construction.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A queued frame, consumed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket {
    /// Zero-based sequence number of the frame.
    pub seq: u64,
}

/// A repeating frame task: at most one frame is pending at any time.
#[derive(Debug)]
pub struct FrameSchedule {
    token: CancelToken,
    pending: Option<FrameTicket>,
    next_seq: u64,
}

impl FrameSchedule {
    /// Begin a schedule with its first frame already queued.
    pub fn begin() -> Self {
        let mut schedule = Self {
            token: CancelToken::new(),
            pending: None,
            next_seq: 0,
        };
        schedule.request_next();
        schedule
    }

    /// Token tripped when this schedule is cancelled.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Take the pending frame, if any and not cancelled.
    pub fn take_due(&mut self) -> Option<FrameTicket> {
        if self.token.is_cancelled() {
            self.pending = None;
            return None;
        }
        self.pending.take()
    }

    /// Queue the following frame. Ignored once cancelled or while a frame is pending.
    pub fn request_next(&mut self) {
        if self.token.is_cancelled() || self.pending.is_some() {
            return;
        }
        self.pending = Some(FrameTicket { seq: self.next_seq });
        self.next_seq += 1;
    }

    /// Drop the pending frame and trip the token.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.token.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some() && !self.token.is_cancelled()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for FrameSchedule {
    fn drop(&mut self) {
        self.cancel();
    }
}
