use crossbeam_channel::{Receiver, never, tick};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Countdown,
    Blink,
}

/// A periodic timer the session wants running. Handles are never reused:
/// restarting a timer always produces a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub id: TimerId,
    pub kind: TimerKind,
    pub period: Duration,
}

struct ActiveTimer {
    id: TimerId,
    rx: Receiver<Instant>,
}

/// Backs session timer handles with real tick channels.
///
/// After every event the loop calls `sync`; a handle that changed or
/// disappeared drops its channel, which stops the underlying ticker.
#[derive(Default)]
pub struct TimerDriver {
    countdown: Option<ActiveTimer>,
    blink: Option<ActiveTimer>,
}

impl TimerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, countdown: Option<TimerHandle>, blink: Option<TimerHandle>) {
        sync_slot(&mut self.countdown, countdown);
        sync_slot(&mut self.blink, blink);
    }

    pub fn active_id(&self, kind: TimerKind) -> Option<TimerId> {
        self.slot(kind).as_ref().map(|t| t.id)
    }

    /// Receiver for the given timer, or one that never fires when idle.
    pub fn receiver(&self, kind: TimerKind) -> (Option<TimerId>, Receiver<Instant>) {
        match self.slot(kind) {
            Some(timer) => (Some(timer.id), timer.rx.clone()),
            None => (None, never()),
        }
    }

    fn slot(&self, kind: TimerKind) -> &Option<ActiveTimer> {
        match kind {
            TimerKind::Countdown => &self.countdown,
            TimerKind::Blink => &self.blink,
        }
    }
}

fn sync_slot(slot: &mut Option<ActiveTimer>, wanted: Option<TimerHandle>) {
    if let (Some(active), Some(handle)) = (slot.as_ref(), wanted)
        && active.id == handle.id
    {
        return;
    }
    *slot = wanted.map(|handle| ActiveTimer {
        id: handle.id,
        rx: tick(handle.period),
    });
}
