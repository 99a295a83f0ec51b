//! Timer-driven stand-in for uploading and processing one document.
//!
//! The record lives wherever the simulator lives (the UI thread, or the
//! headless loop). Timers are tokio tasks that only send [`TimerEvent`]s
//! back over a channel; the record is mutated when those events are
//! applied by [`UploadSimulator::poll`] or [`UploadSimulator::advance`].
//!
//! At most one timer task exists at a time, held in a single slot. Every
//! `start` and `reset` bumps the generation and replaces the slot, which
//! aborts the old task. Events tagged with an older generation that were
//! already queued are dropped when applied.

use super::entropy::{Entropy, MAX_STEP, MIN_STEP};
use super::types::{FileCandidate, UploadRecord, PROGRESS_CEILING};
use crate::config::SimulatorConfig;
use derivative::Derivative;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Most ticks any record can use: every step is at least `MIN_STEP`.
const MAX_TICKS: u8 = PROGRESS_CEILING.div_ceil(MIN_STEP);

/// Called from the timer task after each event is queued.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerEvent {
    Tick { generation: u64 },
    Complete { generation: u64 },
}

impl TimerEvent {
    fn generation(self) -> u64 {
        match self {
            TimerEvent::Tick { generation } | TimerEvent::Complete { generation } => generation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Ticker,
    Completion,
}

#[derive(Debug)]
struct TimerSlot {
    kind: TimerKind,
    handle: JoinHandle<()>,
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(kind = ?self.kind, "cancelling pending timer");
            self.handle.abort();
        }
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct UploadSimulator {
    record: Option<UploadRecord>,
    slot: Option<TimerSlot>,
    generation: u64,
    config: SimulatorConfig,
    #[derivative(Debug = "ignore")]
    entropy: Box<dyn Entropy>,
    #[derivative(Debug = "ignore")]
    notify: Option<Notify>,
    runtime: Handle,
    events_tx: UnboundedSender<TimerEvent>,
    events_rx: UnboundedReceiver<TimerEvent>,
}

impl UploadSimulator {
    pub fn new(config: SimulatorConfig, entropy: Box<dyn Entropy>, runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            record: None,
            slot: None,
            generation: 0,
            config,
            entropy,
            notify: None,
            runtime,
            events_tx,
            events_rx,
        }
    }

    /// Wakes an event loop (e.g. requests a repaint) whenever a timer fires.
    pub fn with_notify(mut self, notify: Notify) -> Self {
        self.notify = Some(notify);
        self
    }

    pub fn record(&self) -> Option<&UploadRecord> {
        self.record.as_ref()
    }

    /// Replaces whatever was in flight with a fresh record for `file`.
    pub fn start(&mut self, file: FileCandidate) {
        self.generation += 1;
        let record = UploadRecord::new(file);
        info!(
            file = record.file_name(),
            file_type = %record.file_type(),
            size = record.size_bytes(),
            generation = self.generation,
            "upload started"
        );
        self.record = Some(record);
        self.slot = Some(self.spawn_ticker());
    }

    /// Starts the first file of a selection. An empty selection does nothing.
    pub fn start_first(&mut self, files: impl IntoIterator<Item = FileCandidate>) {
        if let Some(file) = files.into_iter().next() {
            self.start(file);
        }
    }

    pub fn reset(&mut self) {
        if self.record.is_none() && self.slot.is_none() {
            return;
        }

        self.generation += 1;
        self.slot = None;
        if let Some(record) = self.record.take() {
            info!(
                file = record.file_name(),
                phase = ?record.phase(),
                progress = record.progress_percent(),
                "upload dismissed"
            );
        }
    }

    /// Applies every queued timer event. Returns whether the record changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Waits for the next timer event that changes the record.
    ///
    /// Returns false straight away when nothing is scheduled, i.e. with no
    /// record or once the record is terminal.
    pub async fn advance(&mut self) -> bool {
        loop {
            if self.slot.is_none() {
                return false;
            }
            let Some(event) = self.events_rx.recv().await else {
                return false;
            };
            if self.apply(event) {
                return true;
            }
        }
    }

    pub(crate) fn apply(&mut self, event: TimerEvent) -> bool {
        if event.generation() != self.generation {
            debug!(
                event_generation = event.generation(),
                generation = self.generation,
                "dropping stale timer event"
            );
            return false;
        }

        match event {
            TimerEvent::Tick { .. } => self.apply_tick(),
            TimerEvent::Complete { .. } => self.apply_completion(),
        }
    }

    fn apply_tick(&mut self) -> bool {
        let Some(record) = self.record.as_mut() else {
            return false;
        };
        if record.phase().is_terminal() || record.progress_percent() >= PROGRESS_CEILING {
            return false;
        }

        let step = self.entropy.progress_step().clamp(MIN_STEP, MAX_STEP);
        let reached_ceiling = record.advance_progress(step);
        debug!(
            file = record.file_name(),
            progress = record.progress_percent(),
            "upload progress"
        );

        if reached_ceiling {
            self.slot = Some(self.spawn_completion());
        }
        true
    }

    fn apply_completion(&mut self) -> bool {
        let Some(record) = self.record.as_mut() else {
            return false;
        };
        if record.phase().is_terminal() {
            return false;
        }

        let success = self.entropy.succeeds(self.config.success_rate);
        record.finish(success);
        info!(
            file = record.file_name(),
            phase = ?record.phase(),
            "upload finished"
        );
        self.slot = None;
        true
    }

    fn spawn_ticker(&self) -> TimerSlot {
        let generation = self.generation;
        let period = self.config.tick_interval;
        let events = self.events_tx.clone();
        let notify = self.notify.clone();

        let handle = self.runtime.spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for _ in 0..MAX_TICKS {
                ticks.tick().await;
                if events.send(TimerEvent::Tick { generation }).is_err() {
                    break;
                }
                if let Some(notify) = &notify {
                    notify();
                }
            }
        });

        TimerSlot {
            kind: TimerKind::Ticker,
            handle,
        }
    }

    fn spawn_completion(&self) -> TimerSlot {
        let generation = self.generation;
        let delay = self.config.completion_delay;
        let events = self.events_tx.clone();
        let notify = self.notify.clone();

        let handle = self.runtime.spawn(async move {
            time::sleep(delay).await;
            if events.send(TimerEvent::Complete { generation }).is_ok() {
                if let Some(notify) = &notify {
                    notify();
                }
            }
        });

        TimerSlot {
            kind: TimerKind::Completion,
            handle,
        }
    }

    #[cfg(test)]
    fn pending_timer(&self) -> Option<TimerKind> {
        self.slot.as_ref().map(|slot| slot.kind)
    }
}

#[cfg(test)]
#[path = "simulator_test.rs"]
mod tests;
