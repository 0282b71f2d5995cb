//! Word-pacing state machine.
//!
//! The engine walks a [`WordList`], shows one word per frame and waits a
//! punctuation-dependent delay before moving on. It never sleeps or spawns:
//! the owner calls [`PlaybackEngine::poll`] whenever it wakes up, and
//! [`PlaybackEngine::next_deadline`] tells it when the next wake-up is due.
//!
//! At most one advance is pending at any time. Every transition clears it
//! before scheduling a new one or finishing.

use super::clock::{Clock, SystemClock};
use super::config::TimingConfig;
use super::frame::{RenderFrame, RenderSink};
use crate::reading::{word_delay, WordList};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Cursor at the first word, nothing scheduled
    #[default]
    Idle,
    /// Advancing on a timer
    Running,
    /// Cursor held, nothing scheduled
    Paused,
}

/// The single scheduled advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub due: Instant,
    pub delay: Duration,
}

pub struct PlaybackEngine<S, C = SystemClock> {
    words: WordList,
    cursor: usize,
    wpm: u32,
    status: PlaybackStatus,
    pending: Option<PendingAdvance>,
    config: TimingConfig,
    clock: C,
    sink: S,
}

impl<S: RenderSink> PlaybackEngine<S, SystemClock> {
    pub fn new(config: TimingConfig, sink: S) -> Self {
        Self::with_clock(config, SystemClock, sink)
    }
}

impl<S: RenderSink, C: Clock> PlaybackEngine<S, C> {
    pub fn with_clock(config: TimingConfig, clock: C, sink: S) -> Self {
        let wpm = config.clamp_wpm(config.wpm);
        Self {
            words: WordList::new(),
            cursor: 0,
            wpm,
            status: PlaybackStatus::Idle,
            pending: None,
            config,
            clock,
            sink,
        }
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == PlaybackStatus::Running
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn pending_advance(&self) -> Option<&PendingAdvance> {
        self.pending.as_ref()
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Time left before the pending advance fires, zero if it is overdue.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending.map(|p| p.due.saturating_duration_since(now))
    }

    /// Frame for the word under the cursor, blank when there is none.
    pub fn current_frame(&self) -> RenderFrame {
        RenderFrame::at(&self.words, self.cursor).unwrap_or_else(RenderFrame::blank)
    }

    /// Replaces the word list and resets to the first word.
    pub fn load(&mut self, words: WordList) {
        debug!(words = words.len(), "loading word list");
        self.words = words;
        self.reset();
    }

    /// Starts or resumes playback. Does nothing while already running.
    pub fn play(&mut self) {
        if self.is_running() {
            return;
        }

        if self.cursor >= self.words.len() {
            self.cursor = 0;
        }

        if self.words.is_empty() {
            debug!("nothing to play");
            self.reset();
            return;
        }

        self.status = PlaybackStatus::Running;
        debug!(cursor = self.cursor, wpm = self.wpm, "playback started");
        self.emit_current();
        self.schedule_next();
    }

    /// Holds the current word. Only has an effect while running.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }

        self.cancel_pending();
        self.status = PlaybackStatus::Paused;
        debug!(cursor = self.cursor, "playback paused");
    }

    /// Stops playback and rewinds to the first word.
    pub fn stop(&mut self) {
        self.reset();
    }

    /// Same as [`stop`](Self::stop).
    pub fn restart(&mut self) {
        self.reset();
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Sets the reading rate. An advance already waiting keeps its delay.
    pub fn set_wpm(&mut self, wpm: u32) {
        self.wpm = self.config.clamp_wpm(wpm);
        debug!(wpm = self.wpm, "rate changed");
    }

    pub fn adjust_wpm(&mut self, delta: i32) {
        let target = (self.wpm as i64 + delta as i64).max(0) as u32;
        self.set_wpm(target);
    }

    /// Fires the pending advance if it is due. Returns whether it fired.
    pub fn poll(&mut self) -> bool {
        match self.pending {
            Some(pending) if self.clock.now() >= pending.due => {
                self.pending = None;
                self.step();
                true
            }
            _ => false,
        }
    }

    fn step(&mut self) {
        self.cursor += 1;

        if self.cursor >= self.words.len() {
            debug!(words = self.words.len(), "playback finished");
            self.reset();
        } else {
            self.emit_current();
            self.schedule_next();
        }
    }

    fn schedule_next(&mut self) {
        self.cancel_pending();

        let Some(word) = self.words.get(self.cursor) else {
            return;
        };
        let delay = word_delay(word, self.wpm, &self.config);
        self.pending = Some(PendingAdvance {
            due: self.clock.now() + delay,
            delay,
        });
    }

    fn cancel_pending(&mut self) {
        self.pending = None;
    }

    fn reset(&mut self) {
        self.cancel_pending();
        self.status = PlaybackStatus::Idle;
        self.cursor = 0;

        let frame = self.current_frame();
        self.sink.render_frame(&frame);
        self.sink.reset_progress();
    }

    fn emit_current(&mut self) {
        let frame = self.current_frame();
        self.sink.render_frame(&frame);
    }
}
