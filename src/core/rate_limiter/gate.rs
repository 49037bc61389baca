//! Core admission gate implementation

use super::error::GateError;
use super::types::{GateConfig, GateStats, WindowState};
use super::window::Window;
use crate::config::models::rate_limit::RateLimitConfig;
use parking_lot::{Condvar, Mutex};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;
use tracing::{debug, info, trace};

/// Outcome of one locked admission attempt
enum Admission {
    Admitted,
    Wait(Duration),
}

/// Admits at most `capacity` callers per `period`, across all threads and tasks
///
/// The window restarts lazily: the first caller that observes
/// `now - start >= period` while holding the lock resets it, then signals every
/// waiter so they re-validate. Waiters never hold the lock while they sleep.
#[derive(Debug)]
pub struct RateLimitedGate {
    config: GateConfig,
    window: Mutex<Window>,
    /// Wakes async waiters after a reset
    reset_signal: Notify,
    /// Wakes blocking waiters after a reset
    reset_condvar: Condvar,
    total_admitted: AtomicU64,
    total_rejected: AtomicU64,
    total_cancelled: AtomicU64,
    resets: AtomicU64,
}

impl RateLimitedGate {
    /// Create a new gate, failing on a zero capacity or zero period
    pub fn new(config: GateConfig) -> Result<Self, GateError> {
        config.validate()?;

        info!(
            "Creating rate limited gate: {} admissions per {:?}",
            config.capacity, config.period
        );

        Ok(Self {
            config,
            window: Mutex::new(Window::new(Instant::now())),
            reset_signal: Notify::new(),
            reset_condvar: Condvar::new(),
            total_admitted: AtomicU64::new(0),
            total_rejected: AtomicU64::new(0),
            total_cancelled: AtomicU64::new(0),
            resets: AtomicU64::new(0),
        })
    }

    /// Create a gate from the `rate_limit` section of the configuration
    pub fn from_config(config: &RateLimitConfig) -> Result<Self, GateError> {
        Self::new(GateConfig::from(config))
    }

    /// Wait until the current window has room, then count one admission.
    ///
    /// Dropping the returned future before it completes abandons the wait
    /// without touching the window count.
    pub async fn acquire(&self) {
        loop {
            let notified = self.reset_signal.notified();
            tokio::pin!(notified);

            let wait = {
                let mut window = self.window.lock();
                match self.admit_locked(&mut window, Instant::now()) {
                    Admission::Admitted => return,
                    Admission::Wait(remaining) => {
                        // Register before unlocking so a reset in the gap still wakes us
                        notified.as_mut().enable();
                        remaining
                    }
                }
            };

            trace!("Gate saturated, waiting up to {:?}", wait);
            tokio::select! {
                _ = tokio::time::sleep(wait) => {}
                _ = &mut notified => {}
            }
        }
    }

    /// Like [`acquire`](Self::acquire), giving up after `timeout`
    pub async fn acquire_timeout(&self, timeout: Duration) -> Result<(), GateError> {
        match tokio::time::timeout(timeout, self.acquire()).await {
            Ok(()) => Ok(()),
            Err(_) => Err(self.cancelled()),
        }
    }

    /// Like [`acquire`](Self::acquire), giving up as soon as `cancel` completes
    pub async fn acquire_until<F>(&self, cancel: F) -> Result<(), GateError>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.acquire() => Ok(()),
            _ = cancel => Err(self.cancelled()),
        }
    }

    /// Blocking variant of [`acquire`](Self::acquire) for synchronous threads.
    ///
    /// Must not be called from inside an async task.
    pub fn acquire_blocking(&self) {
        // Without a deadline the wait only ends in admission
        let _ = self.wait_blocking(None);
    }

    /// Blocking variant of [`acquire_timeout`](Self::acquire_timeout).
    ///
    /// A timeout too large to represent as a deadline waits without one.
    pub fn acquire_blocking_timeout(&self, timeout: Duration) -> Result<(), GateError> {
        self.wait_blocking(Instant::now().checked_add(timeout))
    }

    /// Admit immediately if the window has room, otherwise return false
    pub fn try_acquire(&self) -> bool {
        let mut window = self.window.lock();
        match self.admit_locked(&mut window, Instant::now()) {
            Admission::Admitted => true,
            Admission::Wait(_) => {
                self.total_rejected.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    /// Acquire, then run the guarded future and hand back its result unchanged
    pub async fn gated<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        self.acquire().await;
        f.await
    }

    /// Admissions the next caller could get without waiting
    pub fn available(&self) -> u32 {
        let window = self.window.lock();
        if window.is_expired(Instant::now(), self.config.period) {
            self.config.capacity
        } else {
            self.config.capacity.saturating_sub(window.count)
        }
    }

    /// State the next caller would observe. Does not reset the window.
    pub fn state(&self) -> WindowState {
        let window = self.window.lock();
        self.state_of(&window, Instant::now())
    }

    /// Snapshot of the window and lifetime counters
    pub fn stats(&self) -> GateStats {
        let now = Instant::now();
        let window = self.window.lock();
        GateStats {
            capacity: self.config.capacity,
            admitted_in_window: window.count,
            window_elapsed: window.elapsed(now),
            state: self.state_of(&window, now),
            total_admitted: self.total_admitted.load(Ordering::Relaxed),
            total_rejected: self.total_rejected.load(Ordering::Relaxed),
            total_cancelled: self.total_cancelled.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
        }
    }

    /// Configured capacity
    pub fn capacity(&self) -> u32 {
        self.config.capacity
    }

    /// Configured window length
    pub fn period(&self) -> Duration {
        self.config.period
    }

    /// Gate configuration
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// One read-modify-write of the window. Caller holds the lock.
    fn admit_locked(&self, window: &mut Window, now: Instant) -> Admission {
        if window.is_expired(now, self.config.period) {
            window.reset(now);
            let resets = self.resets.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Rate limit window reset (#{})", resets);
            self.reset_signal.notify_waiters();
            self.reset_condvar.notify_all();
        }

        if window.admit(self.config.capacity) {
            self.total_admitted.fetch_add(1, Ordering::Relaxed);
            trace!(
                "Admitted {}/{} in current window",
                window.count, self.config.capacity
            );
            Admission::Admitted
        } else {
            Admission::Wait(window.remaining(now, self.config.period))
        }
    }

    fn wait_blocking(&self, deadline: Option<Instant>) -> Result<(), GateError> {
        let mut window = self.window.lock();
        loop {
            let now = Instant::now();
            let remaining = match self.admit_locked(&mut window, now) {
                Admission::Admitted => return Ok(()),
                Admission::Wait(remaining) => remaining,
            };

            let wait = match deadline {
                Some(deadline) if now >= deadline => {
                    drop(window);
                    return Err(self.cancelled());
                }
                Some(deadline) => remaining.min(deadline - now),
                None => remaining,
            };

            // Releases the lock while parked
            self.reset_condvar.wait_for(&mut window, wait);
        }
    }

    fn state_of(&self, window: &Window, now: Instant) -> WindowState {
        if !window.is_expired(now, self.config.period) && window.is_saturated(self.config.capacity)
        {
            WindowState::Saturated
        } else {
            WindowState::Open
        }
    }

    fn cancelled(&self) -> GateError {
        self.total_cancelled.fetch_add(1, Ordering::Relaxed);
        debug!("Waiter cancelled before admission");
        GateError::Cancelled
    }
}
