//! One-shot delayed transition out of the splash screen.

use crate::types::FlowEvent;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Waiting,
    /// Terminal for the owning screen instance.
    Fired,
}

/// Idle → Waiting on activation, Waiting → Fired once the delay elapses,
/// Waiting → Idle on cancellation. Dropping the timer cancels it.
#[derive(Debug)]
pub struct SplashTimer {
    delay: Duration,
    phase: TimerPhase,
    generation: u64,
    cancel: Option<CancellationToken>,
}

impl SplashTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: TimerPhase::Idle,
            generation: 0,
            cancel: None,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start waiting. The spawned task sends `FlowEvent::SplashElapsed` on
    /// `events` unless cancelled first. Only valid from `Idle`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn activate(&mut self, events: Sender<FlowEvent>) -> bool {
        if self.phase != TimerPhase::Idle {
            return false;
        }
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let token = CancellationToken::new();
        let child = token.child_token();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = child.cancelled() => {
                    tracing::debug!(generation, "splash timer cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    if events.send(FlowEvent::SplashElapsed { generation }).await.is_err() {
                        tracing::warn!(generation, "splash timer fired after the flow closed");
                    }
                }
            }
        });

        self.cancel = Some(token);
        self.phase = TimerPhase::Waiting;
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(generation, delay_ms, "splash timer armed");
        true
    }

    /// Waiting → Idle. Returns whether a pending wait was cancelled.
    pub fn cancel(&mut self) -> bool {
        let Some(token) = self.cancel.take() else {
            return false;
        };
        token.cancel();
        if self.phase == TimerPhase::Waiting {
            self.phase = TimerPhase::Idle;
            return true;
        }
        false
    }

    /// Accept an expiry for `generation`. Stale or duplicate expiries return
    /// `false` and leave the phase untouched.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.phase != TimerPhase::Waiting || generation != self.generation {
            return false;
        }
        self.cancel = None;
        self.phase = TimerPhase::Fired;
        true
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = SplashTimer::new(Duration::from_millis(2_500));
        let started = tokio::time::Instant::now();

        assert!(timer.activate(tx));
        assert_eq!(timer.phase(), TimerPhase::Waiting);

        let event = rx.recv().await;
        assert_eq!(event, Some(FlowEvent::SplashElapsed { generation: 1 }));
        assert!(started.elapsed() >= Duration::from_millis(2_500));

        assert!(timer.complete(1));
        assert_eq!(timer.phase(), TimerPhase::Fired);
        assert!(!timer.complete(1));
    }

    #[tokio::test(start_paused = true)]
    async fn fired_timer_cannot_be_rearmed() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = SplashTimer::new(Duration::from_millis(10));
        timer.activate(tx.clone());
        let _ = rx.recv().await;
        timer.complete(1);

        assert!(!timer.activate(tx));
        assert!(!timer.cancel());
        assert_eq!(timer.phase(), TimerPhase::Fired);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_expiry_suppresses_the_event() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = SplashTimer::new(Duration::from_millis(2_500));
        timer.activate(tx);

        tokio::time::advance(Duration::from_millis(1_000)).await;
        assert!(timer.cancel());
        assert_eq!(timer.phase(), TimerPhase::Idle);

        let outcome = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(matches!(outcome, Ok(None) | Err(_)), "got {outcome:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_timer_cancels_it() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = SplashTimer::new(Duration::from_millis(2_500));
        timer.activate(tx);
        drop(timer);

        let outcome = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(matches!(outcome, Ok(None) | Err(_)), "got {outcome:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn stale_generation_is_rejected() {
        let (tx, _rx) = mpsc::channel(4);
        let mut timer = SplashTimer::new(Duration::from_millis(2_500));
        timer.activate(tx.clone());
        timer.cancel();
        timer.activate(tx);

        assert!(!timer.complete(1));
        assert!(timer.complete(2));
    }
}
