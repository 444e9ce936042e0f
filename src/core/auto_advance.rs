use crate::core::carousel::{Carousel, Direction};
use crate::core::transition::{Transition, TransitionEvent};
use crate::domain::model::CarouselItem;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_positive_number, Validate};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(8000);
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceConfig {
    /// Time between two `Begin` events.
    pub interval: Duration,
    /// Time between a `Begin` and its `Commit`.
    pub transition_delay: Duration,
    /// Manual navigation restarts the interval.
    pub reset_on_manual: bool,
}

impl Default for AutoAdvanceConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            transition_delay: DEFAULT_TRANSITION_DELAY,
            reset_on_manual: false,
        }
    }
}

impl Validate for AutoAdvanceConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("auto_advance.interval_ms", self.interval.as_millis() as u64, 1)?;

        if self.transition_delay >= self.interval {
            return Err(SiteError::InvalidConfigValueError {
                field: "auto_advance.transition_delay_ms".to_string(),
                value: self.transition_delay.as_millis().to_string(),
                reason: format!(
                    "Transition delay must be shorter than the interval ({} ms)",
                    self.interval.as_millis()
                ),
            });
        }

        Ok(())
    }
}

#[derive(Debug)]
enum Control {
    Pause,
    Resume,
    /// Carries the instant of the manual action.
    ResetTimer(Instant),
}

/// Timer-driven forward navigation over a shared carousel.
///
/// The timer task emits a [`TransitionEvent::Begin`] every `interval` and the
/// matching [`TransitionEvent::Commit`] `transition_delay` later. Manual
/// navigation goes through the same handle and touches the same index.
/// Dropping the handle stops the timer.
pub struct AutoAdvance {
    carousel: Arc<Mutex<Carousel>>,
    control: mpsc::UnboundedSender<Control>,
    task: Option<JoinHandle<()>>,
    reset_on_manual: bool,
}

impl AutoAdvance {
    /// Must be called inside a tokio runtime.
    pub fn start(
        carousel: Carousel,
        config: AutoAdvanceConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<TransitionEvent>)> {
        config.validate()?;

        let carousel = Arc::new(Mutex::new(carousel));
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (control_tx, control_rx) = mpsc::unbounded_channel();

        tracing::info!(
            "Auto-advance started: every {:?}, transition {:?}",
            config.interval,
            config.transition_delay
        );

        let task = tokio::spawn(run_timer(
            Arc::clone(&carousel),
            config,
            control_rx,
            event_tx,
        ));

        let handle = Self {
            carousel,
            control: control_tx,
            task: Some(task),
            reset_on_manual: config.reset_on_manual,
        };
        Ok((handle, event_rx))
    }

    pub fn current(&self) -> CarouselItem {
        self.lock().current().clone()
    }

    pub fn index(&self) -> usize {
        self.lock().index()
    }

    /// Manual prev/next.
    pub fn advance(&self, direction: Direction) -> CarouselItem {
        let item = self.lock().advance(direction).clone();
        self.after_manual();
        item
    }

    pub fn jump_to(&self, index: isize) -> Result<CarouselItem> {
        let item = self.lock().jump_to(index)?.clone();
        self.after_manual();
        Ok(item)
    }

    /// Page hidden: no `Begin` fires until [`resume`](Self::resume).
    pub fn pause(&self) {
        self.send(Control::Pause);
    }

    /// Page visible again; the next `Begin` comes one full interval from now.
    pub fn resume(&self) {
        self.send(Control::Resume);
    }

    /// Cancels the recurring timer. Idempotent.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!("Auto-advance stopped at index {}", self.index());
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn after_manual(&self) {
        if self.reset_on_manual {
            self.send(Control::ResetTimer(Instant::now()));
        }
    }

    fn send(&self, control: Control) {
        if self.control.send(control).is_err() {
            tracing::debug!("Auto-advance timer is no longer running");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Carousel> {
        lock(&self.carousel)
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn lock(carousel: &Mutex<Carousel>) -> MutexGuard<'_, Carousel> {
    carousel.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn run_timer(
    carousel: Arc<Mutex<Carousel>>,
    config: AutoAdvanceConfig,
    mut control: mpsc::UnboundedReceiver<Control>,
    events: mpsc::UnboundedSender<TransitionEvent>,
) {
    let mut transition = Transition::new();
    let mut paused = false;
    let mut next_begin = Instant::now() + config.interval;
    // 淡出中：等待 commit 的時間點
    let mut commit_at: Option<Instant> = None;

    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(next_begin), if !paused && commit_at.is_none() => {
                let begin = transition.begin(&lock(&carousel), Direction::Forward);
                tracing::debug!("Transition begin at {}", begin.index());
                if events.send(begin).is_err() {
                    break;
                }
                // 下一輪從這次 begin 起算
                next_begin += config.interval;
                commit_at = Some(Instant::now() + config.transition_delay);
            }
            _ = tokio::time::sleep_until(commit_at.unwrap_or(next_begin)), if commit_at.is_some() => {
                commit_at = None;
                let commit = transition.commit(&mut lock(&carousel));
                if let Some(commit) = commit {
                    tracing::debug!("Transition commit at {}", commit.index());
                    if events.send(commit).is_err() {
                        break;
                    }
                }
            }
            cmd = control.recv() => match cmd {
                Some(Control::Pause) => {
                    tracing::debug!("Auto-advance paused");
                    paused = true;
                }
                Some(Control::Resume) => {
                    if paused {
                        tracing::debug!("Auto-advance resumed");
                        paused = false;
                        next_begin = Instant::now() + config.interval;
                    }
                }
                Some(Control::ResetTimer(at)) => {
                    next_begin = at + config.interval;
                }
                None => break,
            }
        }
    }
}
