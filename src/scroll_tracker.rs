use std::fmt::{Display, Formatter};

const IDLE_VELOCITY: f64 = 0.01;

/// What the host can tell about its viewport.
pub trait ViewportMetrics {
    /// `None` when the host cannot report a scroll offset.
    fn scroll_offset(&self) -> Option<f64>;
    fn document_height(&self) -> f64;
    fn viewport_height(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    fn from_velocity(velocity: f64) -> Direction {
        if velocity.abs() <= IDLE_VELOCITY {
            Direction::Idle
        } else if velocity > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Vertical offset in pixels.
    pub position: f64,
    /// `position / (document - viewport)`, within [0, 1].
    pub progress: f64,
    /// Pixels per millisecond, positive when scrolling down.
    pub velocity: f64,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy)]
struct Baseline {
    position: f64,
    time_ms: f64,
}

/// Derives [`ScrollState`] from scroll notifications.
///
/// Notifications only mark a recomputation as pending; the recomputation
/// happens on the next frame, so a burst of notifications within one frame
/// costs a single sample.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
    baseline: Option<Baseline>,
    pending: bool,
    detached: bool,
}

pub fn progress(position: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_scrollable = document_height - viewport_height;
    if max_scrollable <= 0.0 {
        return 0.0;
    }
    (position / max_scrollable).clamp(0.0, 1.0)
}

impl ScrollTracker {
    pub fn new() -> ScrollTracker {
        ScrollTracker::default()
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Returns `true` when this notification scheduled a recomputation.
    pub fn on_scroll_event(&mut self) -> bool {
        if self.detached || self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn on_frame(&mut self, metrics: &impl ViewportMetrics, now_ms: f64) -> Option<ScrollState> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        let position = metrics.scroll_offset().unwrap_or(0.0).max(0.0);
        Some(self.sample(position, metrics.document_height(), metrics.viewport_height(), now_ms))
    }

    pub fn sample(&mut self, position: f64, document_height: f64, viewport_height: f64, now_ms: f64) -> ScrollState {
        let velocity = match self.baseline {
            Some(previous) if now_ms > previous.time_ms => {
                (position - previous.position) / (now_ms - previous.time_ms)
            }
            _ => 0.0,
        };

        self.baseline = Some(Baseline { position, time_ms: now_ms });
        self.state = ScrollState {
            position,
            progress: progress(position, document_height, viewport_height),
            velocity,
            direction: Direction::from_velocity(velocity),
        };
        self.state
    }

    /// Cancels any pending recomputation and ignores later notifications.
    pub fn detach(&mut self) {
        self.pending = false;
        self.detached = true;
    }

    pub fn reset(&mut self) {
        *self = ScrollTracker::default();
    }
}
