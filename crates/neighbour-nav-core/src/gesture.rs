//! Two-finger swipe recognition.
//!
//! [`SwipeRecognizer`] consumes raw touch-start / touch-move / touch-end
//! events and emits at most one [`SwipeDirection`] per physical gesture.
//!
//! # State Machine
//!
//! ```text
//! NoTouch --2 touches--> Considering --|dx| > min--> Tracking --lift--> Complete
//!                             |                          |                 |
//!                             +------> Invalid <---------+                 |
//!                                         |                                |
//! NoTouch <------------ zero active contacts (from any state) -------------+
//! ```
//!
//! A cancelled gesture follows the same paths but never emits.
//!
//! A move is rejected when either finger travels too far vertically or the
//! fingers move in opposite horizontal directions (pinch, rotate, scroll).
//! Propagation of move events is only suppressed from the moment tracking
//! starts, so small incidental touches never block native scrolling.

use crate::config::{MAX_Y_THRESHOLD, MIN_X_THRESHOLD, TWO_FINGER_SWIPE_THRESHOLD};
use crate::models::TouchPoint;
use crate::navigator::Direction;

// =============================================================================
// Public Types
// =============================================================================

/// Direction of a recognized swipe, named after the finger motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Navigation step for this swipe.
    ///
    /// Swiping right goes back, like a back gesture; swiping left goes
    /// forward.
    pub fn direction(self) -> Direction {
        match self {
            SwipeDirection::Left => Direction::Forward,
            SwipeDirection::Right => Direction::Backward,
        }
    }
}

/// What the host should do with the event that was just handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Let default handlers (scrolling, zooming) see the event
    Continue,
    /// Stop the event from reaching other handlers
    Suppress,
}

/// Observable recognizer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    NoTouch,
    Considering,
    Tracking,
    Invalid,
    Complete,
}

/// Distance thresholds in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Horizontal travel that starts tracking
    pub min_x_threshold: f64,
    /// Vertical travel that rejects the gesture
    pub max_y_threshold: f64,
    /// Horizontal travel at lift-off that emits a swipe
    pub swipe_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_x_threshold: MIN_X_THRESHOLD,
            max_y_threshold: MAX_Y_THRESHOLD,
            swipe_threshold: TWO_FINGER_SWIPE_THRESHOLD,
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Recognizer state together with the data that is valid in it.
#[derive(Clone, Copy, Debug)]
enum Session {
    NoTouch,
    Considering {
        origin: [TouchPoint; 2],
    },
    Tracking {
        origin: [TouchPoint; 2],
        latest: [TouchPoint; 2],
    },
    Invalid,
    Complete,
}

impl Session {
    fn state(&self) -> GestureState {
        match self {
            Session::NoTouch => GestureState::NoTouch,
            Session::Considering { .. } => GestureState::Considering,
            Session::Tracking { .. } => GestureState::Tracking,
            Session::Invalid => GestureState::Invalid,
            Session::Complete => GestureState::Complete,
        }
    }
}

/// Per-finger travel, measured as origin minus current position.
///
/// Positive `dx` means the finger moved left.
#[derive(Clone, Copy, Debug)]
struct Displacement {
    dx: [f64; 2],
    dy: [f64; 2],
}

impl Displacement {
    fn between(origin: &[TouchPoint; 2], current: &[TouchPoint; 2]) -> Self {
        Self {
            dx: [origin[0].x - current[0].x, origin[1].x - current[1].x],
            dy: [origin[0].y - current[0].y, origin[1].y - current[1].y],
        }
    }

    fn is_rejected(&self, config: &GestureConfig) -> bool {
        self.dy.iter().any(|dy| dy.abs() > config.max_y_threshold)
            || !same_direction(self.dx[0], self.dx[1])
    }

    fn exceeds(&self, threshold: f64) -> bool {
        self.dx.iter().any(|dx| dx.abs() > threshold)
    }

    fn swipe(&self, threshold: f64) -> Option<SwipeDirection> {
        if self.dx.iter().all(|dx| *dx > threshold) {
            Some(SwipeDirection::Left)
        } else if self.dx.iter().all(|dx| *dx < -threshold) {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

/// Both fingers moving the same horizontal way (or not at all).
fn same_direction(dx1: f64, dx2: f64) -> bool {
    dx1 * dx2 > 0.0 || dx1 == dx2
}

fn first_two(touches: &[TouchPoint]) -> Option<[TouchPoint; 2]> {
    match touches {
        [first, second, ..] => Some([*first, *second]),
        _ => None,
    }
}

// =============================================================================
// Recognizer
// =============================================================================

/// State machine turning touch events into swipe signals.
///
/// Events must be fed in dispatch order. One recognizer follows one
/// two-finger gesture at a time.
pub struct SwipeRecognizer {
    config: GestureConfig,
    session: Session,
    on_swipe: Box<dyn FnMut(SwipeDirection)>,
}

impl SwipeRecognizer {
    /// Create a recognizer with default thresholds.
    pub fn new(on_swipe: impl FnMut(SwipeDirection) + 'static) -> Self {
        Self::with_config(GestureConfig::default(), on_swipe)
    }

    pub fn with_config(
        config: GestureConfig,
        on_swipe: impl FnMut(SwipeDirection) + 'static,
    ) -> Self {
        Self {
            config,
            session: Session::NoTouch,
            on_swipe: Box::new(on_swipe),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.session.state()
    }

    fn transition(&mut self, next: Session) {
        if self.session.state() != next.state() {
            log::trace!("gesture {:?} -> {:?}", self.session.state(), next.state());
        }
        self.session = next;
    }

    /// Handle a touch-start event with all currently active contacts.
    ///
    /// A session only begins from `NoTouch` with exactly two contacts.
    /// Fingers added to a running gesture do not start a new one.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        if let (Session::NoTouch, [first, second]) = (self.session, touches) {
            self.transition(Session::Considering {
                origin: [*first, *second],
            });
        }
    }

    /// Handle a touch-move event with all currently active contacts.
    ///
    /// Only the first two contacts are compared with the origin.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Propagation {
        let (origin, tracking) = match self.session {
            Session::Considering { origin } => (origin, false),
            Session::Tracking { origin, .. } => (origin, true),
            _ => return Propagation::Continue,
        };
        let held = if tracking {
            Propagation::Suppress
        } else {
            Propagation::Continue
        };

        let Some(current) = first_two(touches) else {
            return held;
        };

        let displacement = Displacement::between(&origin, &current);
        if displacement.is_rejected(&self.config) {
            self.transition(Session::Invalid);
            return held;
        }

        if tracking || displacement.exceeds(self.config.min_x_threshold) {
            self.transition(Session::Tracking {
                origin,
                latest: current,
            });
            return Propagation::Suppress;
        }

        Propagation::Continue
    }

    /// Handle a touch-end event.
    ///
    /// `remaining` holds the contacts still down, `lifted` the contacts that
    /// just ended. A tracked gesture is judged at lift-off and completes
    /// whether or not it reached the swipe threshold. Zero remaining
    /// contacts always return the recognizer to `NoTouch`.
    pub fn touch_end(&mut self, remaining: &[TouchPoint], lifted: &[TouchPoint]) -> Propagation {
        let propagation = self.end_propagation();

        if let Session::Tracking { origin, latest } = self.session {
            let end = lift_off_positions(&origin, &latest, remaining, lifted);
            let swipe = Displacement::between(&origin, &end).swipe(self.config.swipe_threshold);
            self.transition(Session::Complete);
            if let Some(direction) = swipe {
                log::debug!("two-finger swipe {:?}", direction);
                (self.on_swipe)(direction);
            }
        }

        if remaining.is_empty() {
            self.transition(Session::NoTouch);
        }

        propagation
    }

    /// Handle a touch-cancel event.
    ///
    /// The running gesture is abandoned without emitting: a tracked session
    /// becomes `Complete`, one still being considered becomes `Invalid`.
    /// Zero remaining contacts return the recognizer to `NoTouch`.
    pub fn touch_cancel(&mut self, remaining: &[TouchPoint]) -> Propagation {
        let propagation = self.end_propagation();

        match self.session {
            Session::Tracking { .. } => {
                log::debug!("two-finger swipe cancelled");
                self.transition(Session::Complete);
            }
            Session::Considering { .. } => self.transition(Session::Invalid),
            Session::NoTouch | Session::Invalid | Session::Complete => {}
        }

        if remaining.is_empty() {
            self.transition(Session::NoTouch);
        }

        propagation
    }

    fn end_propagation(&self) -> Propagation {
        match self.session {
            Session::Tracking { .. } | Session::Complete => Propagation::Suppress,
            _ => Propagation::Continue,
        }
    }
}

/// Final position of each tracked finger.
///
/// Uses the event's point with the same identifier, falling back to the
/// last position seen during tracking.
fn lift_off_positions(
    origin: &[TouchPoint; 2],
    latest: &[TouchPoint; 2],
    remaining: &[TouchPoint],
    lifted: &[TouchPoint],
) -> [TouchPoint; 2] {
    let find = |finger: usize| {
        lifted
            .iter()
            .chain(remaining)
            .find(|point| point.id == origin[finger].id)
            .copied()
            .unwrap_or(latest[finger])
    };
    [find(0), find(1)]
}
