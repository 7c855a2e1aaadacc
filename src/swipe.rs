use crate::core::Direction;

/// Minimum travel, in screen units, before a drag counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Picks the dominant axis of the drag, then its sign. Ties go to the vertical axis.
/// Screen coordinates: `y` grows downward.
pub fn classify_swipe(start: Point, end: Point, threshold: f64) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() > dy.abs() {
        if dx.abs() <= threshold {
            return None;
        }
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        if dy.abs() <= threshold {
            return None;
        }
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

pub struct SwipeTracker {
    threshold: f64,
    start: Option<Point>,
}

/// A threshold must be a finite, non-negative distance.
pub fn is_valid_threshold(threshold: f64) -> bool {
    threshold.is_finite() && threshold >= 0.0
}

impl SwipeTracker {
    /// Falls back to `DEFAULT_SWIPE_THRESHOLD` for a threshold that is negative or not finite,
    /// which would otherwise turn a plain click into a swipe.
    pub fn new(threshold: f64) -> Self {
        let threshold = if is_valid_threshold(threshold) {
            threshold
        } else {
            DEFAULT_SWIPE_THRESHOLD
        };
        SwipeTracker {
            threshold,
            start: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn begin(&mut self, point: Point) {
        self.start = Some(point);
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn end(&mut self, point: Point) -> Option<Direction> {
        let start = self.start.take()?;
        classify_swipe(start, point, self.threshold)
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        SwipeTracker::new(DEFAULT_SWIPE_THRESHOLD)
    }
}
