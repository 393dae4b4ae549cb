//! Finger pattern generation
//!
//! A pattern partitions one seam into an odd number of equal segments that
//! alternate tab/gap, starting and ending with a tab. Both panels meeting at a
//! seam use the same pattern; one side takes it as-is and the other inverted.

use serde::{Deserialize, Serialize};
use tabforge_core::constants::{MAX_FINGER_SEGMENTS, MIN_FINGER};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerSegment {
    pub start: f64,
    pub end: f64,
    pub is_tab: bool,
}

impl FingerSegment {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerPattern {
    pub length: f64,
    pub finger_width: f64,
    pub segments: Vec<FingerSegment>,
}

impl FingerPattern {
    /// Pick the odd segment count whose width best matches the middle of
    /// `[min_finger, max_finger]`.
    ///
    /// Bounds are floored at 0.1 mm and an inverted range is tolerated by
    /// raising `max_finger` to `min_finger`. Short seams still get three
    /// segments even when that leaves the bounds, and very long seams stop at
    /// [`MAX_FINGER_SEGMENTS`] with wider fingers.
    pub fn generate(length: f64, min_finger: f64, max_finger: f64) -> Self {
        let length = sanitize_length(length);
        let min_finger = if min_finger.is_finite() {
            min_finger.max(MIN_FINGER)
        } else {
            MIN_FINGER
        };
        let max_finger = if max_finger.is_finite() {
            max_finger.max(min_finger)
        } else {
            min_finger
        };

        let target = (min_finger + max_finger) / 2.0;
        let mut count = odd_segment_count((length / target).round() as usize);

        while length / (count as f64) < min_finger && count > 3 {
            count -= 2;
        }
        while length / (count as f64) > max_finger && count < MAX_FINGER_SEGMENTS {
            count += 2;
        }

        debug!(
            length,
            min_finger, max_finger, count, "Selected finger segment count"
        );
        Self::with_segment_count(length, count)
    }

    /// Pattern with exactly `count` segments, rounded up to the next odd
    /// number, never fewer than three and never more than
    /// [`MAX_FINGER_SEGMENTS`].
    pub fn with_segment_count(length: f64, count: usize) -> Self {
        let length = sanitize_length(length);
        let count = odd_segment_count(count);

        let width = length / count as f64;
        let segments = (0..count)
            .map(|i| FingerSegment {
                start: i as f64 * width,
                end: if i + 1 == count {
                    length
                } else {
                    (i + 1) as f64 * width
                },
                is_tab: i % 2 == 0,
            })
            .collect();

        Self {
            length,
            finger_width: width,
            segments,
        }
    }

    /// Pattern carrying `tabs` tabs (at least two), i.e. `2 * tabs - 1` segments.
    pub fn with_tab_count(length: f64, tabs: usize) -> Self {
        Self::with_segment_count(length, tabs.max(2).saturating_mul(2) - 1)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn tab_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_tab).count()
    }

    /// Whether the segment touching the start (or end) of the seam is a tab
    /// once `invert` is applied.
    pub fn tab_at_start(&self, invert: bool) -> bool {
        self.segments.first().is_some_and(|s| s.is_tab != invert)
    }

    pub fn tab_at_end(&self, invert: bool) -> bool {
        self.segments.last().is_some_and(|s| s.is_tab != invert)
    }
}

fn odd_segment_count(count: usize) -> usize {
    let count = count.clamp(3, MAX_FINGER_SEGMENTS);
    if count % 2 == 0 {
        count + 1
    } else {
        count
    }
}

fn sanitize_length(length: f64) -> f64 {
    if length.is_finite() {
        length.max(MIN_FINGER)
    } else {
        MIN_FINGER
    }
}
