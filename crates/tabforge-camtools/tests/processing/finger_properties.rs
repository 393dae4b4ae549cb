//! Property tests for finger patterns and outline simplification

use proptest::prelude::*;
use tabforge_camtools::tabbed_box::{simplify_closed, FingerPattern};
use tabforge_core::constants::MAX_FINGER_SEGMENTS;
use tabforge_core::Point;

proptest! {
    #[test]
    fn pattern_partitions_seam(
        length in 1.0f64..2000.0,
        min_finger in 0.1f64..40.0,
        span in 0.0f64..40.0,
    ) {
        let max_finger = min_finger + span;
        let pattern = FingerPattern::generate(length, min_finger, max_finger);
        let n = pattern.segment_count();

        prop_assert!(n >= 3);
        prop_assert_eq!(n % 2, 1);
        prop_assert_eq!(pattern.segments[0].start, 0.0);
        prop_assert_eq!(pattern.segments[n - 1].end, length);
        prop_assert!(pattern.segments[0].is_tab);
        for pair in pattern.segments.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
            prop_assert_ne!(pair[0].is_tab, pair[1].is_tab);
        }

        // Above the maximum only once the segment cap is reached.
        prop_assert!(pattern.finger_width <= max_finger + 1e-9 || n == MAX_FINGER_SEGMENTS);
        // Below the minimum only on the three-segment floor, or when the next
        // coarser pattern would already exceed the maximum.
        prop_assert!(
            pattern.finger_width >= min_finger - 1e-9
                || n == 3
                || length / (n - 2) as f64 > max_finger
        );
    }

    #[test]
    fn floor_case_uses_three_segments(length in 0.3f64..10.0) {
        let pattern = FingerPattern::generate(length, length, length * 2.0);
        prop_assert_eq!(pattern.segment_count(), 3);
    }

    #[test]
    fn simplify_is_idempotent(
        coords in prop::collection::vec((0i32..6, 0i32..6), 3..24),
    ) {
        let points: Vec<Point> = coords
            .iter()
            .map(|&(x, y)| Point::new(x as f64, y as f64))
            .collect();
        let once = simplify_closed(&points);
        let twice = simplify_closed(&once);
        prop_assert_eq!(&once, &twice);

        let n = once.len();
        if n >= 3 {
            for i in 0..n {
                prop_assert!(!once[i].coincides(&once[(i + 1) % n]));
            }
        }
    }
}
