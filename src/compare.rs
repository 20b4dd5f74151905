//! Comparers over shapes.
//!
//! Absence is a handled input, not an error: `None` orders below any present
//! value, and two absent inputs compare equal. Present values are ordered by
//! `f64::total_cmp`, so the comparers are total over every float input.

use std::cmp::Ordering;

use crate::shapes::{Circle, HasArea};

/// Orders two possibly-absent values of the item type.
pub trait Comparator {
    type Item: ?Sized;

    fn compare(&self, a: Option<&Self::Item>, b: Option<&Self::Item>) -> Ordering;
}

/// Orders any two area-capable values by their computed area, regardless of
/// concrete shape type.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaComparator;

impl Comparator for AreaComparator {
    type Item = dyn HasArea;

    fn compare(&self, a: Option<&Self::Item>, b: Option<&Self::Item>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.area().total_cmp(&b.area()),
        }
    }
}

/// Orders circles by the radius field directly, ignoring the derived area.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadiusComparator;

impl Comparator for RadiusComparator {
    type Item = Circle;

    fn compare(&self, a: Option<&Circle>, b: Option<&Circle>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.radius.total_cmp(&b.radius),
        }
    }
}

/// Human-readable label for a comparison outcome.
pub fn ordering_label(outcome: Ordering) -> &'static str {
    match outcome {
        Ordering::Less => "less than",
        Ordering::Equal => "equal to",
        Ordering::Greater => "greater than",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Square;
    use proptest::prelude::*;

    #[test]
    fn both_absent_compare_equal() {
        assert_eq!(AreaComparator.compare(None, None), Ordering::Equal);
        assert_eq!(RadiusComparator.compare(None, None), Ordering::Equal);
    }

    #[test]
    fn absent_orders_below_present() {
        let circle = Circle::new(1.0);
        assert_eq!(
            AreaComparator.compare(None, Some(&circle)),
            Ordering::Less
        );
        assert_eq!(
            AreaComparator.compare(Some(&circle), None),
            Ordering::Greater
        );
        assert_eq!(
            RadiusComparator.compare(None, Some(&circle)),
            Ordering::Less
        );
        assert_eq!(
            RadiusComparator.compare(Some(&circle), None),
            Ordering::Greater
        );
    }

    #[test]
    fn mixed_shapes_compare_by_area() {
        // 4.0 > pi
        let square = Square::new(2.0);
        let circle = Circle::new(1.0);
        assert_eq!(
            AreaComparator.compare(Some(&square), Some(&circle)),
            Ordering::Greater
        );
        assert_eq!(
            AreaComparator.compare(Some(&circle), Some(&square)),
            Ordering::Less
        );
    }

    #[test]
    fn identical_dimensions_compare_equal() {
        let a = Square::new(3.0);
        let b = Square::new(3.0);
        assert_eq!(AreaComparator.compare(Some(&a), Some(&b)), Ordering::Equal);

        let c = Circle::new(1.0);
        let d = Circle::new(1.0);
        assert_eq!(
            RadiusComparator.compare(Some(&c), Some(&d)),
            Ordering::Equal
        );
    }

    #[test]
    fn radius_comparer_ignores_area() {
        let small = Circle::new(1.0);
        let big = Circle::new(3.0);
        assert_eq!(
            RadiusComparator.compare(Some(&small), Some(&big)),
            Ordering::Less
        );
        assert_eq!(
            RadiusComparator.compare(Some(&big), Some(&small)),
            Ordering::Greater
        );
    }

    #[test]
    fn labels_cover_all_outcomes() {
        assert_eq!(ordering_label(Ordering::Less), "less than");
        assert_eq!(ordering_label(Ordering::Equal), "equal to");
        assert_eq!(ordering_label(Ordering::Greater), "greater than");
    }

    proptest! {
        #[test]
        fn area_comparison_is_antisymmetric(side in -100.0f64..100.0, radius in -100.0f64..100.0) {
            let square = Square::new(side);
            let circle = Circle::new(radius);
            let forward = AreaComparator.compare(Some(&square), Some(&circle));
            let backward = AreaComparator.compare(Some(&circle), Some(&square));
            prop_assert_eq!(forward, backward.reverse());
        }

        #[test]
        fn radius_comparison_is_antisymmetric(a in -100.0f64..100.0, b in -100.0f64..100.0) {
            let left = Circle::new(a);
            let right = Circle::new(b);
            let forward = RadiusComparator.compare(Some(&left), Some(&right));
            let backward = RadiusComparator.compare(Some(&right), Some(&left));
            prop_assert_eq!(forward, backward.reverse());
        }

        #[test]
        fn comparing_a_shape_with_itself_is_equal(side in -100.0f64..100.0) {
            let square = Square::new(side);
            prop_assert_eq!(
                AreaComparator.compare(Some(&square), Some(&square)),
                Ordering::Equal
            );
        }
    }
}
