use super::*;
use nalgebra::dvector;
use proptest::prelude::*;
use std::collections::HashSet;

fn sample_rect() -> HyperRectangle {
    HyperRectangle::new([(1.0, 2.0), (10.0, 20.0), (100.0, 200.0), (500.0, 500.0)]).unwrap()
}

fn key(p: &State) -> Vec<u64> {
    p.iter().map(|x| x.to_bits()).collect()
}

#[test]
fn center_is_midpoint() {
    let r = sample_rect();
    assert_eq!(r.center(), dvector![1.5, 15.0, 150.0, 500.0]);
}

#[test]
fn star_count_and_layout() {
    let r = sample_rect();
    let star = r.star();
    assert_eq!(star.len(), 8);
    let c = r.center();
    for (i, d) in r.dims().iter().enumerate() {
        let mut lo = c.clone();
        lo[i] = d.lo;
        let mut hi = c.clone();
        hi[i] = d.hi;
        assert_eq!(star[2 * i], lo);
        assert_eq!(star[2 * i + 1], hi);
    }
    // flat dimension 3 still contributes two identical points
    assert_eq!(star[6], star[7]);
}

#[test]
fn unique_corners_skip_flat_dimension() {
    let r = sample_rect();
    let corners = r.unique_corners();
    assert_eq!(corners.len(), 8);
    let uniq: HashSet<_> = corners.iter().map(key).collect();
    assert_eq!(uniq.len(), 8);
    assert!(corners.iter().all(|p| p[3] == 500.0));
    assert_eq!(r.num_unique_corners(FLAT_TOL), Some(8));
}

#[test]
fn unique_corners_counter_order() {
    let r = HyperRectangle::new([(0.0, 1.0), (3.0, 3.0), (10.0, 20.0)]).unwrap();
    let corners = r.unique_corners();
    // bit 0 drives dim 0, bit 1 drives dim 2; dim 1 is pinned
    assert_eq!(
        corners,
        vec![
            dvector![0.0, 3.0, 10.0],
            dvector![1.0, 3.0, 10.0],
            dvector![0.0, 3.0, 20.0],
            dvector![1.0, 3.0, 20.0],
        ]
    );
}

#[test]
fn fully_flat_box_has_single_corner() {
    let r = HyperRectangle::new([(5.0, 5.0), (7.0, 7.0)]).unwrap();
    let corners = r.unique_corners();
    assert_eq!(corners, vec![dvector![5.0, 7.0]]);
    assert_eq!(corners[0], r.center());
}

#[test]
fn huge_tolerance_collapses_to_center() {
    let r = HyperRectangle::new([(0.0, 1.0), (2.0, 4.0)]).unwrap();
    let corners = r.unique_corners_tol(10.0);
    assert_eq!(corners, vec![r.center()]);
    assert_eq!(corners, vec![dvector![0.5, 3.0]]);
}

#[test]
fn zero_tolerance_pins_only_degenerate_dimensions() {
    let r = HyperRectangle::new([(5.0, 5.0), (0.0, 1.0)]).unwrap();
    let corners = r.unique_corners_tol(0.0);
    assert_eq!(corners, vec![dvector![5.0, 0.0], dvector![5.0, 1.0]]);
    assert_eq!(r.num_unique_corners(0.0), Some(2));
}

#[test]
fn negative_tolerance_never_pins() {
    let r = HyperRectangle::new([(5.0, 5.0), (0.0, 1.0)]).unwrap();
    assert_eq!(r.unique_corners_tol(-1.0).len(), 4);
    assert_eq!(r.unique_corners().len(), 2);
}

#[test]
fn corner_count_reports_overflow() {
    let wide = HyperRectangle::new((0..64).map(|_| (0.0, 1.0))).unwrap();
    assert_eq!(wide.num_unique_corners(FLAT_TOL), None);
    let narrow = HyperRectangle::new((0..63).map(|_| (0.0, 1.0))).unwrap();
    assert_eq!(narrow.num_unique_corners(FLAT_TOL), Some(1u64 << 63));
}

#[test]
#[should_panic(expected = "overflows the counter")]
fn corner_enumeration_panics_past_the_counter() {
    let wide = HyperRectangle::new((0..64).map(|_| (0.0, 1.0))).unwrap();
    let _ = wide.corners(FLAT_TOL);
}

#[test]
fn zero_dimensional_box() {
    let r = HyperRectangle::new(std::iter::empty::<(f64, f64)>()).unwrap();
    assert_eq!(r.ndim(), 0);
    assert!(r.star().is_empty());
    assert_eq!(r.unique_corners().len(), 1);
}

#[test]
fn queries_are_idempotent() {
    let r = sample_rect();
    let before = r.clone();
    assert_eq!(r.center(), r.center());
    assert_eq!(r.star(), r.star());
    assert_eq!(r.unique_corners(), r.unique_corners());
    assert_eq!(r, before);
}

#[test]
fn construction_rejects_bad_bounds() {
    assert_eq!(
        HyperRectangle::new([(0.0, 1.0), (2.0, 1.0)]),
        Err(GeomError::InvertedInterval {
            dim: 1,
            lo: 2.0,
            hi: 1.0
        })
    );
    assert_eq!(
        HyperRectangle::new([(f64::NAN, 1.0)]),
        Err(GeomError::NonFinite { dim: 0 })
    );
    assert_eq!(
        HyperRectangle::from_bounds(&[0.0, 1.0], &[1.0]),
        Err(GeomError::DimMismatch {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn contains_checks_dimension_and_bounds() {
    let r = HyperRectangle::from_bounds(&[0.0, -1.0], &[1.0, 1.0]).unwrap();
    assert!(r.contains(&dvector![0.5, 0.0]));
    assert!(r.contains(&dvector![1.0, -1.0]));
    assert!(!r.contains(&dvector![1.1, 0.0]));
    assert!(!r.contains(&dvector![0.5]));
    let p = HyperRectangle::from_point(&[2.0, 3.0]).unwrap();
    assert!(p.contains(&dvector![2.0, 3.0]));
}

fn arb_rect() -> impl Strategy<Value = HyperRectangle> {
    prop::collection::vec((-100.0_f64..100.0, prop_oneof![Just(0.0), 0.5_f64..10.0]), 0..7)
        .prop_map(|dims| {
            HyperRectangle::new(dims.into_iter().map(|(lo, w)| (lo, lo + w))).unwrap()
        })
}

proptest! {
    #[test]
    fn star_points_differ_from_center_in_one_coordinate(r in arb_rect()) {
        let c = r.center();
        let star = r.star();
        prop_assert_eq!(star.len(), 2 * r.ndim());
        for (j, p) in star.iter().enumerate() {
            let i = j / 2;
            let d = r.dims()[i];
            prop_assert_eq!(p[i], if j % 2 == 0 { d.lo } else { d.hi });
            for k in (0..r.ndim()).filter(|&k| k != i) {
                prop_assert_eq!(p[k], c[k]);
            }
        }
    }

    #[test]
    fn corner_count_is_two_to_the_non_flat(r in arb_rect()) {
        let k = r.dims().iter().filter(|d| d.width().abs() > FLAT_TOL).count();
        let corners = r.unique_corners();
        prop_assert_eq!(corners.len(), 1usize << k);
        let uniq: HashSet<_> = corners.iter().map(key).collect();
        prop_assert_eq!(uniq.len(), corners.len());
        prop_assert!(corners.iter().all(|p| r.contains(p)));
    }

    #[test]
    fn zero_tolerance_corners_are_distinct(r in arb_rect()) {
        let corners = r.unique_corners_tol(0.0);
        let k = r.dims().iter().filter(|d| d.width() > 0.0).count();
        prop_assert_eq!(corners.len(), 1usize << k);
        let uniq: HashSet<_> = corners.iter().map(key).collect();
        prop_assert_eq!(uniq.len(), corners.len());
    }
}
