// File: crates/geom-core/tests/properties.rs
// Purpose: Property checks for point/size arithmetic, rect relations and scale modes.

use geom_core::{scale_rect_to_size, scale_size_to_size, Point, Rect, ScaleMode, Size};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn point() -> impl Strategy<Value = Point> {
    (-1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y)| Point::new(x, y))
}

fn positive_size() -> impl Strategy<Value = Size> {
    (1.0f64..500.0, 1.0f64..500.0).prop_map(|(w, h)| Size::new(w, h))
}

fn rect() -> impl Strategy<Value = Rect> {
    (point(), positive_size()).prop_map(|(o, s)| Rect::from_origin_and_size(o, s))
}

fn mode() -> impl Strategy<Value = ScaleMode> {
    prop_oneof![
        Just(ScaleMode::Fill),
        Just(ScaleMode::AspectFit),
        Just(ScaleMode::AspectFill),
    ]
}

proptest! {
    #[test]
    fn point_add_commutes_and_subtract_inverts(a in point(), b in point()) {
        prop_assert_eq!(a + b, b + a);
        let back = (a + b) - b;
        prop_assert!(close(back.x, a.x) && close(back.y, a.y), "{:?} != {:?}", back, a);
    }

    #[test]
    fn size_scale_is_componentwise(w in -1e3f64..1e3, h in -1e3f64..1e3, k in 0.001f64..100.0) {
        let s = Size::new(w, h).scale(k);
        prop_assert_eq!(s.width, w * k);
        prop_assert_eq!(s.height, h * k);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self(p in point(), q in point()) {
        prop_assert_eq!(p.distance(p), 0.0);
        prop_assert_eq!(p.distance(q), q.distance(p));
        prop_assert!(p.distance(q) >= 0.0);
    }

    #[test]
    fn clamp_to_rect_is_identity_inside(r in rect(), fx in 0.0f64..=1.0, fy in 0.0f64..=1.0) {
        let p = r.point_at_fraction(fx, fy);
        prop_assert!(r.contains(p));
        prop_assert_eq!(p.clamp_to_rect(r), p);
        prop_assert_eq!(p.distance_to_rect(r), 0.0);
    }

    #[test]
    fn clamp_to_rect_lands_on_nearest_edge(r in rect(), p in point()) {
        let c = p.clamp_to_rect(r);
        prop_assert!(r.contains(c));
        if !r.contains(p) {
            prop_assert!(p.distance_to_rect(r) > 0.0);
            let on_x_edge = c.x == r.min_x() || c.x == r.max_x();
            let on_y_edge = c.y == r.min_y() || c.y == r.max_y();
            prop_assert!(on_x_edge || on_y_edge);
        }
        if p.x < r.min_x() { prop_assert_eq!(c.x, r.min_x()); }
        if p.x > r.max_x() { prop_assert_eq!(c.x, r.max_x()); }
        if p.y < r.min_y() { prop_assert_eq!(c.y, r.min_y()); }
        if p.y > r.max_y() { prop_assert_eq!(c.y, r.max_y()); }
    }

    #[test]
    fn fill_always_returns_target(w in -1e3f64..1e3, h in -1e3f64..1e3, t in positive_size()) {
        prop_assert_eq!(scale_size_to_size(Size::new(w, h), t, ScaleMode::Fill).unwrap(), t);
    }

    #[test]
    fn aspect_fit_fits_and_aspect_fill_covers(s in positive_size(), t in positive_size()) {
        let fit = scale_size_to_size(s, t, ScaleMode::AspectFit).unwrap();
        prop_assert!(fit.width <= t.width * (1.0 + 1e-12) && fit.height <= t.height * (1.0 + 1e-12));
        prop_assert!(close(fit.width, t.width) || close(fit.height, t.height));

        let fill = scale_size_to_size(s, t, ScaleMode::AspectFill).unwrap();
        prop_assert!(fill.width >= t.width * (1.0 - 1e-12) && fill.height >= t.height * (1.0 - 1e-12));
        prop_assert!(close(fill.width, t.width) || close(fill.height, t.height));

        // both keep the source aspect ratio
        let ratio = s.width / s.height;
        prop_assert!(close(fit.width / fit.height, ratio));
        prop_assert!(close(fill.width / fill.height, ratio));
    }

    #[test]
    fn scale_rect_preserves_center(r in rect(), t in positive_size(), m in mode()) {
        let out = scale_rect_to_size(r, t, m).unwrap();
        let (a, b) = (out.center(), r.center());
        prop_assert!(close(a.x, b.x) && close(a.y, b.y), "{:?} vs {:?}", a, b);
    }
}
