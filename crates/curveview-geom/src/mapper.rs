//! Model-coordinate to device-space mapping.
//!
//! All computation happens in f64. Narrowing to f32 for the GPU happens once,
//! in [`Projection::to_uniform`].

use crate::bounds::{BoundingBox, Point, Region};
use crate::error::{GeomError, Result};

/// Lower and upper bound of logical device space on each axis.
pub const LDS_MIN: f64 = -1.0;
pub const LDS_MAX: f64 = 1.0;

/// Affine 1D map `t = scale·f + trans`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleTrans {
    pub scale: f64,
    pub trans: f64,
}

impl ScaleTrans {
    #[inline]
    pub fn apply(self, f: f64) -> f64 {
        self.scale * f + self.trans
    }

    /// Inverse of [`apply`](Self::apply). `scale` is non-zero for any map
    /// produced by [`linear_map`] with a non-empty target interval.
    #[inline]
    pub fn unapply(self, t: f64) -> f64 {
        (t - self.trans) / self.scale
    }
}

/// Scale/translate pair mapping `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// Endpoints map exactly: `from_min -> to_min`, `from_max -> to_max`.
/// Requires `from_min != from_max`, and both spans must stay finite so the
/// map is invertible.
pub fn linear_map(from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> Result<ScaleTrans> {
    if ![from_min, from_max, to_min, to_max].iter().all(|v| v.is_finite()) {
        return Err(GeomError::PreconditionViolation(format!(
            "linear_map with non-finite bounds [{from_min}, {from_max}] -> [{to_min}, {to_max}]"
        )));
    }
    if from_min == from_max {
        return Err(GeomError::PreconditionViolation(format!(
            "linear_map from an empty interval at {from_min}"
        )));
    }

    let scale = (to_max - to_min) / (from_max - from_min);
    let trans = to_min - scale * from_min;
    if !scale.is_finite() || scale == 0.0 || !trans.is_finite() {
        return Err(GeomError::PreconditionViolation(format!(
            "linear_map [{from_min}, {from_max}] -> [{to_min}, {to_max}] has no finite inverse"
        )));
    }
    Ok(ScaleTrans { scale, trans })
}

/// Expands `window` along exactly one axis so that `height / width == target_ar`.
///
/// The expanded axis keeps its center; neither axis ever shrinks. A window
/// taller than the target (`window_ar > target_ar`) is widened, otherwise it
/// is heightened, so an exact match goes through the heighten branch and
/// comes back unchanged.
pub fn match_aspect_ratio(window: BoundingBox, target_ar: f64) -> Result<BoundingBox> {
    if !target_ar.is_finite() || target_ar <= 0.0 {
        return Err(GeomError::invalid(
            "aspect_ratio",
            format!("target {target_ar} must be positive and finite"),
        ));
    }
    let width = window.width();
    let height = window.height();
    if !window.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(GeomError::invalid(
            "window",
            format!("{width} x {height} window cannot be aspect-matched"),
        ));
    }

    let window_ar = height / width;
    let mut out = window;
    if window_ar > target_ar {
        let new_width = height / target_ar;
        let mid = 0.5 * (window.x_min + window.x_max);
        out.x_min = mid - 0.5 * new_width;
        out.x_max = mid + 0.5 * new_width;
    } else {
        let new_height = width * target_ar;
        let mid = 0.5 * (window.y_min + window.y_max);
        out.y_min = mid - 0.5 * new_height;
        out.y_max = mid + 0.5 * new_height;
    }
    Ok(out)
}

/// Per-axis maps from model coordinates to logical device space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    pub x: ScaleTrans,
    pub y: ScaleTrans,
}

impl Projection {
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.x.apply(p.x), self.y.apply(p.y))
    }

    /// Maps a device-space point back into model coordinates.
    #[inline]
    pub fn unapply(&self, lds: Point) -> Point {
        Point::new(self.x.unapply(lds.x), self.y.unapply(lds.y))
    }

    /// `[scale_x, trans_x, scale_y, trans_y]` in the precision shaders consume.
    #[inline]
    pub fn to_uniform(&self) -> [f32; 4] {
        [
            self.x.scale as f32,
            self.x.trans as f32,
            self.y.scale as f32,
            self.y.trans as f32,
        ]
    }
}

/// Computes the projection of `region` onto `[-1, 1]²`.
///
/// With `preserve_aspect`, the region's x/y window is first expanded to the
/// viewport aspect ratio (`height / width`). The z limits are not used.
pub fn compute_projection(
    region: &Region,
    preserve_aspect: bool,
    viewport_ar: f64,
) -> Result<Projection> {
    let mut window = region.xy();
    if preserve_aspect {
        window = match_aspect_ratio(window, viewport_ar)?;
    }

    Ok(Projection {
        x: linear_map(window.x_min, window.x_max, LDS_MIN, LDS_MAX)?,
        y: linear_map(window.y_min, window.y_max, LDS_MIN, LDS_MAX)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < EPS }

    fn bb(x0: f64, x1: f64, y0: f64, y1: f64) -> BoundingBox { BoundingBox::new(x0, x1, y0, y1) }

    fn same_x(a: BoundingBox, b: BoundingBox) -> bool { a.x_min == b.x_min && a.x_max == b.x_max }

    fn same_y(a: BoundingBox, b: BoundingBox) -> bool { a.y_min == b.y_min && a.y_max == b.y_max }

    fn region(x0: f64, x1: f64, y0: f64, y1: f64) -> Region {
        Region::new(x0, x1, y0, y1, -1.0, 1.0).unwrap()
    }

    // ── linear_map ────────────────────────────────────────────────────────

    #[test]
    fn linear_map_hits_both_endpoints() {
        let cases = [
            (0.0, 1.0, -1.0, 1.0),
            (-3.5, 12.0, -1.0, 1.0),
            (1e-3, 2e-3, 0.0, 800.0),
            (-100.0, -99.0, 5.0, 6.0),
            (10.0, 2.0, -1.0, 1.0),
        ];
        for (f0, f1, t0, t1) in cases {
            let m = linear_map(f0, f1, t0, t1).unwrap();
            assert!(close(m.apply(f0), t0), "{f0} -> {}", m.apply(f0));
            assert!(close(m.apply(f1), t1), "{f1} -> {}", m.apply(f1));
        }
    }

    #[test]
    fn linear_map_midpoint_maps_to_midpoint() {
        let m = linear_map(2.0, 6.0, -1.0, 1.0).unwrap();
        assert!(close(m.apply(4.0), 0.0));
    }

    #[test]
    fn linear_map_rejects_empty_source() {
        let err = linear_map(3.0, 3.0, -1.0, 1.0).unwrap_err();
        assert!(matches!(err, GeomError::PreconditionViolation(_)));
    }

    #[test]
    fn linear_map_rejects_nan() {
        assert!(linear_map(0.0, f64::NAN, -1.0, 1.0).is_err());
    }

    #[test]
    fn linear_map_rejects_overflowing_span() {
        let err = linear_map(-1e308, 1e308, -1.0, 1.0).unwrap_err();
        assert!(matches!(err, GeomError::PreconditionViolation(_)));
        assert!(linear_map(0.0, 1.0, -f64::MAX, f64::MAX).is_err());
        // Span so small the scale overflows.
        assert!(linear_map(0.0, 1e-320, -1.0, 1.0).is_err());
    }

    #[test]
    fn unapply_inverts_apply() {
        let m = linear_map(-2.0, 7.0, -1.0, 1.0).unwrap();
        for f in [-2.0, 0.0, 3.3, 7.0] {
            assert!(close(m.unapply(m.apply(f)), f));
        }
    }

    // ── match_aspect_ratio ────────────────────────────────────────────────

    #[test]
    fn wide_window_is_heightened() {
        // windowAR = 0.5 < 1.0
        let out = match_aspect_ratio(bb(0.0, 2.0, 0.0, 1.0), 1.0).unwrap();
        assert_eq!(out, bb(0.0, 2.0, -0.5, 1.5));
    }

    #[test]
    fn tall_window_is_widened() {
        // windowAR = 4 > 2
        let out = match_aspect_ratio(bb(1.0, 2.0, 0.0, 4.0), 2.0).unwrap();
        assert!(close(out.x_min, 0.5));
        assert!(close(out.x_max, 2.5));
        assert_eq!((out.y_min, out.y_max), (0.0, 4.0));
    }

    #[test]
    fn equal_ratio_takes_heighten_branch_and_is_unchanged() {
        let w = bb(0.0, 1.0, 0.0, 1.0);
        assert_eq!(match_aspect_ratio(w, 1.0).unwrap(), w);
    }

    #[test]
    fn never_shrinks_and_preserves_center() {
        let windows = [
            bb(0.0, 1.0, 0.0, 1.0),
            bb(-5.0, 5.0, 0.0, 0.1),
            bb(0.0, 0.01, -30.0, 30.0),
            bb(3.0, 4.5, 2.0, 9.0),
        ];
        let targets = [0.25, 0.5, 0.75, 1.0, 1.5, 3.0];
        for w in windows {
            for ar in targets {
                let out = match_aspect_ratio(w, ar).unwrap();
                assert!(out.width() >= w.width() - EPS, "{w:?} @ {ar}");
                assert!(out.height() >= w.height() - EPS, "{w:?} @ {ar}");
                assert!(close(out.center().x, w.center().x), "{w:?} @ {ar}");
                assert!(close(out.center().y, w.center().y), "{w:?} @ {ar}");
                assert!((out.height() / out.width() - ar).abs() < 1e-6, "{w:?} @ {ar}");
                // Exactly one axis moves.
                assert!(same_x(out, w) || same_y(out, w), "{w:?} @ {ar}");
            }
        }
    }

    #[test]
    fn rejects_non_positive_target() {
        assert!(match_aspect_ratio(bb(0.0, 1.0, 0.0, 1.0), 0.0).is_err());
        assert!(match_aspect_ratio(bb(0.0, 1.0, 0.0, 1.0), -1.0).is_err());
        assert!(match_aspect_ratio(bb(0.0, 1.0, 0.0, 1.0), f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_degenerate_window() {
        assert!(match_aspect_ratio(bb(0.0, 0.0, 0.0, 1.0), 1.0).is_err());
    }

    // ── compute_projection ────────────────────────────────────────────────

    #[test]
    fn unit_region_square_viewport() {
        let p = compute_projection(&region(0.0, 1.0, 0.0, 1.0), true, 1.0).unwrap();
        assert!(close(p.x.scale, 2.0) && close(p.x.trans, -1.0));
        assert!(close(p.y.scale, 2.0) && close(p.y.trans, -1.0));
    }

    #[test]
    fn region_extremes_round_trip_without_aspect() {
        let r = region(-3.0, 5.0, 10.0, 10.5);
        let p = compute_projection(&r, false, 0.3).unwrap();
        let lo = p.apply(Point::new(r.x_min(), r.y_min()));
        let hi = p.apply(Point::new(r.x_max(), r.y_max()));
        assert!(close(lo.x, -1.0) && close(lo.y, -1.0));
        assert!(close(hi.x, 1.0) && close(hi.y, 1.0));
    }

    #[test]
    fn aspect_preservation_heightens_wide_region() {
        let p = compute_projection(&region(0.0, 2.0, 0.0, 1.0), true, 1.0).unwrap();
        // y window becomes (-0.5, 1.5)
        assert!(close(p.y.apply(-0.5), -1.0));
        assert!(close(p.y.apply(1.5), 1.0));
        assert!(close(p.x.apply(0.0), -1.0));
        assert!(close(p.x.apply(2.0), 1.0));
    }

    #[test]
    fn bad_viewport_ratio_is_reported_only_when_preserving() {
        let r = region(0.0, 1.0, 0.0, 1.0);
        assert!(compute_projection(&r, true, 0.0).is_err());
        assert!(compute_projection(&r, false, 0.0).is_ok());
    }

    #[test]
    fn uniform_layout_is_scale_trans_pairs() {
        let p = compute_projection(&region(0.0, 1.0, 0.0, 4.0), false, 1.0).unwrap();
        assert_eq!(p.to_uniform(), [2.0, -1.0, 0.5, -1.0]);
    }
}
