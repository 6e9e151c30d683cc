//! Parametric cubic curves and their polyline sampling.

use crate::bounds::{BoundingBox, Point};
use crate::error::{GeomError, Result};

/// Upper bound on samples per curve.
///
/// Sample counts come straight from input files; anything above this is
/// treated as malformed rather than allocated.
pub const MAX_SAMPLES: usize = 1 << 24;

/// Cubic polynomial `a0 + a1·t + a2·t² + a3·t³`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Cubic {
    pub coeffs: [f64; 4],
}

impl Cubic {
    #[inline]
    pub const fn new(coeffs: [f64; 4]) -> Self {
        Self { coeffs }
    }

    /// Horner evaluation.
    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        let [a0, a1, a2, a3] = self.coeffs;
        a0 + t * (a1 + t * (a2 + t * a3))
    }
}

/// Parameter interval and number of samples taken across it.
///
/// Invariant (checked by [`ParamRange::new`]): `sample_count >= 2`,
/// `t_min != t_max`, both finite. `t_min > t_max` is allowed and samples
/// the curve backwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParamRange {
    t_min: f64,
    t_max: f64,
    sample_count: usize,
}

impl ParamRange {
    pub fn new(t_min: f64, t_max: f64, sample_count: usize) -> Result<Self> {
        let range = Self { t_min, t_max, sample_count };
        range.validate()?;
        Ok(range)
    }

    /// Builds a range whose sample count is given as a real number, as in
    /// curve files. The count is truncated toward zero.
    pub fn from_real(t_min: f64, t_max: f64, sample_count: f64) -> Result<Self> {
        if !sample_count.is_finite() {
            return Err(GeomError::invalid(
                "sample_count",
                format!("{sample_count} is not a finite number"),
            ));
        }
        let truncated = sample_count.trunc();
        if truncated < 2.0 {
            return Err(GeomError::invalid(
                "sample_count",
                format!("{sample_count} yields fewer than 2 samples"),
            ));
        }
        if truncated > MAX_SAMPLES as f64 {
            return Err(GeomError::invalid(
                "sample_count",
                format!("{sample_count} exceeds the limit of {MAX_SAMPLES}"),
            ));
        }
        Self::new(t_min, t_max, truncated as usize)
    }

    #[inline]
    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    #[inline]
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Parameter step between consecutive samples.
    #[inline]
    pub fn step(&self) -> f64 {
        (self.t_max - self.t_min) / (self.sample_count - 1) as f64
    }

    fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(GeomError::invalid(
                "sample_count",
                format!("{} is below the minimum of 2", self.sample_count),
            ));
        }
        if self.sample_count > MAX_SAMPLES {
            return Err(GeomError::invalid(
                "sample_count",
                format!("{} exceeds the limit of {MAX_SAMPLES}", self.sample_count),
            ));
        }
        if !self.t_min.is_finite() || !self.t_max.is_finite() {
            return Err(GeomError::invalid(
                "t_range",
                format!("[{}, {}] is not finite", self.t_min, self.t_max),
            ));
        }
        if !(self.t_max - self.t_min).is_finite() {
            return Err(GeomError::invalid(
                "t_range",
                format!("[{}, {}] spans more than f64 can hold", self.t_min, self.t_max),
            ));
        }
        if self.t_min == self.t_max {
            return Err(GeomError::invalid(
                "t_range",
                format!("t_min == t_max == {}", self.t_min),
            ));
        }
        Ok(())
    }
}

/// Output of [`sample`]: points in increasing parameter order plus their bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    pub points: Vec<Point>,
    pub bounds: BoundingBox,
}

/// Samples `(x(t), y(t))` at `range.sample_count()` evenly spaced parameters.
///
/// Sample `i` is taken at `t_min + i·step` so the last point lands on
/// `t_max` without accumulated drift. Fails with `InvalidParameter` on an
/// invalid range or if the polynomial overflows to a non-finite value.
pub fn sample(x: &Cubic, y: &Cubic, range: &ParamRange) -> Result<SampledCurve> {
    range.validate()?;

    let n = range.sample_count();
    let step = range.step();
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let t = if i == n - 1 { range.t_max() } else { range.t_min() + i as f64 * step };
        let p = Point::new(x.eval(t), y.eval(t));
        if !p.is_finite() {
            return Err(GeomError::invalid(
                "coefficients",
                format!("curve evaluates to ({}, {}) at t = {t}", p.x, p.y),
            ));
        }
        points.push(p);
    }

    // n >= 2 was validated above.
    let bounds = BoundingBox::from_points(&points)
        .ok_or_else(|| GeomError::PreconditionViolation("sampled curve is empty".into()))?;

    Ok(SampledCurve { points, bounds })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn range(t_min: f64, t_max: f64, n: usize) -> ParamRange {
        ParamRange::new(t_min, t_max, n).unwrap()
    }

    // ── Cubic ─────────────────────────────────────────────────────────────

    #[test]
    fn eval_matches_expanded_polynomial() {
        let c = Cubic::new([1.0, -2.0, 0.5, 3.0]);
        for &t in &[-2.0, -0.5, 0.0, 0.3, 1.0, 4.0] {
            let expanded = 1.0 - 2.0 * t + 0.5 * t * t + 3.0 * t * t * t;
            assert!((c.eval(t) - expanded).abs() < 1e-9, "t = {t}");
        }
    }

    // ── ParamRange ────────────────────────────────────────────────────────

    #[test]
    fn rejects_single_sample() {
        let err = ParamRange::new(0.0, 1.0, 1).unwrap_err();
        assert!(matches!(err, GeomError::InvalidParameter { name: "sample_count", .. }));
    }

    #[test]
    fn rejects_empty_t_range() {
        let err = ParamRange::new(2.0, 2.0, 10).unwrap_err();
        assert!(matches!(err, GeomError::InvalidParameter { name: "t_range", .. }));
    }

    #[test]
    fn rejects_infinite_t() {
        assert!(ParamRange::new(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn rejects_overflowing_t_span() {
        let err = ParamRange::new(-1e308, 1e308, 10).unwrap_err();
        assert!(matches!(err, GeomError::InvalidParameter { name: "t_range", .. }));
        assert!(ParamRange::from_real(-f64::MAX, f64::MAX, 3.0).is_err());
    }

    #[test]
    fn from_real_truncates() {
        assert_eq!(ParamRange::from_real(0.0, 1.0, 5.9).unwrap().sample_count(), 5);
    }

    #[test]
    fn from_real_rejects_small_negative_and_nan() {
        assert!(ParamRange::from_real(0.0, 1.0, 1.99).is_err());
        assert!(ParamRange::from_real(0.0, 1.0, -4.0).is_err());
        assert!(ParamRange::from_real(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn from_real_rejects_huge_counts() {
        assert!(ParamRange::from_real(0.0, 1.0, 1e18).is_err());
    }

    // ── sample ────────────────────────────────────────────────────────────

    #[test]
    fn linear_quadratic_scenario() {
        let x = Cubic::new([0.0, 1.0, 0.0, 0.0]);
        let y = Cubic::new([0.0, 0.0, 1.0, 0.0]);
        let s = sample(&x, &y, &range(0.0, 1.0, 5)).unwrap();

        let xs: Vec<f64> = s.points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = s.points.iter().map(|p| p.y).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(ys, vec![0.0, 0.0625, 0.25, 0.5625, 1.0]);
        assert_eq!(s.bounds, BoundingBox::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn produces_exactly_sample_count_points() {
        let x = Cubic::new([0.0, 1.0, 1.0, 1.0]);
        let y = Cubic::new([1.0, 0.0, -1.0, 0.0]);
        for n in [2, 3, 17, 1000] {
            assert_eq!(sample(&x, &y, &range(-1.0, 2.0, n)).unwrap().points.len(), n);
        }
    }

    #[test]
    fn endpoints_hit_t_min_and_t_max() {
        let x = Cubic::new([0.3, -1.0, 2.0, 0.7]);
        let y = Cubic::new([-2.0, 0.5, 0.1, -0.9]);
        let r = range(-1.3, 2.9, 37);
        let s = sample(&x, &y, &r).unwrap();

        let first = s.points[0];
        let last = s.points[s.points.len() - 1];
        assert!((first.x - x.eval(-1.3)).abs() < EPS);
        assert!((first.y - y.eval(-1.3)).abs() < EPS);
        assert!((last.x - x.eval(2.9)).abs() < EPS);
        assert!((last.y - y.eval(2.9)).abs() < EPS);
    }

    #[test]
    fn reversed_range_samples_backwards() {
        let x = Cubic::new([0.0, 1.0, 0.0, 0.0]);
        let y = Cubic::default();
        let s = sample(&x, &y, &range(1.0, 0.0, 3)).unwrap();
        let xs: Vec<f64> = s.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn bounds_contain_every_point() {
        let x = Cubic::new([0.0, -3.0, 0.0, 1.0]);
        let y = Cubic::new([1.0, 2.0, -4.0, 0.5]);
        let s = sample(&x, &y, &range(-2.5, 3.0, 250)).unwrap();
        for p in &s.points {
            assert!(s.bounds.contains(*p), "{p:?} outside {:?}", s.bounds);
        }
    }

    #[test]
    fn bounds_reach_interior_extremum() {
        // x = -t² peaks at t = 0, away from both ends of the range.
        let x = Cubic::new([0.0, 0.0, -1.0, 0.0]);
        let y = Cubic::new([0.0, 1.0, 0.0, 0.0]);
        let s = sample(&x, &y, &range(-1.0, 1.0, 201)).unwrap();
        assert!(s.bounds.x_max.abs() < 1e-9);
        assert_eq!(s.bounds.x_min, -1.0);
    }

    #[test]
    fn constant_curve_has_degenerate_bounds() {
        let x = Cubic::new([4.0, 0.0, 0.0, 0.0]);
        let y = Cubic::new([-1.0, 0.0, 0.0, 0.0]);
        let s = sample(&x, &y, &range(0.0, 1.0, 10)).unwrap();
        assert_eq!(s.bounds, BoundingBox::new(4.0, 4.0, -1.0, -1.0));
    }

    #[test]
    fn overflow_is_rejected() {
        let x = Cubic::new([0.0, 0.0, 0.0, f64::MAX]);
        let y = Cubic::default();
        let err = sample(&x, &y, &range(0.0, 10.0, 4)).unwrap_err();
        assert!(matches!(err, GeomError::InvalidParameter { name: "coefficients", .. }));
    }
}
