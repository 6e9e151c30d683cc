use crate::bounds::{BoundingBox, Extent, Point};
use crate::error::Result;
use crate::mapper::Projection;
use crate::palette::{ColorAssigner, Rgb};
use crate::sampler::{sample, Cubic, ParamRange};
use crate::view::ViewState;

/// z limits reported for every 2D curve.
pub const CURVE_Z_MIN: f64 = -1.0;
pub const CURVE_Z_MAX: f64 = 1.0;

/// Definition of one parametric curve: `(x(t), y(t))` over a parameter range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveDef {
    pub x: Cubic,
    pub y: Cubic,
    pub range: ParamRange,
}

impl CurveDef {
    #[inline]
    pub const fn new(x: Cubic, y: Cubic, range: ParamRange) -> Self {
        Self { x, y, range }
    }
}

/// A sampled curve with its display color.
///
/// Sampling happens once in [`Curve::new`]; the polyline and bounds are fixed
/// for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    def: CurveDef,
    points: Vec<Point>,
    bounds: BoundingBox,
    color: Rgb,
}

impl Curve {
    /// Samples `def` and takes the next palette color.
    ///
    /// The color is only taken once sampling succeeded, so a rejected
    /// definition leaves `colors` untouched.
    pub fn new(def: CurveDef, colors: &mut ColorAssigner) -> Result<Self> {
        let sampled = sample(&def.x, &def.y, &def.range)?;
        Ok(Self {
            def,
            points: sampled.points,
            bounds: sampled.bounds,
            color: colors.next_color(),
        })
    }

    #[inline]
    pub fn def(&self) -> &CurveDef {
        &self.def
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Model-coordinate extent with z fixed to `[-1, 1]`.
    #[inline]
    pub fn bounding_box(&self) -> Extent {
        Extent::from_xy(self.bounds, CURVE_Z_MIN, CURVE_Z_MAX)
    }

    /// Current model-to-device projection for this curve.
    #[inline]
    pub fn projection(&self, view: &ViewState, viewport_ar: f64) -> Result<Projection> {
        view.projection(viewport_ar)
    }

    /// Polyline narrowed to `[x, y]` f32 pairs for vertex upload.
    pub fn vertices(&self) -> Vec<[f32; 2]> {
        self.points.iter().map(|p| [p.x as f32, p.y as f32]).collect()
    }
}
