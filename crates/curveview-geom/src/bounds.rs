use crate::error::{GeomError, Result};

/// Minimum span given to a degenerate axis when framing a region around it.
pub const DEGENERATE_SPAN: f64 = 1.0;

/// 2D point in model coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned 2D box in model coordinates.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`. Equality is allowed
/// (single point, constant curve).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    #[inline]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Box around a single point.
    #[inline]
    pub const fn from_point(p: Point) -> Self {
        Self::new(p.x, p.x, p.y, p.y)
    }

    /// Bounds of `points`, or `None` when empty.
    ///
    /// The first point seeds both min and max; each axis is then updated
    /// independently.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Self::from_point(*first);
        for p in rest {
            if p.x < b.x_min {
                b.x_min = p.x;
            }
            if p.x > b.x_max {
                b.x_max = p.x;
            }
            if p.y < b.y_min {
                b.y_min = p.y;
            }
            if p.y > b.y_max {
                b.y_max = p.y;
            }
        }
        Some(b)
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(0.5 * (self.x_min + self.x_max), 0.5 * (self.y_min + self.y_max))
    }

    /// Closed containment: `[min, max]` on both axes.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }
}

/// Six-sided model-coordinate box reported by curves for scene aggregation.
///
/// 2D curves report `z` as `[-1, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Extent {
    #[inline]
    pub const fn from_xy(b: BoundingBox, z_min: f64, z_max: f64) -> Self {
        Self {
            x_min: b.x_min,
            x_max: b.x_max,
            y_min: b.y_min,
            y_max: b.y_max,
            z_min,
            z_max,
        }
    }

    #[inline]
    pub fn xy(self) -> BoundingBox {
        BoundingBox::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }

    /// Smallest extent enclosing both.
    pub fn union(self, other: Extent) -> Extent {
        Extent {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
            z_min: self.z_min.min(other.z_min),
            z_max: self.z_max.max(other.z_max),
        }
    }

    /// Union of all extents, or `None` for an empty iterator.
    pub fn enclosing<I>(extents: I) -> Option<Extent>
    where
        I: IntoIterator<Item = Extent>,
    {
        extents.into_iter().reduce(Extent::union)
    }

    #[inline]
    pub fn as_array(self) -> [f64; 6] {
        [self.x_min, self.x_max, self.y_min, self.y_max, self.z_min, self.z_max]
    }
}

/// Region of interest: the model-coordinate window mapped onto the display.
///
/// Invariant: `x_min < x_max`, `y_min < y_max`, `z_min <= z_max`, all finite.
/// Only [`Region::new`] and [`Region::framing`] construct one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    z_min: f64,
    z_max: f64,
}

impl Region {
    /// Validated constructor. Zero-width or inverted x/y axes are rejected.
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) -> Result<Self> {
        let all = [x_min, x_max, y_min, y_max, z_min, z_max];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(GeomError::invalid("region", format!("non-finite limits {all:?}")));
        }
        if x_min >= x_max {
            return Err(GeomError::invalid(
                "region",
                format!("x range [{x_min}, {x_max}] is empty"),
            ));
        }
        if y_min >= y_max {
            return Err(GeomError::invalid(
                "region",
                format!("y range [{y_min}, {y_max}] is empty"),
            ));
        }
        if !(x_max - x_min).is_finite() || !(y_max - y_min).is_finite() {
            return Err(GeomError::invalid(
                "region",
                format!("x/y span of {all:?} overflows"),
            ));
        }
        if z_min > z_max {
            return Err(GeomError::invalid(
                "region",
                format!("z range [{z_min}, {z_max}] is inverted"),
            ));
        }
        Ok(Self { x_min, x_max, y_min, y_max, z_min, z_max })
    }

    /// Region showing the whole of `extent`.
    ///
    /// A degenerate x or y axis (a horizontal/vertical line, or a single
    /// point) is widened to [`DEGENERATE_SPAN`] around its center, or to a
    /// few ulps of the center when that is larger, so the result satisfies
    /// the region invariant.
    pub fn framing(extent: Extent) -> Result<Self> {
        let (x_min, x_max) = widen_degenerate(extent.x_min, extent.x_max);
        let (y_min, y_max) = widen_degenerate(extent.y_min, extent.y_max);
        Self::new(x_min, x_max, y_min, y_max, extent.z_min, extent.z_max)
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[inline]
    pub fn z_min(&self) -> f64 {
        self.z_min
    }

    #[inline]
    pub fn z_max(&self) -> f64 {
        self.z_max
    }

    /// The x/y window, dropping z.
    #[inline]
    pub fn xy(&self) -> BoundingBox {
        BoundingBox::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 6] {
        [self.x_min, self.x_max, self.y_min, self.y_max, self.z_min, self.z_max]
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
            z_min: -1.0,
            z_max: 1.0,
        }
    }
}

fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if min < max {
        return (min, max);
    }
    let mid = min + 0.5 * (max - min);
    // Far from the origin a unit span is below one ulp; grow it with |mid|.
    let span = DEGENERATE_SPAN.max(mid.abs() * 4.0 * f64::EPSILON);
    (mid - 0.5 * span, mid + 0.5 * span)
}
