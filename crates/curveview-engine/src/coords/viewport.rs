/// Viewport size in logical pixels.
///
/// Renderers query [`aspect_ratio`](Self::aspect_ratio) once per frame to
/// project the region of interest.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// `height / width`, or `None` for a zero-sized (e.g. minimized) viewport.
    #[inline]
    pub fn aspect_ratio(self) -> Option<f64> {
        self.is_valid().then(|| self.height as f64 / self.width as f64)
    }

    /// Converts a logical-pixel position into logical device space
    /// (`[-1, 1]²`, +Y up).
    #[inline]
    pub fn to_lds(self, x: f32, y: f32) -> Option<(f64, f64)> {
        if !self.is_valid() {
            return None;
        }
        let lds_x = 2.0 * x as f64 / self.width as f64 - 1.0;
        let lds_y = 1.0 - 2.0 * y as f64 / self.height as f64;
        Some((lds_x, lds_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_is_height_over_width() {
        assert_eq!(Viewport::new(800.0, 400.0).aspect_ratio(), Some(0.5));
        assert_eq!(Viewport::new(300.0, 600.0).aspect_ratio(), Some(2.0));
    }

    #[test]
    fn zero_sized_viewport_has_no_aspect_ratio() {
        assert_eq!(Viewport::new(0.0, 600.0).aspect_ratio(), None);
        assert_eq!(Viewport::new(800.0, 0.0).aspect_ratio(), None);
        assert_eq!(Viewport::new(f32::NAN, 1.0).aspect_ratio(), None);
    }

    #[test]
    fn lds_corners() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.to_lds(0.0, 0.0), Some((-1.0, 1.0)));
        assert_eq!(vp.to_lds(200.0, 100.0), Some((1.0, -1.0)));
        assert_eq!(vp.to_lds(100.0, 50.0), Some((0.0, 0.0)));
    }
}
