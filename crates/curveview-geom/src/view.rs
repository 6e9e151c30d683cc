use crate::bounds::Region;
use crate::error::Result;
use crate::mapper::{compute_projection, Projection};

/// Viewing state shared by every curve during a frame.
///
/// Holds the region of interest and whether rendering should preserve the
/// viewport aspect ratio. The driver owns it and mutates it only between
/// frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    region: Region,
    preserve_aspect: bool,
}

impl ViewState {
    pub fn new(region: Region, preserve_aspect: bool) -> Self {
        Self { region, preserve_aspect }
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    #[inline]
    pub fn preserve_aspect(&self) -> bool {
        self.preserve_aspect
    }

    pub fn set_preserve_aspect(&mut self, enabled: bool) {
        self.preserve_aspect = enabled;
    }

    /// Flips aspect preservation and returns the new setting.
    pub fn toggle_preserve_aspect(&mut self) -> bool {
        self.preserve_aspect = !self.preserve_aspect;
        self.preserve_aspect
    }

    /// Projection of the current region for a viewport of the given
    /// `height / width` ratio.
    pub fn projection(&self, viewport_ar: f64) -> Result<Projection> {
        compute_projection(&self.region, self.preserve_aspect, viewport_ar)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Region::default(), true)
    }
}
