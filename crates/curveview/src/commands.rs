//! Keyboard commands that act on the view.

use curveview_engine::coords::Viewport;
use curveview_engine::input::Key;
use curveview_geom::{Extent, GeomError, Region, ViewState};

/// What a key press asks the viewer to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ViewCommand {
    Exit,
    ToggleAspect,
    ResetRegion,
    /// No viewer-level meaning; still forwarded to the models.
    None,
}

impl ViewCommand {
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Escape => Self::Exit,
            Key::Char('a') => Self::ToggleAspect,
            Key::Char('r') => Self::ResetRegion,
            _ => Self::None,
        }
    }
}

/// Applies `cmd` to `view`. Returns true when the view changed.
///
/// `ResetRegion` frames `scene`; without a scene the view is left alone.
pub fn apply(cmd: ViewCommand, view: &mut ViewState, scene: Option<Extent>) -> Result<bool, GeomError> {
    match cmd {
        ViewCommand::ToggleAspect => {
            view.toggle_preserve_aspect();
            Ok(true)
        }
        ViewCommand::ResetRegion => match scene {
            Some(extent) => {
                view.set_region(Region::framing(extent)?);
                Ok(true)
            }
            None => Ok(false),
        },
        ViewCommand::Exit | ViewCommand::None => Ok(false),
    }
}

/// Pointer position in logical device space, `(0, 0)` when the pointer is
/// outside the window.
pub fn pointer_lds(viewport: Viewport, pointer: Option<(f32, f32)>) -> (f64, f64) {
    pointer
        .filter(|&(x, y)| (0.0..=viewport.width).contains(&x) && (0.0..=viewport.height).contains(&y))
        .and_then(|(x, y)| viewport.to_lds(x, y))
        .unwrap_or((0.0, 0.0))
}

/// Window title for the current aspect mode.
pub fn window_title(base: &str, preserve_aspect: bool) -> String {
    let mode = if preserve_aspect { "aspect locked" } else { "aspect free" };
    format!("{base} [{mode}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use curveview_geom::BoundingBox;

    // ── from_key ──────────────────────────────────────────────────────────

    #[test]
    fn maps_command_keys() {
        assert_eq!(ViewCommand::from_key(Key::Escape), ViewCommand::Exit);
        assert_eq!(ViewCommand::from_key(Key::Char('a')), ViewCommand::ToggleAspect);
        assert_eq!(ViewCommand::from_key(Key::Char('r')), ViewCommand::ResetRegion);
        assert_eq!(ViewCommand::from_key(Key::Char('A')), ViewCommand::None);
        assert_eq!(ViewCommand::from_key(Key::Space), ViewCommand::None);
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn toggle_flips_aspect_flag() {
        let mut view = ViewState::default();
        assert!(apply(ViewCommand::ToggleAspect, &mut view, None).unwrap());
        assert!(!view.preserve_aspect());
        assert!(apply(ViewCommand::ToggleAspect, &mut view, None).unwrap());
        assert!(view.preserve_aspect());
    }

    #[test]
    fn reset_frames_the_scene() {
        let mut view = ViewState::default();
        let scene = Extent::from_xy(BoundingBox::new(2.0, 6.0, -3.0, 1.0), -1.0, 1.0);

        assert!(apply(ViewCommand::ResetRegion, &mut view, Some(scene)).unwrap());
        assert_eq!(view.region().as_array(), [2.0, 6.0, -3.0, 1.0, -1.0, 1.0]);
    }

    #[test]
    fn reset_without_scene_keeps_region() {
        let mut view = ViewState::default();
        assert!(!apply(ViewCommand::ResetRegion, &mut view, None).unwrap());
        assert_eq!(view.region(), &Region::default());
    }

    #[test]
    fn exit_and_plain_keys_leave_view_alone() {
        let mut view = ViewState::default();
        assert!(!apply(ViewCommand::Exit, &mut view, None).unwrap());
        assert!(!apply(ViewCommand::None, &mut view, None).unwrap());
        assert_eq!(view, ViewState::default());
    }

    // ── pointer_lds ───────────────────────────────────────────────────────

    #[test]
    fn pointer_maps_into_lds() {
        let vp = Viewport::new(400.0, 200.0);
        assert_eq!(pointer_lds(vp, Some((0.0, 0.0))), (-1.0, 1.0));
        assert_eq!(pointer_lds(vp, Some((300.0, 150.0))), (0.5, -0.5));
    }

    #[test]
    fn pointer_outside_is_origin() {
        let vp = Viewport::new(400.0, 200.0);
        assert_eq!(pointer_lds(vp, None), (0.0, 0.0));
        assert_eq!(pointer_lds(vp, Some((-5.0, 10.0))), (0.0, 0.0));
        assert_eq!(pointer_lds(vp, Some((10.0, 250.0))), (0.0, 0.0));
        assert_eq!(pointer_lds(Viewport::new(0.0, 0.0), Some((0.0, 0.0))), (0.0, 0.0));
    }

    #[test]
    fn title_reflects_mode() {
        assert_eq!(window_title("curves", true), "curves [aspect locked]");
        assert_eq!(window_title("curves", false), "curves [aspect free]");
    }
}
