use anyhow::Context;
use winit::event::WindowEvent;

use curveview_engine::core::{App, AppControl, FrameCtx};
use curveview_engine::input::Key;
use curveview_engine::model::CurveModel;
use curveview_engine::render::curve::CurveShader;
use curveview_geom::{ColorAssigner, CurveDef, Extent, Point, Region, ViewState};

use crate::cli::ViewerConfig;
use crate::commands::{self, ViewCommand};

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

struct ModelSlot {
    model: CurveModel,
    /// Projection failures are reported once per model.
    warned: bool,
}

/// Curve viewer application.
///
/// Models need a device, so they are built on the first frame from the
/// definitions read at startup. The initial region of interest then frames
/// every model that was built.
pub struct Viewer {
    pending: Vec<CurveDef>,
    models: Vec<ModelSlot>,
    shader: Option<CurveShader>,

    colors: ColorAssigner,
    view: ViewState,
    scene: Option<Extent>,

    title: String,
}

impl Viewer {
    pub fn new(defs: Vec<CurveDef>, config: &ViewerConfig) -> Self {
        let mut view = ViewState::default();
        view.set_preserve_aspect(config.preserve_aspect);

        Self {
            pending: defs,
            models: Vec::new(),
            shader: None,
            colors: ColorAssigner::new(),
            view,
            scene: None,
            title: config.title.clone(),
        }
    }

    fn build_models(&mut self, ctx: &FrameCtx<'_, '_>) -> anyhow::Result<()> {
        let rctx = ctx.render_ctx();
        let shader = CurveShader::new(rctx.device, rctx.surface_format);

        let requested = self.pending.len();
        for (idx, def) in self.pending.drain(..).enumerate() {
            match CurveModel::new(&rctx, &shader, def, &mut self.colors) {
                Ok(model) => self.models.push(ModelSlot { model, warned: false }),
                Err(e) => log::warn!("curve {} skipped: {e}", idx + 1),
            }
        }

        let scene = Extent::enclosing(self.models.iter().map(|slot| slot.model.bounding_box()))
            .with_context(|| format!("none of the {requested} curves could be built"))?;
        let region = Region::framing(scene).context("cannot frame the loaded curves")?;

        log::info!(
            "{} of {} curves ready, region of interest {:?}",
            self.models.len(),
            requested,
            region.as_array()
        );

        self.view.set_region(region);
        self.scene = Some(scene);
        self.shader = Some(shader);
        Ok(())
    }

    /// Runs one key command. Returns `Exit` when the viewer should close.
    fn handle_key(&mut self, ctx: &mut FrameCtx<'_, '_>, cmd: ViewCommand, ch: Option<char>) -> AppControl {
        if cmd == ViewCommand::Exit {
            return AppControl::Exit;
        }

        match commands::apply(cmd, &mut self.view, self.scene) {
            Ok(true) => {
                log::debug!(
                    "view: region {:?}, preserve aspect {}",
                    self.view.region().as_array(),
                    self.view.preserve_aspect()
                );
                if cmd == ViewCommand::ToggleAspect {
                    ctx.runtime.set_title(commands::window_title(&self.title, self.view.preserve_aspect()));
                }
            }
            Ok(false) => {}
            Err(e) => log::warn!("{cmd:?} failed: {e}"),
        }

        let Some(ch) = ch else {
            return AppControl::Continue;
        };

        let viewport = ctx.window.viewport();
        let (lds_x, lds_y) = commands::pointer_lds(viewport, ctx.input.pointer_pos);
        for slot in &mut self.models {
            slot.model.handle_command(ch, lds_x, lds_y);
        }

        if let Some(ar) = viewport.aspect_ratio() {
            if let Ok(projection) = self.view.projection(ar) {
                let mc = projection.unapply(Point::new(lds_x, lds_y));
                log::debug!("'{ch}' at lds ({lds_x:.3}, {lds_y:.3}) = model ({:.6}, {:.6})", mc.x, mc.y);
            }
        }

        AppControl::Continue
    }
}

impl App for Viewer {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            log::debug!("window resized to {}x{}", size.width, size.height);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.shader.is_none() {
            if let Err(e) = self.build_models(ctx) {
                ctx.runtime.fail(e);
                return AppControl::Exit;
            }
            ctx.runtime.set_title(commands::window_title(&self.title, self.view.preserve_aspect()));
        }

        // Auto-repeat would flip the aspect toggle back and forth.
        let input_frame = ctx.input_frame;
        for press in input_frame.key_presses.iter().filter(|p| !p.repeat) {
            let ch = match press.key {
                Key::Char(c) => Some(c),
                Key::Space => Some(' '),
                _ => None,
            };
            if self.handle_key(ctx, ViewCommand::from_key(press.key), ch) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        let Some(shader) = self.shader.as_ref() else {
            return AppControl::Continue;
        };
        let view = &self.view;
        let models = &mut self.models;

        ctx.render(CLEAR, |rctx, target| {
            for (idx, slot) in models.iter_mut().enumerate() {
                if let Err(e) = slot.model.render(rctx, target, shader, view) {
                    if !slot.warned {
                        log::warn!("curve {} not drawn: {e}", idx + 1);
                        slot.warned = true;
                    }
                }
            }
        })
    }
}
