use tracing::debug;

use crate::api::scene::{GraphInput, GraphScene, HitTester, build_scene};
use crate::core::GraphTuning;
use crate::error::GraphResult;
use crate::interaction::{ActivePoint, ActivePointEvent, HoverState};
use crate::render::Renderer;

/// Pointer-resolution state scoped to one completed render pass.
///
/// This is the explicit owner of what the reference behavior kept as ambient
/// listener state: the engine releases the previous pass unconditionally
/// before installing the next one, so handlers can never accumulate.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    hit_test: HitTester,
}

impl RenderPass {
    #[must_use]
    pub fn hit_test(&self) -> &HitTester {
        &self.hit_test
    }
}

/// Chart engine owning a rendering backend, the layout tuning, and the
/// transient hover state.
///
/// Rendering is synchronous and host-driven: the host calls `render` whenever
/// any input changed, and forwards pointer events between passes.
pub struct GraphEngine<R: Renderer> {
    renderer: R,
    tuning: GraphTuning,
    hover: HoverState,
    pass: Option<RenderPass>,
}

impl<R: Renderer> GraphEngine<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            tuning: GraphTuning::default(),
            hover: HoverState::default(),
            pass: None,
        }
    }

    pub fn with_tuning(renderer: R, tuning: GraphTuning) -> GraphResult<Self> {
        let tuning = tuning.validate()?;
        Ok(Self {
            renderer,
            tuning,
            hover: HoverState::default(),
            pass: None,
        })
    }

    #[must_use]
    pub fn tuning(&self) -> GraphTuning {
        self.tuning
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn active_point(&self) -> Option<ActivePoint> {
        self.hover.active()
    }

    /// Runs one full render pass: build the scene, draw the frame, then
    /// install the pass's pointer-resolution state.
    ///
    /// The previous pass is released before the new one is attached; on any
    /// failure no pass is left installed, so pointer events resolve to
    /// nothing rather than against stale geometry.
    pub fn render(&mut self, input: &GraphInput) -> GraphResult<GraphScene> {
        self.pass = None;

        let scene = build_scene(input, self.tuning, self.hover.active())?;
        self.renderer.render(&scene.frame)?;

        self.pass = Some(RenderPass {
            hit_test: scene.hit_test.clone(),
        });
        debug!(samples = scene.hit_test.len(), "render pass installed");
        Ok(scene)
    }

    /// Resolves a pointer move at `canvas_x` logical pixels against the
    /// current pass and reports the change, if any.
    pub fn pointer_move(&mut self, canvas_x: f64) -> Option<ActivePointEvent> {
        let resolved = self
            .pass
            .as_ref()
            .and_then(|pass| pass.hit_test.resolve_at_x(canvas_x));
        self.hover.on_pointer_move(resolved)
    }

    /// Clears the active point when the pointer leaves the drawable area.
    pub fn pointer_leave(&mut self) -> Option<ActivePointEvent> {
        self.hover.on_pointer_leave()
    }

    /// Releases the current pass and hover state, as on chart teardown.
    pub fn teardown(&mut self) {
        self.pass = None;
        let _ = self.hover.on_pointer_leave();
    }
}
