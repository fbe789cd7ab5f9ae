//! The diagram controller: one mounted diagram's triangle, hinge, mode,
//! construction progress and drag state.
//!
//! Input handlers return a list of [`Action`]s telling the host what changed.
//! The core never renders; the host repaints from the getters after a
//! `RenderNeeded`.
//!
//! ERROR HANDLING
//! ==============
//! Pointer input that cannot be mapped (no viewport yet, singular transform,
//! non-finite coordinates) is dropped without changing state. Input that
//! does not apply to the active module or mode is also a no-op. Handlers
//! never fail; an empty action list means nothing happened.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use kernel::construct::{Segment, exterior_ray};
use kernel::relation::{Midline, SideAngleExtremes, midline, side_angle_extremes};
use kernel::{DerivedMetrics, Point, Triangle, Vertex, derived_metrics};
use serde::Serialize;
use tracing::{debug, info, trace};
use uuid::Uuid;

use crate::config::DiagramConfig;
use crate::consts::{INITIAL_A, INITIAL_B, INITIAL_C};
use crate::construction::{
    ClickOutcome, ConstructionProgress, ConstructionState, DrawnElement, GuidedConstruction, Reveal, Target,
};
use crate::hinge::{Hinge, HingeReadout};
use crate::hit::{HitPart, hit_arm_tip, hit_test, hit_vertex};
use crate::input::{Arm, Cursor, DragTarget, InputState, Mode};
use crate::module::{EditingKind, ModuleId, ModuleProfile};
use crate::viewport::Viewport;

/// Identifies one mounted diagram in logs.
pub type DiagramId = Uuid;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    TriangleChanged { triangle: Triangle },
    HingeChanged { hinge: Hinge },
    ConstructionChanged { progress: ConstructionProgress, pending: Option<Vertex>, state: ConstructionState },
    ModeChanged { mode: Mode },
    ModuleChanged { module: ModuleId },
    SetCursor { cursor: Cursor },
    RenderNeeded,
}

/// Core diagram state: everything that does not depend on a rendering surface.
#[derive(Debug, Clone)]
pub struct DiagramCore {
    id: DiagramId,
    config: DiagramConfig,
    module: ModuleId,
    profile: ModuleProfile,
    mode: Mode,
    triangle: Triangle,
    hinge: Hinge,
    construction: Option<GuidedConstruction>,
    input: InputState,
    viewport: Option<Viewport>,
}

impl DiagramCore {
    #[must_use]
    pub fn new(module: ModuleId) -> Self {
        Self::with_config(module, DiagramConfig::default())
    }

    #[must_use]
    pub fn with_config(module: ModuleId, config: DiagramConfig) -> Self {
        let profile = module.profile();
        let core = Self {
            id: Uuid::new_v4(),
            config,
            module,
            profile,
            mode: profile.default_mode,
            triangle: Triangle::new(INITIAL_A, INITIAL_B, INITIAL_C),
            hinge: Hinge::new(config.hinge),
            construction: profile.construction.map(GuidedConstruction::new),
            input: InputState::Idle,
            viewport: None,
        };
        debug!(diagram = %core.id, module = %module, "diagram mounted");
        core
    }

    // --- Module / mode ---

    /// Activate a teaching module. Resets mode, construction progress and
    /// any drag; entering a hinge module also resets the hinge.
    pub fn set_module(&mut self, module: ModuleId) -> Vec<Action> {
        self.input = InputState::Idle;
        self.module = module;
        self.profile = module.profile();
        self.mode = self.profile.default_mode;
        self.construction = self.profile.construction.map(GuidedConstruction::new);

        let mut actions = vec![Action::ModuleChanged { module }, Action::ModeChanged { mode: self.mode }];
        if let Some(change) = self.construction_changed() {
            actions.push(change);
        }
        if self.profile.editing == EditingKind::Hinge {
            self.hinge.reset();
            actions.push(Action::HingeChanged { hinge: self.hinge });
        }
        actions.push(Action::SetCursor { cursor: Cursor::Default });
        actions.push(Action::RenderNeeded);

        info!(diagram = %self.id, module = %module, mode = ?self.mode, "module activated");
        actions
    }

    /// Switch between move and draw. Ignored in modules without a mode toggle.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        if !self.profile.mode_switchable || mode == self.mode {
            return Vec::new();
        }
        self.input = InputState::Idle;
        self.mode = mode;
        debug!(diagram = %self.id, ?mode, "mode switched");
        vec![Action::ModeChanged { mode }, Action::RenderNeeded]
    }

    /// Install (or clear) the screen transform supplied by the host.
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
    }

    // --- Drag surface ---

    /// Grab `target`. Any drag already in progress ends first.
    ///
    /// Vertices can be grabbed only in free-vertex modules and arms only in
    /// hinge modules.
    pub fn begin_drag(&mut self, target: DragTarget) -> Vec<Action> {
        let mut actions = self.end_drag();
        let state = match (target, self.profile.editing) {
            (DragTarget::Vertex(vertex), EditingKind::FreeVertices) => {
                InputState::DraggingVertex { vertex, orig: self.triangle.vertex(vertex) }
            }
            (DragTarget::Arm(arm), EditingKind::Hinge) => {
                InputState::DraggingArm { arm, orig_angle_deg: self.hinge.arm_angle_deg(arm) }
            }
            _ => return actions,
        };
        self.input = state;
        debug!(diagram = %self.id, ?target, "drag started");

        let cursor = match target {
            DragTarget::Vertex(_) if self.mode == Mode::Move => Cursor::Move,
            DragTarget::Vertex(_) => Cursor::Default,
            DragTarget::Arm(_) => Cursor::Grabbing,
        };
        actions.push(Action::SetCursor { cursor });
        actions
    }

    /// Move the active drag to `model` (model coordinates).
    ///
    /// Vertices are clamped to the canvas bounds and move only in move mode.
    /// Arms take the angle of `model` around their pivot.
    pub fn update_drag(&mut self, model: Point) -> Vec<Action> {
        if !model.is_finite() {
            return Vec::new();
        }
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::DraggingVertex { vertex, .. } => {
                if self.mode != Mode::Move {
                    return Vec::new();
                }
                let bounds = self.config.bounds;
                let p = Point::new(model.x.clamp(bounds.min, bounds.max), model.y.clamp(bounds.min, bounds.max));
                self.triangle.set_vertex(vertex, p);
                trace!(diagram = %self.id, ?vertex, x = p.x, y = p.y, "vertex dragged");
                vec![Action::TriangleChanged { triangle: self.triangle }, Action::RenderNeeded]
            }
            InputState::DraggingArm { arm, .. } => self.swing_arm(arm, model),
        }
    }

    /// Release the active drag, keeping its result.
    pub fn end_drag(&mut self) -> Vec<Action> {
        let Some(target) = self.input.target() else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        debug!(diagram = %self.id, ?target, "drag ended");
        vec![Action::SetCursor { cursor: Cursor::Default }]
    }

    /// Abort the active drag, restoring the grabbed item to where it started.
    pub fn cancel_drag(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        let mut actions = match state {
            InputState::Idle => return Vec::new(),
            InputState::DraggingVertex { vertex, orig } => {
                self.triangle.set_vertex(vertex, orig);
                vec![Action::TriangleChanged { triangle: self.triangle }]
            }
            InputState::DraggingArm { arm, orig_angle_deg } => {
                self.hinge.set_arm_angle_deg(arm, orig_angle_deg);
                vec![Action::HingeChanged { hinge: self.hinge }]
            }
        };
        debug!(diagram = %self.id, "drag cancelled");
        actions.push(Action::SetCursor { cursor: Cursor::Default });
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Pointer events (screen coordinates) ---

    /// Pointer pressed. Hit-tests the diagram and either starts a drag or,
    /// in draw mode, routes the press to the construction as a click.
    pub fn pointer_down(&mut self, screen: Point) -> Vec<Action> {
        let Some(model) = self.to_model(screen) else {
            return Vec::new();
        };
        match self.profile.editing {
            EditingKind::Hinge => match hit_arm_tip(&self.hinge, model) {
                Some(arm) => self.begin_drag(DragTarget::Arm(arm)),
                None => Vec::new(),
            },
            EditingKind::FreeVertices => match self.mode {
                Mode::Move => match hit_vertex(&self.triangle, model) {
                    Some(v) => self.begin_drag(DragTarget::Vertex(v)),
                    None => Vec::new(),
                },
                Mode::Draw => match hit_test(&self.triangle, &self.targets(), model) {
                    Some(HitPart::Vertex(v)) => self.click_vertex(v),
                    Some(HitPart::Target(key)) => self.click_target(key),
                    Some(HitPart::ArmTip(_)) | None => Vec::new(),
                },
            },
        }
    }

    /// Pointer moved. Dropped until the host has supplied a usable viewport.
    pub fn pointer_move(&mut self, screen: Point) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }
        match self.to_model(screen) {
            Some(model) => self.update_drag(model),
            None => Vec::new(),
        }
    }

    pub fn pointer_up(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    fn to_model(&self, screen: Point) -> Option<Point> {
        self.viewport?.screen_to_model(screen)
    }

    // --- Construction ---

    /// Click on vertex `v` while drawing.
    pub fn click_vertex(&mut self, v: Vertex) -> Vec<Action> {
        self.construction_click(|c| c.click_vertex(v))
    }

    /// Click on the construction target keyed `key` while drawing.
    pub fn click_target(&mut self, key: Vertex) -> Vec<Action> {
        self.construction_click(|c| c.click_target(key))
    }

    fn construction_click(&mut self, click: impl FnOnce(&mut GuidedConstruction) -> ClickOutcome) -> Vec<Action> {
        if self.mode != Mode::Draw {
            return Vec::new();
        }
        let Some(construction) = self.construction.as_mut() else {
            return Vec::new();
        };
        let outcome = click(construction);
        match outcome {
            ClickOutcome::Ignored => return Vec::new(),
            ClickOutcome::Committed(key) => {
                debug!(diagram = %self.id, kind = ?construction.kind(), ?key, "construction line drawn");
            }
            ClickOutcome::Completed(key) => {
                info!(diagram = %self.id, kind = ?construction.kind(), ?key, "construction complete");
            }
            ClickOutcome::Selected(v) | ClickOutcome::Deselected(v) => {
                trace!(diagram = %self.id, ?v, ?outcome, "construction selection");
            }
        }
        let mut actions: Vec<Action> = self.construction_changed().into_iter().collect();
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Clear construction progress and the pending selection.
    pub fn reset_construction(&mut self) -> Vec<Action> {
        let Some(construction) = self.construction.as_mut() else {
            return Vec::new();
        };
        construction.reset();
        debug!(diagram = %self.id, "construction reset");
        let mut actions: Vec<Action> = self.construction_changed().into_iter().collect();
        actions.push(Action::RenderNeeded);
        actions
    }

    fn construction_changed(&self) -> Option<Action> {
        self.construction.as_ref().map(|c| Action::ConstructionChanged {
            progress: c.progress(),
            pending: c.pending(),
            state: c.state(),
        })
    }

    // --- Hinge ---

    /// Set an arm length from its slider. Hinge modules only.
    pub fn set_arm_length(&mut self, arm: Arm, value: f64) -> Vec<Action> {
        if self.profile.editing != EditingKind::Hinge {
            return Vec::new();
        }
        let was_formed = self.hinge.is_formed();
        let applied = self.hinge.set_arm_length(arm, value);
        debug!(diagram = %self.id, ?arm, requested = value, applied, "arm length set");
        self.hinge_changed(was_formed)
    }

    /// Point an arm at `model` (model coordinates). Hinge modules only.
    pub fn drag_arm_angle(&mut self, arm: Arm, model: Point) -> Vec<Action> {
        if self.profile.editing != EditingKind::Hinge || !model.is_finite() {
            return Vec::new();
        }
        self.swing_arm(arm, model)
    }

    fn swing_arm(&mut self, arm: Arm, model: Point) -> Vec<Action> {
        let was_formed = self.hinge.is_formed();
        let angle = self.hinge.drag_arm_angle(arm, model);
        trace!(diagram = %self.id, ?arm, angle, "arm swung");
        self.hinge_changed(was_formed)
    }

    fn hinge_changed(&self, was_formed: bool) -> Vec<Action> {
        let formed = self.hinge.is_formed();
        if formed != was_formed {
            info!(diagram = %self.id, formed, gap = self.hinge.gap(), "hinge formation changed");
        }
        vec![Action::HingeChanged { hinge: self.hinge }, Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> DiagramId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    #[must_use]
    pub fn module(&self) -> ModuleId {
        self.module
    }

    #[must_use]
    pub fn profile(&self) -> ModuleProfile {
        self.profile
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn triangle(&self) -> Triangle {
        self.triangle
    }

    #[must_use]
    pub fn hinge(&self) -> &Hinge {
        &self.hinge
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Derived quantities, recomputed from the current triangle.
    #[must_use]
    pub fn metrics(&self) -> DerivedMetrics {
        derived_metrics(&self.triangle, &self.config.tolerances)
    }

    #[must_use]
    pub fn construction(&self) -> Option<&GuidedConstruction> {
        self.construction.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Option<ConstructionProgress> {
        self.construction.as_ref().map(GuidedConstruction::progress)
    }

    /// Clickable targets. Shown only while drawing.
    #[must_use]
    pub fn targets(&self) -> Vec<Target> {
        match (&self.construction, self.mode) {
            (Some(c), Mode::Draw) => c.targets(&self.triangle),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn drawn_elements(&self) -> Vec<DrawnElement> {
        self.construction
            .as_ref()
            .map(|c| c.drawn_elements(&self.triangle))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn reveal(&self) -> Option<Reveal> {
        self.construction.as_ref()?.reveal(&self.triangle)
    }

    /// Cursor to show while hovering vertex `v`.
    #[must_use]
    pub fn vertex_cursor(&self, v: Vertex) -> Cursor {
        match (self.profile.editing, self.mode) {
            (EditingKind::Hinge, _) => Cursor::Default,
            (EditingKind::FreeVertices, Mode::Move) => Cursor::Move,
            (EditingKind::FreeVertices, Mode::Draw) => {
                self.construction.as_ref().map_or(Cursor::Default, |c| c.vertex_cursor(v))
            }
        }
    }

    #[must_use]
    pub fn hinge_readout(&self) -> HingeReadout {
        self.hinge.readout()
    }

    #[must_use]
    pub fn midline(&self) -> Midline {
        midline(&self.triangle)
    }

    #[must_use]
    pub fn side_angle_extremes(&self) -> SideAngleExtremes {
        side_angle_extremes(&self.triangle)
    }

    /// Extension of side `CB` past `B`, marking the exterior angle at `B`.
    #[must_use]
    pub fn exterior_extension(&self) -> Segment {
        let tri = &self.triangle;
        exterior_ray(tri.c, tri.b, tri.b.distance(tri.c))
    }
}
