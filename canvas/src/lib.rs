//! Interaction layer for the triangle diagrams.
//!
//! This crate owns everything about one mounted diagram except painting:
//! mapping pointer input into model space, dragging vertices and hinge arms,
//! the move/draw mode, and the guided constructions that reveal the triangle
//! centers. Geometry comes from the `kernel` crate and is recomputed on every
//! read. The host is responsible only for wiring pointer events to the
//! controller and repainting on the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The per-diagram controller [`engine::DiagramCore`] |
//! | [`module`] | Teaching modules and their strategy table |
//! | [`construction`] | Step-gated construction state machine |
//! | [`hinge`] | Two-arm triangle-inequality model |
//! | [`viewport`] | Screen/model coordinate transform |
//! | [`input`] | Mode, drag targets and the drag state machine |
//! | [`hit`] | Hit-testing against vertices, targets and arm tips |
//! | [`config`] | Environment-driven tolerances and bounds |
//! | [`consts`] | Shared numeric constants (canvas bounds, hit radii, hinge) |

pub mod config;
pub mod consts;
pub mod construction;
pub mod engine;
pub mod hinge;
pub mod hit;
pub mod input;
pub mod module;
pub mod viewport;

pub use engine::{Action, DiagramCore};
pub use module::ModuleId;
