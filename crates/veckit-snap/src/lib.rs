//! Resize snapping engine for the Veckit canvas editor.
//!
//! When a user drags a resize handle, the gesture should be able to
//! lock onto nearby reference geometry: edges of sibling objects and
//! ruler guides. This crate implements that pipeline in layers:
//!
//! - [`points`]: which corner points of the virtually resized rectangle
//!   are snap candidates for a given handle direction.
//! - [`adjust`]: turning a per-axis snap delta into a movement
//!   correction, including aspect-ratio coupling.
//! - [`calculate`]: the pure calculator combining point selection, 1D
//!   snapping, and movement adjustment.
//! - [`objects`]: the editor-facing adapter that extracts anchor points
//!   from objects and guides and produces render-ready feedback.
//!
//! The geometric primitives (rectangles, vectors, [`snap1d`]) live in
//! `veckit-core`.
//!
//! [`snap1d`]: veckit_core::snap1d

pub mod adjust;
pub mod calculate;
pub mod objects;
pub mod points;

pub use adjust::{adjust_movement_for_snap, AdjustOptions};
pub use calculate::{
    calculate_resize_snap, AxisIndices, ResizeSnapOptions, ResizeSnapParams, ResizeSnapResult,
    SnappedPoints,
};
pub use objects::{
    snap_objects_resize, GuideAxisHit, GuideSnapHits, ObjectSnapHits, ResizeSnapFeedback,
    SnapAnchors, SnapObjectsOptions, SnapObjectsResizeResult, GRID_UNIT,
};
pub use points::{resize_snap_points, ResizeSnapPoints};
