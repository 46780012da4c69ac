//! Core resize-snap calculation.
//!
//! Pure math with no editor dependencies: the adapter in
//! [`crate::objects`] extracts anchor points from editor geometry and
//! maps the index-based result back to objects and guides.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use veckit_core::{snap1d, Axis, CardinalDirection, Rectangle, Snap1DResult, Vector2};

use crate::adjust::{adjust_movement_for_snap, AdjustOptions};
use crate::points::resize_snap_points;

/// Behavior toggles shared by the calculator and the adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeSnapOptions {
    /// Maintain the initial rectangle's aspect ratio (Shift key).
    pub preserve_aspect_ratio: bool,
    /// Resize symmetrically about the center (Alt/Option key).
    pub center_origin: bool,
}

/// Inputs to [`calculate_resize_snap`].
#[derive(Debug, Clone, Copy)]
pub struct ResizeSnapParams<'a> {
    /// The rectangle being resized, before any movement.
    pub initial: Rectangle,
    /// The handle being dragged.
    pub direction: CardinalDirection,
    /// Transform origin (the opposite handle, or the center).
    pub origin: Vector2,
    /// Total raw movement since the gesture started.
    pub movement: Vector2,
    /// Flat list of anchor points extracted from reference geometry.
    pub anchors: &'a [Vector2],
    /// Maximum distance at which an agent point is pulled to an anchor.
    pub threshold: f64,
    pub options: ResizeSnapOptions,
}

/// Per-axis index lists into the agent or anchor point sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisIndices {
    pub x: Vec<usize>,
    pub y: Vec<usize>,
}

/// World-space points that participated in the winning snap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnappedPoints {
    pub agent: Vec<Vector2>,
    pub anchor: Vec<Vector2>,
}

/// Output of [`calculate_resize_snap`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeSnapResult {
    /// The movement with the snap correction applied.
    pub adjusted_movement: Vector2,
    /// Per-axis snap correction; zero on axes that did not snap.
    pub snap_delta: Vector2,
    /// The agent/anchor points behind the correction.
    pub snapped_points: SnappedPoints,
    /// Indices of agent snap points that hit, per axis.
    pub hit_agent_indices: AxisIndices,
    /// Indices into the flat anchor list that hit, per axis.
    pub hit_anchor_indices: AxisIndices,
}

impl ResizeSnapResult {
    fn pass_through(movement: Vector2) -> Self {
        Self {
            adjusted_movement: movement,
            ..Self::default()
        }
    }
}

/// Picks the axis that drives an aspect-locked corner resize this tick.
///
/// Recomputed on every call from instantaneous movement magnitudes; the
/// choice can flip between ticks when the gesture hovers near the
/// diagonal.
fn dominant_axis(movement: Vector2) -> Axis {
    if movement.x.abs() > movement.y.abs() {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Computes whether and how a resize gesture should snap to the given
/// anchor points.
///
/// Orchestrates the snap pipeline: select the 2-3 corner points moving
/// for this direction, snap each active axis independently with
/// [`snap1d`], convert the winning deltas into a movement correction
/// (coupling axes when the aspect ratio is locked), and collect the
/// participating point indices for visual feedback.
///
/// With aspect-ratio preservation on a corner handle, only the dominant
/// axis is snapped independently; the other axis is derived by the
/// movement adjuster. An empty anchor list passes the movement through
/// untouched.
pub fn calculate_resize_snap(params: &ResizeSnapParams<'_>) -> ResizeSnapResult {
    let ResizeSnapParams {
        initial,
        direction,
        origin,
        movement,
        anchors,
        threshold,
        options,
    } = *params;

    if anchors.is_empty() {
        return ResizeSnapResult::pass_through(movement);
    }

    let agent = resize_snap_points(&initial, direction, origin, movement, options.center_origin);

    let horizontal = direction.is_horizontal();
    let vertical = direction.is_vertical();

    // Aspect-locked corner drags snap one axis per tick.
    let locked_axis = if options.preserve_aspect_ratio && horizontal && vertical {
        Some(dominant_axis(movement))
    } else {
        None
    };

    let x_result: Option<Snap1DResult> = (horizontal && locked_axis != Some(Axis::Y)).then(|| {
        let agent_xs: SmallVec<[f64; 3]> = agent.points.iter().map(|p| p.x).collect();
        let anchor_xs: Vec<f64> = anchors.iter().map(|p| p.x).collect();
        snap1d(&agent_xs, &anchor_xs, threshold, 0.0)
    });
    let y_result: Option<Snap1DResult> = (vertical && locked_axis != Some(Axis::X)).then(|| {
        let agent_ys: SmallVec<[f64; 3]> = agent.points.iter().map(|p| p.y).collect();
        let anchor_ys: Vec<f64> = anchors.iter().map(|p| p.y).collect();
        snap1d(&agent_ys, &anchor_ys, threshold, 0.0)
    });

    let axis_delta = |result: &Option<Snap1DResult>| -> f64 {
        match result {
            Some(r) if r.is_hit() => r.distance,
            _ => 0.0,
        }
    };
    let snap_delta = Vector2::new(axis_delta(&x_result), axis_delta(&y_result));

    let adjustment = adjust_movement_for_snap(
        snap_delta,
        direction,
        origin,
        &initial,
        &AdjustOptions {
            preserve_aspect_ratio: options.preserve_aspect_ratio,
            original_movement: Some(movement),
        },
    );

    let mut result = ResizeSnapResult {
        adjusted_movement: movement + adjustment,
        snap_delta,
        ..ResizeSnapResult::default()
    };

    if let Some(x) = x_result.filter(|r| r.is_hit()) {
        for &idx in &x.hit_agent_indices {
            result.snapped_points.agent.push(agent.points[idx]);
            result.hit_agent_indices.x.push(idx);
        }
        for &idx in &x.hit_anchor_indices {
            result.snapped_points.anchor.push(anchors[idx]);
            result.hit_anchor_indices.x.push(idx);
        }
    }
    if let Some(y) = y_result.filter(|r| r.is_hit()) {
        for &idx in &y.hit_agent_indices {
            result.snapped_points.agent.push(agent.points[idx]);
            result.hit_agent_indices.y.push(idx);
        }
        for &idx in &y.hit_anchor_indices {
            result.snapped_points.anchor.push(anchors[idx]);
            result.hit_anchor_indices.y.push(idx);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params<'a>(
        initial: Rectangle,
        direction: CardinalDirection,
        origin: Vector2,
        movement: Vector2,
        anchors: &'a [Vector2],
    ) -> ResizeSnapParams<'a> {
        ResizeSnapParams {
            initial,
            direction,
            origin,
            movement,
            anchors,
            threshold: 5.0,
            options: ResizeSnapOptions::default(),
        }
    }

    const SQUARE: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    #[test]
    fn snaps_right_edge_to_anchor() {
        let anchors = [Vector2::new(150.0, 50.0)];
        let result = calculate_resize_snap(&params(
            SQUARE,
            CardinalDirection::E,
            Vector2::ZERO,
            Vector2::new(47.0, 0.0),
            &anchors,
        ));
        assert_eq!(result.adjusted_movement, Vector2::new(50.0, 0.0));
        assert_eq!(result.snap_delta, Vector2::new(3.0, 0.0));
        assert_eq!(result.hit_agent_indices.x, vec![0, 1]);
        assert_eq!(result.hit_anchor_indices.x, vec![0]);
        assert!(result.hit_agent_indices.y.is_empty());
    }

    #[test]
    fn does_not_snap_outside_threshold() {
        let anchors = [Vector2::new(150.0, 50.0)];
        let result = calculate_resize_snap(&params(
            SQUARE,
            CardinalDirection::E,
            Vector2::ZERO,
            Vector2::new(40.0, 0.0),
            &anchors,
        ));
        assert_eq!(result.adjusted_movement, Vector2::new(40.0, 0.0));
        assert_eq!(result.snap_delta, Vector2::ZERO);
        assert!(result.snapped_points.agent.is_empty());
    }

    #[test]
    fn snaps_left_edge_mirrored() {
        let rect = Rectangle::new(100.0, 0.0, 100.0, 100.0);
        let anchors = [Vector2::new(50.0, 50.0)];
        let result = calculate_resize_snap(&params(
            rect,
            CardinalDirection::W,
            Vector2::new(200.0, 0.0),
            Vector2::new(-47.0, 0.0),
            &anchors,
        ));
        assert_eq!(result.adjusted_movement, Vector2::new(-50.0, 0.0));
        assert_eq!(result.snap_delta, Vector2::new(-3.0, 0.0));
    }

    #[test]
    fn snaps_top_edge_mirrored() {
        let rect = Rectangle::new(0.0, 100.0, 100.0, 100.0);
        let anchors = [Vector2::new(50.0, 50.0)];
        let result = calculate_resize_snap(&params(
            rect,
            CardinalDirection::N,
            Vector2::new(0.0, 200.0),
            Vector2::new(0.0, -47.0),
            &anchors,
        ));
        assert_eq!(result.adjusted_movement, Vector2::new(0.0, -50.0));
        assert_eq!(result.snap_delta, Vector2::new(0.0, -3.0));
    }

    #[test]
    fn snaps_bottom_edge() {
        let anchors = [Vector2::new(50.0, 150.0)];
        let result = calculate_resize_snap(&params(
            SQUARE,
            CardinalDirection::S,
            Vector2::ZERO,
            Vector2::new(0.0, 47.0),
            &anchors,
        ));
        assert_eq!(result.adjusted_movement, Vector2::new(0.0, 50.0));
        assert_eq!(result.snap_delta, Vector2::new(0.0, 3.0));
    }

    #[test]
    fn horizontal_handle_never_produces_vertical_delta() {
        // Anchor directly on the moving corner's horizontal line.
        let anchors = [Vector2::new(150.0, 0.0)];
        let result = calculate_resize_snap(&params(
            SQUARE,
            CardinalDirection::E,
            Vector2::ZERO,
            Vector2::new(47.0, 0.0),
            &anchors,
        ));
        assert_eq!(result.snap_delta.y, 0.0);
        assert!(result.hit_anchor_indices.y.is_empty());
    }

    #[test]
    fn picks_nearest_of_multiple_anchors() {
        let anchors = [Vector2::new(145.0, 50.0), Vector2::new(150.0, 50.0)];
        let result = calculate_resize_snap(&params(
            SQUARE,
            CardinalDirection::E,
            Vector2::ZERO,
            Vector2::new(47.0, 0.0),
            &anchors,
        ));
        assert_eq!(result.adjusted_movement, Vector2::new(45.0, 0.0));
        assert_eq!(result.hit_anchor_indices.x, vec![0]);
    }

    #[test]
    fn empty_anchor_list_passes_movement_through() {
        let result = calculate_resize_snap(&params(
            SQUARE,
            CardinalDirection::E,
            Vector2::ZERO,
            Vector2::new(47.0, 0.0),
            &[],
        ));
        assert_eq!(result.adjusted_movement, Vector2::new(47.0, 0.0));
        assert_eq!(result.snap_delta, Vector2::ZERO);
    }

    #[test]
    fn negative_movement_snaps_while_shrinking() {
        let anchors = [Vector2::new(50.0, 50.0)];
        let result = calculate_resize_snap(&params(
            SQUARE,
            CardinalDirection::E,
            Vector2::ZERO,
            Vector2::new(-47.0, 0.0),
            &anchors,
        ));
        assert_eq!(result.adjusted_movement, Vector2::new(-50.0, 0.0));
    }

    #[test]
    fn aspect_lock_couples_the_derived_axis() {
        let anchors = [Vector2::new(150.0, 150.0)];
        let mut p = params(
            SQUARE,
            CardinalDirection::SE,
            Vector2::ZERO,
            Vector2::new(47.0, 30.0),
            &anchors,
        );
        p.options.preserve_aspect_ratio = true;
        let result = calculate_resize_snap(&p);
        // X dominates (47 > 30) and snaps to 150; y is derived so the
        // result stays square.
        assert_eq!(result.adjusted_movement, Vector2::new(50.0, 50.0));
        assert_eq!(result.snap_delta, Vector2::new(3.0, 0.0));
        assert!(result.hit_anchor_indices.y.is_empty());
    }

    #[test]
    fn aspect_lock_dominant_axis_follows_magnitude() {
        let anchors = [Vector2::new(150.0, 150.0)];
        let mut p = params(
            SQUARE,
            CardinalDirection::SE,
            Vector2::ZERO,
            Vector2::new(30.0, 47.0),
            &anchors,
        );
        p.options.preserve_aspect_ratio = true;
        let result = calculate_resize_snap(&p);
        // Y dominates this tick; x is derived.
        assert_eq!(result.snap_delta, Vector2::new(0.0, 3.0));
        assert_eq!(result.adjusted_movement, Vector2::new(50.0, 50.0));
        assert!(result.hit_anchor_indices.x.is_empty());
    }

    #[test]
    fn center_origin_snaps_the_dragged_edge() {
        let rect = Rectangle::new(50.0, 50.0, 100.0, 100.0);
        let anchors = [Vector2::new(200.0, 100.0)];
        let mut p = params(
            rect,
            CardinalDirection::E,
            Vector2::new(100.0, 100.0),
            Vector2::new(47.0, 0.0),
            &anchors,
        );
        p.options.center_origin = true;
        let result = calculate_resize_snap(&p);
        // Doubled size delta puts the right edge at 197; the anchor at
        // 200 is within threshold.
        assert_eq!(result.snap_delta, Vector2::new(3.0, 0.0));
        assert_eq!(result.adjusted_movement, Vector2::new(50.0, 0.0));
    }

    #[test]
    fn equidistant_anchors_share_one_distance() {
        let anchors = [Vector2::new(150.0, 0.0), Vector2::new(150.0, 100.0)];
        let result = calculate_resize_snap(&params(
            SQUARE,
            CardinalDirection::E,
            Vector2::ZERO,
            Vector2::new(47.0, 0.0),
            &anchors,
        ));
        assert_eq!(result.snap_delta, Vector2::new(3.0, 0.0));
        assert_eq!(result.hit_anchor_indices.x, vec![0, 1]);
        assert_eq!(result.hit_agent_indices.x, vec![0, 1]);
    }

    proptest! {
        #[test]
        fn no_anchor_identity(
            mx in -200.0f64..200.0,
            my in -200.0f64..200.0,
            direction in proptest::sample::select(CardinalDirection::ALL.to_vec()),
        ) {
            let result = calculate_resize_snap(&params(
                SQUARE,
                direction,
                Vector2::ZERO,
                Vector2::new(mx, my),
                &[],
            ));
            prop_assert_eq!(result.adjusted_movement, Vector2::new(mx, my));
            prop_assert_eq!(result.snap_delta, Vector2::ZERO);
        }
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let anchors = [Vector2::new(150.0, 150.0)];
        let p = params(
            SQUARE,
            CardinalDirection::SE,
            Vector2::ZERO,
            Vector2::new(47.0, 30.0),
            &anchors,
        );
        let first = calculate_resize_snap(&p);
        let second = calculate_resize_snap(&p);
        assert_eq!(first, second);
    }
}
