//! Editor adapter: resize snapping against sibling objects and guides.
//!
//! Bridges editor geometry to the pure calculator in
//! [`crate::calculate`]: extracts anchor points from sibling rectangles
//! (9-point geometry) and guides (3 sampled points spanning the current
//! bounding box), runs the snap calculation on the union bounding box
//! of everything being resized, and reconstructs a render-ready
//! feedback structure mapping the index-based hits back to object and
//! guide identities.
//!
//! Hit flags are index-based rather than coordinate-matched end to end:
//! which 9-point indices were tested is known up front, so the result
//! never confuses pre-snap and post-snap coordinates. A point that is
//! not structurally moving for the active direction is never flagged,
//! even when it happens to be numerically aligned with an anchor.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use veckit_core::{rect, Axis, CardinalDirection, Guide2D, Rectangle, Vector2};

use crate::calculate::{calculate_resize_snap, ResizeSnapOptions, ResizeSnapParams};
use crate::points::{snap_point_indices, virtual_resized_rect};

/// Grid unit all rectangles are quantized to before snap tests.
pub const GRID_UNIT: f64 = 1.0;

/// Tolerance for fuzzy coordinate comparison when spreading hit flags
/// along an aligned edge (handles floating-point precision).
const COORDINATE_MATCH_TOLERANCE: f64 = 0.1;

/// Reference geometry a resize gesture may snap to.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapAnchors<'a> {
    /// Sibling objects; all nine control points of each are anchors.
    pub objects: &'a [Rectangle],
    /// Ruler guides; each contributes three sampled points spanning the
    /// current bounding box.
    pub guides: &'a [Guide2D],
}

/// Options for [`snap_objects_resize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapObjectsOptions {
    /// Whether snapping is active at all (Control key toggles).
    pub enabled: bool,
    /// Maintain aspect ratio (Shift key).
    pub preserve_aspect_ratio: bool,
    /// Resize about the center (Alt/Option key).
    pub center_origin: bool,
}

impl Default for SnapObjectsOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            preserve_aspect_ratio: false,
            center_origin: false,
        }
    }
}

/// `[x_hit, y_hit]` flags for one 9-point index.
pub type HitFlags = [bool; 2];

/// Per-axis guide alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideAxisHit {
    /// Signed snap distance on this axis.
    pub distance: f64,
    /// Indices into the guide list whose anchor points were part of the
    /// winning snap. A guide that is merely coincident with the final
    /// position but was not the nearest anchor is not listed.
    pub aligned_guides: Vec<usize>,
}

/// Guide-alignment section of the feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSnapHits {
    pub x: Option<GuideAxisHit>,
    pub y: Option<GuideAxisHit>,
}

/// Object-alignment section of the feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSnapHits {
    /// Signed snap distance on the X axis, when it snapped.
    pub x: Option<f64>,
    /// Signed snap distance on the Y axis, when it snapped.
    pub y: Option<f64>,
    /// Hit flags for the nine control points of the resized bounding
    /// rectangle. Only structurally moving indices are ever flagged.
    pub agent_points: [HitFlags; 9],
    /// Hit flags for the nine control points of each anchor object,
    /// scoped per object so one object's hit never highlights a
    /// coincidentally aligned point of another.
    pub anchor_points: Vec<[HitFlags; 9]>,
}

/// Render-ready snap feedback for one gesture tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeSnapFeedback {
    /// The quantized anchor objects the calculation ran against.
    pub objects: Vec<Rectangle>,
    /// The guides the calculation ran against.
    pub guides: Vec<Guide2D>,
    /// Per-axis snap correction applied to the movement.
    pub delta: Vector2,
    /// The final resized bounding rectangle, normalized to positive
    /// dimensions.
    pub resized: Rectangle,
    /// Present when at least one anchor object exists and a snap
    /// engaged.
    pub by_objects: Option<ObjectSnapHits>,
    /// Present when at least one guide exists and a snap engaged.
    pub by_guides: Option<GuideSnapHits>,
}

/// Result of [`snap_objects_resize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapObjectsResizeResult {
    /// Movement with the snap correction applied; feed this to the
    /// transform instead of the raw movement.
    pub adjusted_movement: Vector2,
    /// `None` when snapping is disabled (or there is nothing to
    /// resize); otherwise the computed feedback, with zero delta and
    /// empty hit sections when nothing snapped.
    pub snapping: Option<ResizeSnapFeedback>,
}

/// 9-point indices that structurally move for a direction, used to
/// filter visual hit flags. Dragging a single side moves that side's
/// three points (corner handles move the five points of both adjacent
/// sides); in center-origin mode a single-side drag keeps the corners
/// anchored to neither side, so only the edge midpoints travel with the
/// symmetric stretch, while a center-origin corner drag moves
/// everything but the center.
fn moving_point_indices(direction: CardinalDirection, center_origin: bool) -> &'static [usize] {
    use CardinalDirection::*;
    if center_origin {
        match direction {
            E | W => &[3, 5],
            N | S => &[1, 7],
            NE | NW | SE | SW => &[0, 1, 2, 3, 5, 6, 7, 8],
        }
    } else {
        match direction {
            E => &[2, 5, 8],
            W => &[0, 3, 6],
            N => &[0, 1, 2],
            S => &[6, 7, 8],
            NE => &[0, 1, 2, 5, 8],
            SE => &[2, 5, 6, 7, 8],
            NW => &[0, 1, 2, 3, 6],
            SW => &[0, 3, 6, 7, 8],
        }
    }
}

/// Resizes a selection with optional snapping to objects and guides.
///
/// The universal entry point for resize gestures: call it once per
/// pointer sample with the *total* movement since the gesture started.
/// Multiple agents are treated as one union bounding box. Returns the
/// adjusted movement for the transform plus feedback for the alignment
/// overlay; when `options.enabled` is false the movement passes through
/// and no feedback is produced at all, distinguishing "disabled" from
/// "computed, no snap".
pub fn snap_objects_resize(
    agents: &[Rectangle],
    anchors: SnapAnchors<'_>,
    direction: CardinalDirection,
    origin: Vector2,
    movement: Vector2,
    threshold: f64,
    options: SnapObjectsOptions,
) -> SnapObjectsResizeResult {
    trace!(%direction, %movement, threshold, "resize snap tick");

    if !options.enabled {
        return SnapObjectsResizeResult {
            adjusted_movement: movement,
            snapping: None,
        };
    }

    // Quantize inputs to stabilize floating-point comparisons.
    let agents_q: Vec<Rectangle> = agents.iter().map(|r| r.quantize(GRID_UNIT)).collect();
    let anchor_objects: Vec<Rectangle> =
        anchors.objects.iter().map(|r| r.quantize(GRID_UNIT)).collect();

    let Some(bounding) = rect::union(&agents_q) else {
        return SnapObjectsResizeResult {
            adjusted_movement: movement,
            snapping: None,
        };
    };

    // Flatten anchors into one point list, remembering which ranges
    // belong to which object or guide.
    let mut anchor_points: Vec<Vector2> =
        Vec::with_capacity(anchor_objects.len() * 9 + anchors.guides.len() * 3);
    let mut object_starts: Vec<usize> = Vec::with_capacity(anchor_objects.len());
    for object in &anchor_objects {
        object_starts.push(anchor_points.len());
        anchor_points.extend_from_slice(&object.nine_points());
    }
    let mut guide_starts: Vec<usize> = Vec::with_capacity(anchors.guides.len());
    for guide in anchors.guides {
        guide_starts.push(anchor_points.len());
        match guide.axis {
            Axis::X => {
                anchor_points.push(Vector2::new(guide.offset, bounding.y));
                anchor_points.push(Vector2::new(guide.offset, bounding.y + bounding.height));
                anchor_points.push(Vector2::new(guide.offset, bounding.y + bounding.height / 2.0));
            }
            Axis::Y => {
                anchor_points.push(Vector2::new(bounding.x, guide.offset));
                anchor_points.push(Vector2::new(bounding.x + bounding.width, guide.offset));
                anchor_points.push(Vector2::new(bounding.x + bounding.width / 2.0, guide.offset));
            }
        }
    }

    let result = calculate_resize_snap(&ResizeSnapParams {
        initial: bounding,
        direction,
        origin,
        movement,
        anchors: &anchor_points,
        threshold,
        options: ResizeSnapOptions {
            preserve_aspect_ratio: options.preserve_aspect_ratio,
            center_origin: options.center_origin,
        },
    });

    // The final bounding rect after the adjusted movement, normalized
    // to positive dimensions for rendering.
    let resized = virtual_resized_rect(
        &bounding,
        direction,
        origin,
        result.adjusted_movement,
        options.center_origin,
    )
    .positive();

    let snapped = !result.snap_delta.is_zero();
    if snapped {
        debug!(delta = %result.snap_delta, "resize snapped");
    }

    let by_objects = (snapped && !anchor_objects.is_empty()).then(|| {
        let tested = snap_point_indices(direction);
        let hit9_x: Vec<usize> = result.hit_agent_indices.x.iter().map(|&i| tested[i]).collect();
        let hit9_y: Vec<usize> = result.hit_agent_indices.y.iter().map(|&i| tested[i]).collect();

        let moving = moving_point_indices(direction, options.center_origin);
        let resized_points = resized.nine_points();

        // Spread flags along the aligned edge of the resized rect, but
        // never onto points that do not move for this direction.
        let mut agent_points = [[false; 2]; 9];
        for (idx, flags) in agent_points.iter_mut().enumerate() {
            if !moving.contains(&idx) {
                continue;
            }
            let point = resized_points[idx];
            if result.snap_delta.x != 0.0 {
                flags[0] = hit9_x
                    .iter()
                    .any(|&h| (resized_points[h].x - point.x).abs() < COORDINATE_MATCH_TOLERANCE);
            }
            if result.snap_delta.y != 0.0 {
                flags[1] = hit9_y
                    .iter()
                    .any(|&h| (resized_points[h].y - point.y).abs() < COORDINATE_MATCH_TOLERANCE);
            }
        }

        // Anchor flags are scoped per object: global hit indices are
        // filtered to each object's 9-point range before spreading.
        let anchor_flags: Vec<[HitFlags; 9]> = anchor_objects
            .iter()
            .enumerate()
            .map(|(object_idx, object)| {
                let start = object_starts[object_idx];
                let local = |indices: &[usize]| -> Vec<usize> {
                    indices
                        .iter()
                        .filter(|&&i| (start..start + 9).contains(&i))
                        .map(|&i| i - start)
                        .collect()
                };
                let local_x = local(&result.hit_anchor_indices.x);
                let local_y = local(&result.hit_anchor_indices.y);
                let points = object.nine_points();

                let mut flags = [[false; 2]; 9];
                for (idx, point_flags) in flags.iter_mut().enumerate() {
                    if result.snap_delta.x != 0.0 {
                        point_flags[0] = local_x.iter().any(|&h| {
                            (points[h].x - points[idx].x).abs() < COORDINATE_MATCH_TOLERANCE
                        });
                    }
                    if result.snap_delta.y != 0.0 {
                        point_flags[1] = local_y.iter().any(|&h| {
                            (points[h].y - points[idx].y).abs() < COORDINATE_MATCH_TOLERANCE
                        });
                    }
                }
                flags
            })
            .collect();

        ObjectSnapHits {
            x: (result.snap_delta.x != 0.0).then_some(result.snap_delta.x),
            y: (result.snap_delta.y != 0.0).then_some(result.snap_delta.y),
            agent_points,
            anchor_points: anchor_flags,
        }
    });

    let by_guides = (snapped && !anchors.guides.is_empty()).then(|| {
        let aligned = |axis: Axis, hit_indices: &[usize]| -> Vec<usize> {
            anchors
                .guides
                .iter()
                .enumerate()
                .filter(|(guide_idx, guide)| {
                    let start = guide_starts[*guide_idx];
                    guide.axis == axis
                        && hit_indices.iter().any(|&i| (start..start + 3).contains(&i))
                })
                .map(|(guide_idx, _)| guide_idx)
                .collect()
        };
        GuideSnapHits {
            x: (result.snap_delta.x != 0.0).then(|| GuideAxisHit {
                distance: result.snap_delta.x,
                aligned_guides: aligned(Axis::X, &result.hit_anchor_indices.x),
            }),
            y: (result.snap_delta.y != 0.0).then(|| GuideAxisHit {
                distance: result.snap_delta.y,
                aligned_guides: aligned(Axis::Y, &result.hit_anchor_indices.y),
            }),
        }
    });

    SnapObjectsResizeResult {
        adjusted_movement: result.adjusted_movement,
        snapping: Some(ResizeSnapFeedback {
            objects: anchor_objects,
            guides: anchors.guides.to_vec(),
            delta: result.snap_delta,
            resized,
            by_objects,
            by_guides,
        }),
    }
}
