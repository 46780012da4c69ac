//! Snap-point selection for resize gestures.
//!
//! A resize gesture only tests the corner points of the edge or corner
//! being dragged, never edge midpoints or the center. Translate
//! snapping tests all nine control points; resize snapping stays
//! intentionally narrower so alignment feels precise rather than
//! sticky.

use smallvec::SmallVec;
use veckit_core::{CardinalDirection, Rectangle, Vector2};

/// Nine-point indices tested for each resize direction, in the fixed
/// `0:TL 1:TC 2:TR 3:ML 4:C 5:MR 6:BL 7:BC 8:BR` layout. Edge handles
/// test the two corners of the dragged edge; corner handles test the
/// moving corner first, then the two corners adjacent along the shared
/// edges. Only corner indices appear here.
pub(crate) const fn snap_point_indices(direction: CardinalDirection) -> &'static [usize] {
    match direction {
        CardinalDirection::E => &[2, 8],
        CardinalDirection::W => &[0, 6],
        CardinalDirection::N => &[0, 2],
        CardinalDirection::S => &[6, 8],
        CardinalDirection::NE => &[2, 0, 8],
        CardinalDirection::SE => &[8, 2, 6],
        CardinalDirection::NW => &[0, 2, 6],
        CardinalDirection::SW => &[6, 0, 8],
    }
}

/// Computes the rectangle as it would look with the raw movement
/// applied to the dragged handle, before any snap correction.
///
/// The per-axis size delta is `direction_vector * movement`, doubled in
/// center-origin mode because both opposing edges move. The result may
/// have negative width/height when the gesture crosses the transform
/// origin; snap tests run against this unnormalized rectangle.
pub(crate) fn virtual_resized_rect(
    rect: &Rectangle,
    direction: CardinalDirection,
    origin: Vector2,
    movement: Vector2,
    center_origin: bool,
) -> Rectangle {
    let vector = direction.direction_vector();
    let multiplier = if center_origin { 2.0 } else { 1.0 };
    let size_delta = Vector2::new(
        vector.x * movement.x * multiplier,
        vector.y * movement.y * multiplier,
    );
    let target = Rectangle {
        width: rect.width + size_delta.x,
        height: rect.height + size_delta.y,
        ..*rect
    };
    rect.scale(origin, rect.scale_factors_to(&target))
}

/// Snap points for one resize operation: 2-3 world-space corner points
/// of the virtually resized rectangle, plus their indices in the
/// 9-point layout for visual-feedback mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSnapPoints {
    pub points: SmallVec<[Vector2; 3]>,
    pub indices: SmallVec<[usize; 3]>,
}

/// Selects the snap points for a rectangle being resized in the given
/// direction.
///
/// In center-origin mode only the dragged side is tested, never the
/// mirrored opposite side: dragging the right handle should snap to
/// right-side geometry only, with no surprise indicators on the left.
pub fn resize_snap_points(
    rect: &Rectangle,
    direction: CardinalDirection,
    origin: Vector2,
    movement: Vector2,
    center_origin: bool,
) -> ResizeSnapPoints {
    let virtual_rect = virtual_resized_rect(rect, direction, origin, movement, center_origin);
    let virtual_points = virtual_rect.nine_points();

    let indices: SmallVec<[usize; 3]> = SmallVec::from_slice(snap_point_indices(direction));
    let points = indices.iter().map(|&i| virtual_points[i]).collect();

    ResizeSnapPoints { points, indices }
}
