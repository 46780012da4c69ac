//! Movement adjustment for applying a snap delta.

use serde::{Deserialize, Serialize};
use veckit_core::{CardinalDirection, Rectangle, Vector2};

/// Options for [`adjust_movement_for_snap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjustOptions {
    /// Keep the rectangle's original `width / height` ratio.
    pub preserve_aspect_ratio: bool,
    /// The raw movement before snapping, required for proportional
    /// aspect-ratio coupling.
    pub original_movement: Option<Vector2>,
}

/// Converts a per-axis snap delta into a movement correction.
///
/// Without aspect-ratio preservation the correction is the snap delta
/// verbatim; the caller adds it to the raw movement. With preservation,
/// exactly one axis is expected to carry the delta: the other axis's
/// movement is recomputed from the initial rectangle's aspect ratio so
/// the resized shape keeps its proportions, and the correction on that
/// axis is the difference from the original movement.
///
/// If both axes carry a non-zero delta the delta passes through
/// unchanged; no further coupling is attempted. If the initial
/// rectangle has zero width or height its ratio is undefined and
/// aspect coupling is skipped rather than propagating non-finite
/// values.
///
/// `_origin` is part of the resize context shared with the other snap
/// functions; the adjustment itself is origin-independent.
pub fn adjust_movement_for_snap(
    snap_delta: Vector2,
    direction: CardinalDirection,
    _origin: Vector2,
    initial: &Rectangle,
    options: &AdjustOptions,
) -> Vector2 {
    // A snap delta can only exist on axes the dragged handle moves.
    let delta = Vector2::new(
        if direction.is_horizontal() { snap_delta.x } else { 0.0 },
        if direction.is_vertical() { snap_delta.y } else { 0.0 },
    );

    if delta.is_zero() {
        return Vector2::ZERO;
    }

    let original = match options.original_movement {
        Some(movement) if options.preserve_aspect_ratio => movement,
        _ => return delta,
    };

    if initial.width == 0.0 || initial.height == 0.0 {
        // Ratio undefined; apply the snap without coupling.
        return delta;
    }
    let aspect_ratio = initial.aspect_ratio();

    let x_snapped = delta.x != 0.0;
    let y_snapped = delta.y != 0.0;

    if x_snapped && !y_snapped {
        let new_x_movement = original.x + delta.x;
        let new_y_movement = new_x_movement / aspect_ratio;
        Vector2::new(delta.x, new_y_movement - original.y)
    } else if y_snapped && !x_snapped {
        let new_y_movement = original.y + delta.y;
        let new_x_movement = new_y_movement * aspect_ratio;
        Vector2::new(new_x_movement - original.x, delta.y)
    } else {
        // Both axes snapped: both corrections are already exact.
        delta
    }
}
