//! 1D nearest-anchor snapping and guide lines.
//!
//! [`snap1d`] is the primitive every snapping feature in the editor is
//! built on: given scalar positions of the geometry being dragged
//! ("agents") and scalar positions of reference geometry ("anchors"),
//! it finds the smallest signed correction that pulls an agent onto an
//! anchor within the threshold.

use serde::{Deserialize, Serialize};

use crate::vector2::Axis;

/// An infinite alignment line, independent of any shape.
///
/// `axis == Axis::X` is a vertical line at `x = offset`;
/// `axis == Axis::Y` is a horizontal line at `y = offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide2D {
    pub axis: Axis,
    pub offset: f64,
}

impl Guide2D {
    /// Creates a new guide on the given axis.
    pub fn new(axis: Axis, offset: f64) -> Self {
        Self { axis, offset }
    }
}

/// Result of 1D snapping with indices of matched agents and anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snap1DResult {
    /// Signed correction: `agent + distance` lands on the snapped
    /// anchor. `f64::INFINITY` when no anchor is within threshold.
    pub distance: f64,
    /// Indices of agents at the winning distance.
    pub hit_agent_indices: Vec<usize>,
    /// Indices of anchors at the winning distance.
    pub hit_anchor_indices: Vec<usize>,
}

impl Snap1DResult {
    /// Result representing "no anchor within threshold".
    pub fn miss() -> Self {
        Self {
            distance: f64::INFINITY,
            hit_agent_indices: Vec::new(),
            hit_anchor_indices: Vec::new(),
        }
    }

    /// True if a snap was found.
    pub fn is_hit(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Snaps scalar agents to the nearest anchor within `threshold`.
///
/// The minimum-magnitude signed delta over all agent/anchor pairs wins.
/// Every agent and anchor whose signed delta lies within `tolerance` of
/// the winner is reported in the hit index sets, so equidistant ties
/// yield multiple hits sharing the single winning distance. When two
/// candidates tie with opposite signs, the earlier agent/anchor pair
/// wins deterministically.
pub fn snap1d(agents: &[f64], anchors: &[f64], threshold: f64, tolerance: f64) -> Snap1DResult {
    debug_assert!(threshold >= 0.0 && tolerance >= 0.0);

    if agents.is_empty() || anchors.is_empty() {
        return Snap1DResult::miss();
    }

    let mut best = f64::INFINITY;
    for &agent in agents {
        for &anchor in anchors {
            let delta = anchor - agent;
            if delta.abs() <= threshold && delta.abs() < best.abs() {
                best = delta;
            }
        }
    }

    if best.is_infinite() {
        return Snap1DResult::miss();
    }

    let hit_agent_indices = agents
        .iter()
        .enumerate()
        .filter(|(_, &agent)| anchors.iter().any(|&anchor| (anchor - agent - best).abs() <= tolerance))
        .map(|(i, _)| i)
        .collect();
    let hit_anchor_indices = anchors
        .iter()
        .enumerate()
        .filter(|(_, &anchor)| agents.iter().any(|&agent| (anchor - agent - best).abs() <= tolerance))
        .map(|(i, _)| i)
        .collect();

    Snap1DResult {
        distance: best,
        hit_agent_indices,
        hit_anchor_indices,
    }
}
