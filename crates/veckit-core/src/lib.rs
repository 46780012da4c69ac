//! # Veckit Core
//!
//! Core geometry types and snapping primitives shared by the Veckit
//! canvas editor crates. Provides the fundamental value types for
//! canvas math:
//!
//! - **Vectors**: 2D points/movements and the [`Axis`] enum
//! - **Rectangles**: axis-aligned rects with scale-about-origin,
//!   union, quantization and 9-point extraction
//! - **Compass**: the eight cardinal directions used to identify
//!   resize handles
//! - **Snapping**: the 1D nearest-anchor primitive and guide lines
//!
//! Everything in this crate is a plain value type. All functions are
//! pure mappings from inputs to outputs with no shared state, so they
//! can be called from any thread at any rate.

pub mod compass;
pub mod error;
pub mod rect;
pub mod snap;
pub mod vector2;

pub use compass::CardinalDirection;
pub use error::{Error, Result};
pub use rect::Rectangle;
pub use snap::{snap1d, Guide2D, Snap1DResult};
pub use vector2::{Axis, Vector2};
