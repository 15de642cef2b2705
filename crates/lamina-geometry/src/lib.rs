//! View frame computation in the UIKit positioning convention.
//!
//! A view is placed by four independent properties: its local bounds size,
//! a `center` point in the parent's coordinate space, a normalized anchor
//! point (the pivot that `center` actually pins), and an affine transform
//! applied about that pivot. The on-screen *frame* — the axis-aligned
//! rectangle the parent sees — is derived from all four:
//!
//! - [`Rect`] - origin + size rectangle with a tolerance comparator
//! - [`ViewTransform`] - uniform scale + rotation, composed scale-then-rotate
//! - [`compute_frame`] - the frame derivation itself
//!
//! # Example
//!
//! ```
//! use lamina_geometry::compute_frame;
//! use glam::Vec2;
//!
//! // A 150x150 view, anchored at its middle, centered at (150, 150).
//! let frame = compute_frame(
//!     Vec2::splat(150.0),
//!     Vec2::splat(150.0),
//!     Vec2::splat(0.5),
//!     1.0,
//!     0.0,
//! );
//! assert_eq!(frame.origin, Vec2::splat(75.0));
//! assert_eq!(frame.size, Vec2::splat(150.0));
//! ```

use glam::{Mat3, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rect
// ============================================================================

/// A rectangle in origin + size form.
///
/// Unlike a min/max AABB this keeps the frame convention of the reference
/// toolkit: `origin` is the top-left corner in y-down screen coordinates and
/// `size` components are non-negative for every rectangle produced by this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Top-left corner (y-down).
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Absolute tolerance used by [`Rect::nearly_equal`].
    pub const EPSILON: f32 = 1e-5;

    /// Creates a rectangle from origin and size.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from its component coordinates.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Axis-aligned bounding rectangle of a set of points.
    ///
    /// Returns a degenerate (zero-size) rectangle for a single point and
    /// `Rect::default()` for an empty iterator. Size components are never
    /// negative regardless of input order.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Self {
            origin: min,
            size: max - min,
        }
    }

    /// Minimum corner (same as `origin`).
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Maximum corner (`origin + size`).
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Point at a fractional offset within the rectangle.
    ///
    /// `(0, 0)` is the origin, `(1, 1)` the opposite corner. Fractions
    /// outside `[0, 1]` address points outside the rectangle.
    pub fn point_at(&self, fraction: Vec2) -> Vec2 {
        self.origin + fraction * self.size
    }

    /// The four corners in order: top-left, top-right, bottom-right,
    /// bottom-left (y-down).
    pub fn corners(&self) -> [Vec2; 4] {
        let max = self.max();
        [
            self.origin,
            Vec2::new(max.x, self.origin.y),
            max,
            Vec2::new(self.origin.x, max.y),
        ]
    }

    /// Component-wise comparison with an absolute tolerance.
    ///
    /// Each of origin x/y and size width/height is compared against the
    /// corresponding component of `other`.
    pub fn nearly_equal_within(&self, other: &Rect, eps: f32) -> bool {
        (other.origin.x - self.origin.x).abs() < eps
            && (other.origin.y - self.origin.y).abs() < eps
            && (other.size.x - self.size.x).abs() < eps
            && (other.size.y - self.size.y).abs() < eps
    }

    /// [`Rect::nearly_equal_within`] at the default [`Rect::EPSILON`].
    pub fn nearly_equal(&self, other: &Rect) -> bool {
        self.nearly_equal_within(other, Self::EPSILON)
    }
}

// ============================================================================
// ViewTransform
// ============================================================================

/// Uniform scale and rotation applied about a view's anchor point.
///
/// Composition order is fixed: scale first, then rotate. The rotation is the
/// standard 2D rotation matrix; in y-down screen coordinates a positive
/// angle reads as clockwise, matching the reference toolkit's visual
/// direction. With uniform scale the two factors commute, but the order is
/// kept explicit so non-shape-preserving extensions stay well-defined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewTransform {
    /// Uniform scale factor (1.0 = identity; negative mirrors).
    pub scale: f32,
    /// Rotation in radians.
    pub rotation: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl ViewTransform {
    /// Creates a transform from scale and rotation (radians).
    pub fn new(scale: f32, rotation: f32) -> Self {
        Self { scale, rotation }
    }

    /// Builder: set uniform scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set rotation (radians).
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set rotation (degrees).
    pub fn with_rotation_degrees(mut self, degrees: f32) -> Self {
        self.rotation = degrees.to_radians();
        self
    }

    /// The 3x3 affine matrix: rotate ∘ scale (scale applied first).
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::from_angle(self.rotation) * Mat3::from_scale(Vec2::splat(self.scale))
    }
}

// ============================================================================
// Frame computation
// ============================================================================

/// Local-to-parent matrix for a view positioned by center + anchor point.
///
/// Concatenation order, applied left to right exactly as the reference
/// toolkit concatenates it:
///
/// 1. translate by `-anchor_point * bounds_size` (pivot to local origin)
/// 2. `transform` (any affine, typically scale + rotation about the origin)
/// 3. translate by `center` (pivot to its place in the parent)
pub fn absolute_transform(
    bounds_size: Vec2,
    center: Vec2,
    anchor_point: Vec2,
    transform: Mat3,
) -> Mat3 {
    Mat3::from_translation(center) * transform * Mat3::from_translation(-anchor_point * bounds_size)
}

/// Frame of a view under an arbitrary affine transform.
///
/// Applies [`absolute_transform`] to the four corners of the zero-origin
/// bounds rectangle and returns their axis-aligned bounding box. Total over
/// all finite inputs: zero-size bounds yield a degenerate rectangle at the
/// anchor-mapped point, negative scale mirrors but the result size stays
/// non-negative, and anchor fractions outside `[0, 1]` simply place the
/// pivot outside the shape.
pub fn compute_frame_with(
    bounds_size: Vec2,
    center: Vec2,
    anchor_point: Vec2,
    transform: Mat3,
) -> Rect {
    let absolute = absolute_transform(bounds_size, center, anchor_point, transform);
    let corners = Rect::new(Vec2::ZERO, bounds_size).corners();
    Rect::from_points(corners.map(|c| absolute.transform_point2(c)))
}

/// Frame of a view under uniform scale and rotation about its anchor point.
///
/// For `scale = 1` and `rotation = 0` the result is a rectangle of
/// `bounds_size` positioned so that its `anchor_point` fraction lands
/// exactly on `center`.
pub fn compute_frame(
    bounds_size: Vec2,
    center: Vec2,
    anchor_point: Vec2,
    scale: f32,
    rotation: f32,
) -> Rect {
    compute_frame_with(
        bounds_size,
        center,
        anchor_point,
        ViewTransform::new(scale, rotation).to_matrix(),
    )
}

// ============================================================================
// Tests
// ============================================================================
