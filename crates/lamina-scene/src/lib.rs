//! Explicit view state and the geometry derived from it.
//!
//! The interactive demo this models keeps one piece of state — the target
//! view's bounds, center, anchor point, scale, and rotation — and redraws a
//! handful of derived shapes whenever any of it changes: the view's frame,
//! its transformed outline, dashed guide lines to the center, and a marker
//! circle on the anchor. Here that state is an explicit immutable value,
//! [`ViewState`], and the derived shapes are plain return values; callers
//! recompute by calling [`ViewState::resolve`] after building an updated
//! state. No observers, no hidden shared state.
//!
//! - [`ViewState`] - bounds, center, anchor point, scale, rotation
//! - [`SceneGeometry`] - everything a renderer would draw, in one value
//! - [`center_guides`] / [`anchor_marker`] - the guide shapes on their own
//!
//! # Example
//!
//! ```
//! use lamina_scene::ViewState;
//! use glam::Vec2;
//!
//! let state = ViewState::default()
//!     .with_scale(2.0)
//!     .with_rotation_degrees(45.0);
//!
//! let scene = state.resolve();
//! // The frame always encloses the transformed outline.
//! for corner in scene.target_corners {
//!     assert!(corner.x >= scene.frame.min().x - 1e-4);
//!     assert!(corner.x <= scene.frame.max().x + 1e-4);
//! }
//! ```

use glam::{Mat3, Vec2};
use lamina_geometry::{absolute_transform, compute_frame_with, Rect, ViewTransform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// ViewState
// ============================================================================

/// The target view's geometry inputs, as one immutable value.
///
/// `bounds.size` drives the frame; `bounds.origin` only offsets content
/// expressed in bounds coordinates (see [`ViewState::convert_to_parent`]),
/// never the frame itself — the same split the reference toolkit makes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewState {
    /// Local bounds rectangle.
    pub bounds: Rect,

    /// Where the anchor point lands in the parent's coordinate space.
    pub center: Vec2,

    /// Anchor point as fractions of the bounds size. Values outside
    /// `[0, 1]` put the pivot outside the view.
    pub anchor_point: Vec2,

    /// Uniform scale factor.
    pub scale: f32,

    /// Rotation in radians.
    pub rotation: f32,
}

impl Default for ViewState {
    /// The demo's initial configuration: a 150x150 view anchored at its
    /// middle, centered at (150, 150), untransformed.
    fn default() -> Self {
        Self {
            bounds: Rect::new(Vec2::ZERO, Vec2::splat(150.0)),
            center: Vec2::splat(150.0),
            anchor_point: Vec2::splat(0.5),
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl ViewState {
    /// Creates the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set bounds.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Builder: set center.
    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    /// Builder: set anchor point (fractions of bounds size).
    pub fn with_anchor_point(mut self, anchor_point: Vec2) -> Self {
        self.anchor_point = anchor_point;
        self
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

    /// Builder: set rotation (degrees), as the demo's slider does.
    pub fn with_rotation_degrees(mut self, degrees: f32) -> Self {
        self.rotation = degrees.to_radians();
        self
    }

    /// The scale + rotation matrix about the anchor-relative origin.
    pub fn transform(&self) -> Mat3 {
        ViewTransform::new(self.scale, self.rotation).to_matrix()
    }

    /// Local-to-parent matrix for points relative to the bounds origin.
    pub fn absolute_transform(&self) -> Mat3 {
        absolute_transform(
            self.bounds.size,
            self.center,
            self.anchor_point,
            self.transform(),
        )
    }

    /// The view's frame: axis-aligned bounding rectangle in parent space.
    pub fn frame(&self) -> Rect {
        compute_frame_with(
            self.bounds.size,
            self.center,
            self.anchor_point,
            self.transform(),
        )
    }

    /// The transformed outline of the view in parent space.
    ///
    /// This is the rotated/scaled quad the demo draws; its AABB is
    /// [`ViewState::frame`].
    pub fn corners(&self) -> [Vec2; 4] {
        let absolute = self.absolute_transform();
        Rect::new(Vec2::ZERO, self.bounds.size)
            .corners()
            .map(|c| absolute.transform_point2(c))
    }

    /// Maps a point in bounds coordinates to parent coordinates.
    ///
    /// Unlike [`ViewState::frame`], this honors `bounds.origin`: shifting
    /// the origin scrolls content under the (unmoved) frame, which is how a
    /// subview placed at a fixed bounds position appears to move when the
    /// demo's bounds.x/y sliders change.
    pub fn convert_to_parent(&self, point: Vec2) -> Vec2 {
        self.absolute_transform()
            .transform_point2(point - self.bounds.origin)
    }

    /// Derives every shape the demo draws from this state.
    pub fn resolve(&self) -> SceneGeometry {
        SceneGeometry {
            frame: self.frame(),
            target_corners: self.corners(),
            center_guides: center_guides(self.center),
            anchor_marker: anchor_marker(self.center),
        }
    }
}

// ============================================================================
// Guides
// ============================================================================

/// Radius of the circular marker drawn on the anchor point.
pub const ANCHOR_MARKER_RADIUS: f32 = 8.0;

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Start point.
    pub from: Vec2,
    /// End point.
    pub to: Vec2,
}

impl Segment {
    /// Creates a segment from two points.
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// Segment length.
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }
}

/// The dashed guide lines dropped onto the center point.
///
/// One runs down from the top edge at the center's x, the other runs right
/// from the left edge at the center's y; both end on the center.
pub fn center_guides(center: Vec2) -> [Segment; 2] {
    [
        Segment::new(Vec2::new(center.x, 0.0), center),
        Segment::new(Vec2::new(0.0, center.y), center),
    ]
}

/// Bounding rectangle of the anchor marker circle.
pub fn anchor_marker(center: Vec2) -> Rect {
    Rect::new(
        center - Vec2::splat(ANCHOR_MARKER_RADIUS),
        Vec2::splat(ANCHOR_MARKER_RADIUS * 2.0),
    )
}

// ============================================================================
// SceneGeometry
// ============================================================================

/// Everything the demo draws, derived from one [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneGeometry {
    /// The view's frame in parent space.
    pub frame: Rect,

    /// Transformed outline of the view (top-left, top-right, bottom-right,
    /// bottom-left of the untransformed bounds).
    pub target_corners: [Vec2; 4],

    /// Dashed guide lines onto the center point.
    pub center_guides: [Segment; 2],

    /// Bounding rectangle of the anchor marker circle.
    pub anchor_marker: Rect,
}

// ============================================================================
// Tests
// ============================================================================
