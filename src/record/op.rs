use crate::foundation::core::{Affine, Rect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    StrokeAndFill,
}

impl PaintStyle {
    pub fn is_fill(self) -> bool {
        matches!(self, Self::Fill)
    }
}

/// The part of a paint that affects op bounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Paint {
    #[serde(default)]
    pub style: PaintStyle,
    /// Stroke width in local units. Zero is a hairline.
    #[serde(default)]
    pub stroke_width: f64,
}

impl Paint {
    pub fn fill() -> Self {
        Self {
            style: PaintStyle::Fill,
            stroke_width: 0.0,
        }
    }

    pub fn stroke(width: f64) -> Self {
        Self {
            style: PaintStyle::Stroke,
            stroke_width: width,
        }
    }
}

/// A drawable op as recorded, before it is resolved against a snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordedOp {
    /// Bounds in the op's local space, ignoring stroke.
    pub unmapped_bounds: Rect,
    #[serde(default = "identity")]
    pub local_matrix: Affine,
    /// Clip in the parent's space, before the parent transform is applied.
    pub local_clip_rect: Rect,
    #[serde(default)]
    pub paint: Option<Paint>,
}

impl RecordedOp {
    /// An op with identity local matrix whose local clip equals its bounds.
    pub fn new(unmapped_bounds: Rect) -> Self {
        Self {
            unmapped_bounds,
            local_matrix: Affine::IDENTITY,
            local_clip_rect: unmapped_bounds,
            paint: None,
        }
    }

    pub fn with_local_matrix(mut self, local_matrix: Affine) -> Self {
        self.local_matrix = local_matrix;
        self
    }

    pub fn with_local_clip(mut self, local_clip_rect: Rect) -> Self {
        self.local_clip_rect = local_clip_rect;
        self
    }

    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = Some(paint);
        self
    }

    /// Stroke width used for bounds expansion; ops without a paint stroke as hairlines.
    pub fn stroke_width(&self) -> f64 {
        self.paint.map_or(0.0, |p| p.stroke_width)
    }
}

/// An ambient/spot shadow cast. It has no intrinsic bounds and is resolved against the full
/// render-target clip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShadowOp {
    pub caster_alpha: f32,
    pub caster_bounds: Rect,
}

fn identity() -> Affine {
    Affine::IDENTITY
}
