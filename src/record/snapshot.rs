use crate::foundation::core::{Affine, BezPath, Rect};

/// Rounded-rect clip applied on top of the rectangular clip. Opaque to op resolution.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundRectClipState {
    pub matrix: Affine,
    pub inner_rect: Rect,
    pub radius: f64,
    pub high_priority: bool,
}

/// Path mask used when projecting a node onto its receiver. Opaque to op resolution.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectionPathMask {
    /// Serialized as SVG path data (`"M0,0 L10,0 ..."`).
    #[serde(with = "svg_path")]
    pub path: BezPath,
    pub transform: Affine,
}

/// The ambient state an op is replayed under.
///
/// Side clip state is borrowed; anything baked against the snapshot keeps those borrows, so the
/// referents must outlive the arena the states are allocated in.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub transform: Affine,
    /// Clip in render-target (device) space.
    pub render_target_clip: Rect,
    pub alpha: f32,
    pub round_rect_clip_state: Option<&'a RoundRectClipState>,
    pub projection_path_mask: Option<&'a ProjectionPathMask>,
}

impl<'a> Snapshot<'a> {
    /// A snapshot with full alpha and no side clip state.
    pub fn new(transform: Affine, render_target_clip: Rect) -> Self {
        Self {
            transform,
            render_target_clip,
            alpha: 1.0,
            round_rect_clip_state: None,
            projection_path_mask: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_round_rect_clip(mut self, state: &'a RoundRectClipState) -> Self {
        self.round_rect_clip_state = Some(state);
        self
    }

    pub fn with_projection_path_mask(mut self, mask: &'a ProjectionPathMask) -> Self {
        self.projection_path_mask = Some(mask);
        self
    }
}

mod svg_path {
    use crate::foundation::core::BezPath;

    pub(super) fn serialize<S: serde::Serializer>(path: &BezPath, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&path.to_svg())
    }

    pub(super) fn deserialize<'de, D: serde::Deserializer<'de>>(d: D) -> Result<BezPath, D::Error> {
        let data = <String as serde::Deserialize>::deserialize(d)?;
        BezPath::from_svg(&data).map_err(serde::de::Error::custom)
    }
}
