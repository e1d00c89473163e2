use crate::{
    bake::clip_side::ClipSideFlags,
    foundation::core::{Affine, Rect},
    foundation::error::{OpStateError, OpStateResult},
    foundation::geom::{intersect_or_empty, is_pure_translate, outset, snap_to_pixel_boundaries},
    record::op::RecordedOp,
    record::snapshot::Snapshot,
};

/// Extra device-space margin for strokes that may be thinner than a pixel once mapped.
const HAIRLINE_MARGIN: f64 = 0.5;

/// Transform, clip and bounds of a recorded op replayed under a snapshot.
///
/// Every rect is in render-target space. For ops with bounds, `clip_rect` and `clipped_bounds`
/// have already been intersected with the snapshot's render-target clip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRenderState {
    /// `snapshot.transform * op.local_matrix`.
    pub transform: Affine,
    /// Pixel-snapped clip.
    pub clip_rect: Rect,
    pub clip_side_flags: ClipSideFlags,
    /// Mapped op bounds intersected with `clip_rect`; [`Rect::ZERO`] when nothing survives.
    pub clipped_bounds: Rect,
}

impl ResolvedRenderState {
    /// Resolves an op with known bounds.
    ///
    /// With `expand_for_stroke`, bounds grow by half the stroke width before mapping, and by a
    /// further half pixel after mapping when the stroke may end up thinner than a pixel.
    pub fn new(snapshot: &Snapshot<'_>, op: &RecordedOp, expand_for_stroke: bool) -> Self {
        let parent = snapshot.transform;
        let (transform, mapped_clip, mut clipped_bounds) =
            if is_pure_translate(parent) && is_pure_translate(op.local_matrix) {
                map_translate_only(parent, op, expand_for_stroke)
            } else {
                map_general(parent, op, expand_for_stroke)
            };

        let clip_rect = snap_to_pixel_boundaries(intersect_or_empty(
            mapped_clip,
            snapshot.render_target_clip,
        ));

        // May over-include, must never under-include a stroke thinner than a pixel.
        if expand_for_stroke && (!is_pure_translate(transform) || op.stroke_width() < 1.0) {
            clipped_bounds = outset(clipped_bounds, HAIRLINE_MARGIN);
        }

        let clip_side_flags = ClipSideFlags::from_edges(clip_rect, clipped_bounds);
        let clipped_bounds = intersect_or_empty(clipped_bounds, clip_rect);

        Self {
            transform,
            clip_rect,
            clip_side_flags,
            clipped_bounds,
        }
    }

    /// Resolves an op without intrinsic bounds (shadows).
    ///
    /// Bounds are taken to be the whole render-target clip and every edge is treated as clipped.
    pub fn unbounded(snapshot: &Snapshot<'_>) -> Self {
        let transform = snapshot.transform;
        let clip_rect = snapshot.render_target_clip;
        Self {
            transform,
            clip_rect,
            clip_side_flags: ClipSideFlags::FULL,
            clipped_bounds: transform.transform_rect_bbox(clip_rect),
        }
    }

    /// Maps `clip_rect` back into the op's local space.
    ///
    /// The inverse is recomputed on every call. If `transform` is singular the result is not
    /// meaningful (its edges are non-finite); guard with [`Self::is_invertible`] or use
    /// [`Self::try_compute_local_space_clip`].
    pub fn compute_local_space_clip(&self) -> Rect {
        self.transform.inverse().transform_rect_bbox(self.clip_rect)
    }

    /// Like [`Self::compute_local_space_clip`], but fails on a singular transform.
    pub fn try_compute_local_space_clip(&self) -> OpStateResult<Rect> {
        if !self.is_invertible() {
            return Err(OpStateError::degenerate(format!(
                "transform {:?} is not invertible",
                self.transform.as_coeffs()
            )));
        }
        Ok(self.compute_local_space_clip())
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.transform.determinant();
        det.is_finite() && det != 0.0
    }
}

/// Returns `(transform, mapped local clip, mapped bounds)` for arbitrary transforms.
fn map_general(parent: Affine, op: &RecordedOp, expand_for_stroke: bool) -> (Affine, Rect, Rect) {
    let transform = parent * op.local_matrix;
    (
        transform,
        parent.transform_rect_bbox(op.local_clip_rect),
        transform.transform_rect_bbox(stroke_outset(op, expand_for_stroke)),
    )
}

/// Same as [`map_general`] when both transforms are pure translates, without the matrix work.
fn map_translate_only(
    parent: Affine,
    op: &RecordedOp,
    expand_for_stroke: bool,
) -> (Affine, Rect, Rect) {
    let offset = parent.translation() + op.local_matrix.translation();
    (
        Affine::translate(offset),
        op.local_clip_rect + parent.translation(),
        stroke_outset(op, expand_for_stroke) + offset,
    )
}

fn stroke_outset(op: &RecordedOp, expand_for_stroke: bool) -> Rect {
    if expand_for_stroke {
        outset(op.unmapped_bounds, op.stroke_width() * 0.5)
    } else {
        op.unmapped_bounds
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bake/resolved.rs"]
mod tests;
