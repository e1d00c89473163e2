use crate::{
    arena::linear::{ArenaId, LinearArena},
    bake::resolved::ResolvedRenderState,
    foundation::geom::is_empty_rect,
    record::op::{RecordedOp, ShadowOp},
    record::snapshot::{ProjectionPathMask, RoundRectClipState, Snapshot},
};

/// Arena holding the baked states of one frame.
pub type BakedOpArena<'a> = LinearArena<BakedOpState<'a>>;

/// How a strokeable op decides whether its bounds need stroke expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeBehavior {
    /// Always expand, regardless of paint style.
    Forced,
    /// Expand only when the op's paint is not a plain fill.
    StyleDefined,
}

impl StrokeBehavior {
    fn expands(self, op: &RecordedOp) -> bool {
        match self {
            Self::Forced => true,
            Self::StyleDefined => op.paint.is_some_and(|p| !p.style.is_fill()),
        }
    }
}

/// The op a baked state was built from.
#[derive(Clone, Copy, Debug)]
pub enum OpRef<'a> {
    Recorded(&'a RecordedOp),
    Shadow(&'a ShadowOp),
}

/// Self-contained, draw-ready state of one op.
///
/// Only the factories create these, and only inside a [`BakedOpArena`]. Borrowed fields point at
/// longer-lived snapshot and recording data; no ownership is implied.
#[derive(Clone, Copy, Debug)]
pub struct BakedOpState<'a> {
    computed_state: ResolvedRenderState,
    alpha: f32,
    round_rect_clip_state: Option<&'a RoundRectClipState>,
    projection_path_mask: Option<&'a ProjectionPathMask>,
    op: OpRef<'a>,
}

impl<'a> BakedOpState<'a> {
    /// Bakes `op` without stroke expansion. Returns `None`, leaving the arena as it was, when the
    /// resolved bounds are empty.
    pub fn try_construct(
        arena: &mut BakedOpArena<'a>,
        snapshot: &Snapshot<'a>,
        op: &'a RecordedOp,
    ) -> Option<ArenaId> {
        Self::construct_or_rewind(arena, snapshot, op, false)
    }

    /// Like [`Self::try_construct`], with stroke expansion decided by `stroke_behavior`.
    pub fn try_strokeable_op_construct(
        arena: &mut BakedOpArena<'a>,
        snapshot: &Snapshot<'a>,
        op: &'a RecordedOp,
        stroke_behavior: StrokeBehavior,
    ) -> Option<ArenaId> {
        let expand_for_stroke = stroke_behavior.expands(op);
        Self::construct_or_rewind(arena, snapshot, op, expand_for_stroke)
    }

    /// Bakes a shadow against the whole render-target clip.
    ///
    /// An empty render-target clip rejects before anything is allocated; otherwise the shadow
    /// is always accepted.
    pub fn try_shadow_op_construct(
        arena: &mut BakedOpArena<'a>,
        snapshot: &Snapshot<'a>,
        shadow_op: &'a ShadowOp,
    ) -> Option<ArenaId> {
        if is_empty_rect(snapshot.render_target_clip) {
            tracing::trace!("shadow op rejected: empty render target clip");
            return None;
        }

        Some(arena.alloc_with(|| Self {
            computed_state: ResolvedRenderState::unbounded(snapshot),
            alpha: snapshot.alpha,
            round_rect_clip_state: snapshot.round_rect_clip_state,
            projection_path_mask: snapshot.projection_path_mask,
            op: OpRef::Shadow(shadow_op),
        }))
    }

    fn construct_or_rewind(
        arena: &mut BakedOpArena<'a>,
        snapshot: &Snapshot<'a>,
        op: &'a RecordedOp,
        expand_for_stroke: bool,
    ) -> Option<ArenaId> {
        let id = arena.alloc_with(|| Self {
            computed_state: ResolvedRenderState::new(snapshot, op, expand_for_stroke),
            alpha: snapshot.alpha,
            round_rect_clip_state: snapshot.round_rect_clip_state,
            projection_path_mask: snapshot.projection_path_mask,
            op: OpRef::Recorded(op),
        });

        // Nothing else can allocate between here and the alloc above: `arena` is borrowed
        // mutably for the whole call.
        if is_empty_rect(arena[id].computed_state.clipped_bounds) {
            arena.rewind_if_last_alloc(id);
            tracing::trace!(expand_for_stroke, "op rejected: empty clipped bounds");
            return None;
        }
        Some(id)
    }

    pub fn computed_state(&self) -> &ResolvedRenderState {
        &self.computed_state
    }

    /// Snapshot alpha, not clamped.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn round_rect_clip_state(&self) -> Option<&'a RoundRectClipState> {
        self.round_rect_clip_state
    }

    pub fn projection_path_mask(&self) -> Option<&'a ProjectionPathMask> {
        self.projection_path_mask
    }

    pub fn op(&self) -> OpRef<'a> {
        self.op
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bake/baked.rs"]
mod tests;
