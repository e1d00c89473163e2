use crate::{
    arena::linear::ArenaId,
    bake::baked::{BakedOpArena, BakedOpState, StrokeBehavior},
    bake::clip_side::ClipSideFlags,
    foundation::core::{Affine, Rect, affine_is_finite, rect_is_finite},
    foundation::error::{OpStateError, OpStateResult},
    record::op::{RecordedOp, ShadowOp},
    record::snapshot::{ProjectionPathMask, RoundRectClipState, Snapshot},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Serialized form of a [`Snapshot`]. Side clip state is owned here and borrowed when baking.
pub struct SnapshotDesc {
    #[serde(default = "identity")]
    pub transform: Affine,
    pub render_target_clip: Rect,
    #[serde(default = "full_alpha")]
    pub alpha: f32,
    #[serde(default)]
    pub round_rect_clip: Option<RoundRectClipState>,
    #[serde(default)]
    pub projection_path_mask: Option<ProjectionPathMask>,
}

impl SnapshotDesc {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            transform: self.transform,
            render_target_clip: self.render_target_clip,
            alpha: self.alpha,
            round_rect_clip_state: self.round_rect_clip.as_ref(),
            projection_path_mask: self.projection_path_mask.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpDesc {
    Draw { op: RecordedOp },
    Strokeable { op: RecordedOp, stroke: StrokeBehavior },
    Shadow { op: ShadowOp },
}

impl OpDesc {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Draw { .. } => "draw",
            Self::Strokeable { .. } => "strokeable",
            Self::Shadow { .. } => "shadow",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameEntry {
    pub snapshot: SnapshotDesc,
    pub op: OpDesc,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameDesc {
    pub entries: Vec<FrameEntry>,
}

impl FrameDesc {
    pub fn from_json_str(s: &str) -> OpStateResult<Self> {
        serde_json::from_str(s).map_err(|e| OpStateError::serde(e.to_string()))
    }

    pub fn validate(&self) -> OpStateResult<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            let snap = &entry.snapshot;
            if !affine_is_finite(snap.transform) {
                return Err(OpStateError::validation(format!(
                    "entry {i}: snapshot transform must be finite"
                )));
            }
            if !rect_is_finite(snap.render_target_clip) {
                return Err(OpStateError::validation(format!(
                    "entry {i}: render_target_clip must be finite"
                )));
            }
            if !snap.alpha.is_finite() {
                return Err(OpStateError::validation(format!(
                    "entry {i}: alpha must be finite"
                )));
            }

            match &entry.op {
                OpDesc::Draw { op } | OpDesc::Strokeable { op, .. } => validate_op(i, op)?,
                OpDesc::Shadow { op } => {
                    if !op.caster_alpha.is_finite() {
                        return Err(OpStateError::validation(format!(
                            "entry {i}: caster_alpha must be finite"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

fn validate_op(i: usize, op: &RecordedOp) -> OpStateResult<()> {
    if !affine_is_finite(op.local_matrix) {
        return Err(OpStateError::validation(format!(
            "entry {i}: local_matrix must be finite"
        )));
    }
    // Local clips may be unbounded in one direction, but never NaN.
    let clip = op.local_clip_rect;
    if [clip.x0, clip.y0, clip.x1, clip.y1].iter().any(|v| v.is_nan()) {
        return Err(OpStateError::validation(format!(
            "entry {i}: local_clip_rect must not be NaN"
        )));
    }
    if !rect_is_finite(op.unmapped_bounds) {
        return Err(OpStateError::validation(format!(
            "entry {i}: unmapped_bounds must be finite"
        )));
    }
    if let Some(paint) = op.paint
        && !(paint.stroke_width.is_finite() && paint.stroke_width >= 0.0)
    {
        return Err(OpStateError::validation(format!(
            "entry {i}: stroke_width must be finite and >= 0"
        )));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryOutcome {
    pub index: usize,
    /// Tag of the entry's op, as written in the frame (`draw`, `strokeable`, `shadow`).
    pub kind: &'static str,
    /// `None` when the op was rejected.
    pub state: Option<ArenaId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub outcomes: Vec<EntryOutcome>,
}

/// Printable digest of one accepted entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BakedSummary {
    pub index: usize,
    pub kind: &'static str,
    pub alpha: f32,
    pub clip_rect: Rect,
    pub clipped_bounds: Rect,
    pub clip_side_flags: ClipSideFlags,
    pub has_round_rect_clip: bool,
    pub has_projection_mask: bool,
}

impl FrameReport {
    pub fn accepted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.state.is_some()).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.accepted()
    }

    pub fn summaries(&self, arena: &BakedOpArena<'_>) -> OpStateResult<Vec<BakedSummary>> {
        let mut out = Vec::with_capacity(self.accepted());
        for outcome in &self.outcomes {
            let Some(id) = outcome.state else {
                continue;
            };
            let state = arena.try_get(id)?;
            let computed = state.computed_state();
            out.push(BakedSummary {
                index: outcome.index,
                kind: outcome.kind,
                alpha: state.alpha(),
                clip_rect: computed.clip_rect,
                clipped_bounds: computed.clipped_bounds,
                clip_side_flags: computed.clip_side_flags,
                has_round_rect_clip: state.round_rect_clip_state().is_some(),
                has_projection_mask: state.projection_path_mask().is_some(),
            });
        }
        Ok(out)
    }
}

/// Validates `frame` and bakes every entry, in order, into `arena`.
#[tracing::instrument(skip_all, fields(entries = frame.entries.len()))]
pub fn bake_frame<'a>(
    frame: &'a FrameDesc,
    arena: &mut BakedOpArena<'a>,
) -> OpStateResult<FrameReport> {
    frame.validate()?;

    let mut outcomes = Vec::with_capacity(frame.entries.len());
    for (index, entry) in frame.entries.iter().enumerate() {
        let snapshot = entry.snapshot.snapshot();
        let state = match &entry.op {
            OpDesc::Draw { op } => BakedOpState::try_construct(arena, &snapshot, op),
            OpDesc::Strokeable { op, stroke } => {
                BakedOpState::try_strokeable_op_construct(arena, &snapshot, op, *stroke)
            }
            OpDesc::Shadow { op } => BakedOpState::try_shadow_op_construct(arena, &snapshot, op),
        };
        outcomes.push(EntryOutcome {
            index,
            kind: entry.op.kind(),
            state,
        });
    }

    let report = FrameReport { outcomes };
    tracing::debug!(
        accepted = report.accepted(),
        rejected = report.rejected(),
        used_bytes = arena.used_bytes(),
        "frame baked"
    );
    Ok(report)
}

fn identity() -> Affine {
    Affine::IDENTITY
}

fn full_alpha() -> f32 {
    1.0
}

#[cfg(test)]
#[path = "../../tests/unit/replay/frame.rs"]
mod tests;
