//! Per-op render state resolution for a 2D rendering pipeline.
//!
//! For every recorded op replayed under a [`Snapshot`], this crate computes the state a draw
//! needs against the render target:
//!
//! 1. **Resolve**: `Snapshot + RecordedOp -> ResolvedRenderState` (composed transform, snapped
//!    clip, clipped bounds, clip-side flags)
//! 2. **Bake**: wrap the resolved state with alpha and side clip references in a
//!    [`BakedOpState`], allocated in a frame-scoped [`LinearArena`], or reject the op when its
//!    clipped bounds are empty. Rejection rewinds the allocation, so rejected ops leave nothing
//!    behind.
//! 3. **Batch**: accepted states that share a clip are viewed together as a
//!    [`MergedBakedOpList`]. Deciding what to merge is up to the caller.
//!
//! Everything is single-threaded and synchronous. `unsafe` is forbidden in this crate; baked
//! states borrow their snapshot and op data, so the borrow checker enforces that those outlive
//! the arena.
#![forbid(unsafe_code)]

mod arena;
mod bake;
mod foundation;
mod record;
mod replay;

/// Rect and transform helpers used during resolution.
pub mod geom {
    pub use crate::foundation::geom::{
        contains_rect, intersect_or_empty, is_empty_rect, is_pure_translate,
        outset, snap_to_pixel_boundaries,
    };
}

pub use arena::linear::{ArenaId, ArenaOpts, ArenaStats, LinearArena};
pub use bake::baked::{BakedOpArena, BakedOpState, OpRef, StrokeBehavior};
pub use bake::clip_side::ClipSideFlags;
pub use bake::merged::MergedBakedOpList;
pub use bake::resolved::ResolvedRenderState;
pub use foundation::core::{
    Affine, BezPath, Point, Rect, Vec2, affine_is_finite, rect_is_finite,
};
pub use foundation::error::{OpStateError, OpStateResult};
pub use record::op::{Paint, PaintStyle, RecordedOp, ShadowOp};
pub use record::snapshot::{ProjectionPathMask, RoundRectClipState, Snapshot};
pub use replay::frame::{
    BakedSummary, EntryOutcome, FrameDesc, FrameEntry, FrameReport, OpDesc, SnapshotDesc,
    bake_frame,
};
