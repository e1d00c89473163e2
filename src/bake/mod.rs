//! Resolution of recorded ops into draw-ready state.
//!
//! 1. [`ResolvedRenderState`](resolved::ResolvedRenderState): composed transform, snapped clip,
//!    clipped bounds and the clip-side flags derived from them.
//! 2. [`BakedOpState`](baked::BakedOpState): the resolved state plus borrowed per-op state,
//!    allocated in a [`LinearArena`](crate::arena::linear::LinearArena) or rejected.
//! 3. [`MergedBakedOpList`](merged::MergedBakedOpList): a view over accepted states that share
//!    clip geometry, handed to batching.

pub(crate) mod baked;
pub(crate) mod clip_side;
pub(crate) mod merged;
pub(crate) mod resolved;
