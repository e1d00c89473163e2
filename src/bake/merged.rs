use crate::{bake::baked::BakedOpState, bake::clip_side::ClipSideFlags, foundation::core::Rect};

/// Baked states that the batching stage has decided to draw together.
///
/// All states share `clip` and `clip_side_flags`. The list is a view: it owns neither the slice
/// nor the states.
#[derive(Clone, Copy, Debug)]
pub struct MergedBakedOpList<'l, 'a> {
    pub states: &'l [&'l BakedOpState<'a>],
    pub clip_side_flags: ClipSideFlags,
    pub clip: Rect,
}

impl<'l, 'a> MergedBakedOpList<'l, 'a> {
    pub fn new(
        states: &'l [&'l BakedOpState<'a>],
        clip_side_flags: ClipSideFlags,
        clip: Rect,
    ) -> Self {
        Self {
            states,
            clip_side_flags,
            clip,
        }
    }

    pub fn count(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'l BakedOpState<'a>> + 'l {
        self.states.iter().copied()
    }
}
