use crate::foundation::core::Rect;

bitflags::bitflags! {
    /// Edges of an op's bounds that the clip rect actually cut.
    ///
    /// Downstream draws use this to decide whether an edge needs clip anti-aliasing.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct ClipSideFlags: u8 {
        const LEFT = 0x1;
        const TOP = 0x2;
        const RIGHT = 0x4;
        const BOTTOM = 0x8;
        const FULL = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

impl ClipSideFlags {
    pub const NONE: Self = Self::empty();

    /// Flags for `clip` applied to unclipped `bounds`. An edge is flagged only when the clip is
    /// strictly inside the bounds on that edge.
    #[inline]
    pub fn from_edges(clip: Rect, bounds: Rect) -> Self {
        let mut flags = Self::NONE;
        if clip.x0 > bounds.x0 {
            flags |= Self::LEFT;
        }
        if clip.y0 > bounds.y0 {
            flags |= Self::TOP;
        }
        if clip.x1 < bounds.x1 {
            flags |= Self::RIGHT;
        }
        if clip.y1 < bounds.y1 {
            flags |= Self::BOTTOM;
        }
        flags
    }
}
