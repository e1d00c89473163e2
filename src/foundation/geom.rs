//! Rectangle and transform helpers with the semantics the resolved render state relies on.
//!
//! `kurbo` supplies the value types; the functions here pin down emptiness, intersection and
//! pixel snapping so they behave the same on every path.

use crate::foundation::core::{Affine, Rect};

/// A rect is empty when it has no positive extent on either axis. NaN edges count as empty.
#[inline]
pub fn is_empty_rect(r: Rect) -> bool {
    !(r.x0 < r.x1 && r.y0 < r.y1)
}

/// Intersects two rects, collapsing to [`Rect::ZERO`] when they do not overlap.
///
/// Rects that only touch along an edge do not overlap.
#[inline]
pub fn intersect_or_empty(a: Rect, b: Rect) -> Rect {
    let out = Rect::new(a.x0.max(b.x0), a.y0.max(b.y0), a.x1.min(b.x1), a.y1.min(b.y1));
    if is_empty_rect(out) { Rect::ZERO } else { out }
}

/// Pushes every edge of `r` outward by `delta`.
#[inline]
pub fn outset(r: Rect, delta: f64) -> Rect {
    Rect::new(r.x0 - delta, r.y0 - delta, r.x1 + delta, r.y1 + delta)
}

/// Snaps edges outward to the integer pixel grid: left/top are floored, right/bottom ceiled.
///
/// The result always contains `r`. Float noise just past an integer grows the rect by a pixel
/// rather than letting any edge move inward.
pub fn snap_to_pixel_boundaries(r: Rect) -> Rect {
    if is_empty_rect(r) {
        return Rect::ZERO;
    }
    Rect::new(r.x0.floor(), r.y0.floor(), r.x1.ceil(), r.y1.ceil())
}

/// `true` when the linear part of `t` is exactly identity (identity or translation only).
#[inline]
pub fn is_pure_translate(t: Affine) -> bool {
    let [a, b, c, d, _, _] = t.as_coeffs();
    a == 1.0 && b == 0.0 && c == 0.0 && d == 1.0
}

/// `true` when `outer` fully contains `inner`.
#[inline]
pub fn contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && outer.x1 >= inner.x1 && outer.y1 >= inner.y1
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
