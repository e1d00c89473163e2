pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Returns `true` when every coefficient of `t` is finite.
pub fn affine_is_finite(t: Affine) -> bool {
    t.as_coeffs().iter().all(|c| c.is_finite())
}

/// Returns `true` when every edge of `r` is finite.
pub fn rect_is_finite(r: Rect) -> bool {
    r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
}
