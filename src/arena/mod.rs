//! Frame-scoped linear allocation for baked op states.

pub(crate) mod linear;
