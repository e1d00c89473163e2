//! Bake a serialized frame: a list of (snapshot, op) entries, as recorded for diagnostics or
//! fixtures.

pub(crate) mod frame;
