//! Value models for the data a baked op state is resolved against.
//!
//! These mirror what the recorder and the state stack hand over: a snapshot of the ambient
//! transform/clip, and the recorded op itself. Nothing here owns lifetime policy; baked states
//! borrow from them.

pub(crate) mod op;
pub(crate) mod snapshot;
