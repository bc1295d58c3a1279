// Resume component tree: model, traversal, persistent edits, and the
// conversion from the parser backend's section/block payload.

pub mod handlers;
pub mod models;
pub mod sample;
pub mod transform;
pub mod tree;
