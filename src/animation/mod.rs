//! Per-object animation: behavior markers and the per-frame animator.
//!
//! Builders tag nodes with a [`Behavior`]; every frame the [`Animator`]
//! walks the scene and applies each marker's rule. Rules are independent of
//! each other and of visit order.

mod animator;
mod behavior;

pub use animator::Animator;
pub use behavior::{apply, Behavior, BehaviorKind};
