//! Conditional rendering against an injected view host.
//!
//! The host framework's template/DOM layer is not hardcoded: it enters
//! through the [`ViewHost`] trait, and [`ConditionalRenderer`] only ever
//! asks it to attach or clear a fragment. [`BufferHost`] is a trivial host
//! over string fragments for demos and tests.

mod host;
mod renderer;

pub use host::{BufferHandle, BufferHost, ViewHost};
pub use renderer::{ConditionalRenderer, Predicate, RenderState};
