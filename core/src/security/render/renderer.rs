//! Two-fragment conditional renderer.

use tracing::trace;

use super::host::ViewHost;
use crate::security::state::SecurityState;

/// Boxed predicate closure driving a renderer.
pub type Predicate = Box<dyn Fn(&SecurityState) -> bool + Send + Sync>;

/// What a renderer currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// The primary fragment is attached.
    Primary,
    /// The fallback fragment is attached.
    Fallback,
    /// Nothing is attached.
    Detached,
}

/// Keeps exactly one of two fragments attached to a view host.
///
/// On every [`update`](ConditionalRenderer::update) the predicate is
/// recomputed against the given state: `true` shows the primary fragment,
/// `false` shows the fallback if one is configured, otherwise nothing. A
/// transition only happens when the target differs from what is currently
/// shown, so an unchanged result causes no host calls at all.
///
/// A renderer starts detached; the caller performs the first `update`
/// immediately after construction. [`dispose`](ConditionalRenderer::dispose)
/// detaches whatever is shown and turns later `update`s into no-ops; it also
/// runs on drop.
pub struct ConditionalRenderer<H: ViewHost> {
    host: H,
    primary: H::Fragment,
    fallback: Option<H::Fragment>,
    predicate: Predicate,
    rendered: RenderState,
    disposed: bool,
}

impl<H: ViewHost> ConditionalRenderer<H> {
    /// Creates a detached renderer. No fragment is attached until the first
    /// [`update`](ConditionalRenderer::update).
    pub fn new(
        host: H,
        predicate: Predicate,
        primary: H::Fragment,
        fallback: Option<H::Fragment>,
    ) -> Self {
        ConditionalRenderer {
            host,
            primary,
            fallback,
            predicate,
            rendered: RenderState::Detached,
            disposed: false,
        }
    }

    /// Returns what is currently shown.
    pub fn rendered(&self) -> RenderState {
        self.rendered
    }

    /// True after [`dispose`](ConditionalRenderer::dispose).
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Recomputes the predicate against `state` and toggles the attached
    /// fragment if the result changed.
    pub fn update(&mut self, state: &SecurityState) {
        if self.disposed {
            return;
        }

        let visible = (self.predicate)(state);
        let target = if visible {
            RenderState::Primary
        } else if self.fallback.is_some() {
            RenderState::Fallback
        } else {
            RenderState::Detached
        };

        if target == self.rendered {
            return;
        }

        trace!(from = ?self.rendered, to = ?target, "render transition");
        self.host.clear();
        match target {
            RenderState::Primary => self.host.attach(&self.primary),
            RenderState::Fallback => {
                if let Some(fallback) = &self.fallback {
                    self.host.attach(fallback);
                }
            }
            RenderState::Detached => {}
        }
        self.rendered = target;
    }

    /// Detaches the current fragment and makes further updates no-ops.
    /// Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if self.rendered != RenderState::Detached {
            self.host.clear();
            self.rendered = RenderState::Detached;
        }
        self.disposed = true;
    }
}

impl<H: ViewHost> Drop for ConditionalRenderer<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
