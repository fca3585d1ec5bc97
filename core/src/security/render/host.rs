//! View host capability trait and a buffer-backed implementation.

use std::sync::Arc;

use parking_lot::Mutex;

/// The view container a renderer writes into.
///
/// A host shows at most one fragment at a time: [`attach`](ViewHost::attach)
/// replaces whatever was previously attached, [`clear`](ViewHost::clear)
/// detaches it. What a fragment *is* — a DOM node, a template reference, a
/// widget — is the host's business.
pub trait ViewHost {
    /// The renderable unit this host understands.
    type Fragment;

    /// Makes `fragment` the attached content, replacing any previous one.
    fn attach(&mut self, fragment: &Self::Fragment);

    /// Detaches the currently attached content, if any.
    fn clear(&mut self);
}

/// A [`ViewHost`] over string fragments that records what is attached.
///
/// Useful in tests and demos: the host moves into the renderer, while any
/// number of [`BufferHandle`]s keep observing it.
///
/// # Example
/// ```
/// use secview_core::security::render::{BufferHost, ViewHost};
///
/// let mut host = BufferHost::new();
/// let screen = host.handle();
///
/// host.attach(&"hello".to_string());
/// assert_eq!(screen.current().as_deref(), Some("hello"));
///
/// host.clear();
/// assert_eq!(screen.current(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferHost {
    current: Arc<Mutex<Option<String>>>,
}

impl BufferHost {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an observer handle onto this host's buffer.
    pub fn handle(&self) -> BufferHandle {
        BufferHandle {
            current: Arc::clone(&self.current),
        }
    }
}

impl ViewHost for BufferHost {
    type Fragment = String;

    fn attach(&mut self, fragment: &String) {
        *self.current.lock() = Some(fragment.clone());
    }

    fn clear(&mut self) {
        *self.current.lock() = None;
    }
}

/// Observer handle onto a [`BufferHost`].
#[derive(Debug, Clone)]
pub struct BufferHandle {
    current: Arc<Mutex<Option<String>>>,
}

impl BufferHandle {
    /// Returns the currently attached fragment, if any.
    pub fn current(&self) -> Option<String> {
        self.current.lock().clone()
    }

    /// True when nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.current.lock().is_none()
    }
}
