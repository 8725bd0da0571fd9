//! Display surface contract
//!
//! A surface reports its measured size and holds child nodes. Sessions
//! attach exactly one node on creation and remove exactly that node when
//! they stop.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared handle to a caller-owned display surface
pub type SurfaceRef = Rc<RefCell<dyn DisplaySurface>>;

/// Identity of a renderer's output node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputNode(pub u64);

impl OutputNode {
    /// Allocate a process-unique node id
    pub fn next() -> Self {
        static NEXT_NODE: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_NODE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Errors reported by display surfaces
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The node is not a child of this surface
    #[error("node {0:?} is not a child of this surface")]
    NotAChild(OutputNode),

    /// The surface is no longer part of a live display
    #[error("surface is disconnected")]
    Disconnected,

    /// Implementation-specific failure
    #[error("surface error: {0}")]
    Backend(String),
}

/// Container a renderer's output node is attached to
///
/// All methods are called from the thread that owns the session.
pub trait DisplaySurface {
    /// Current measured width in pixels, if the surface has been laid out
    fn measured_width(&self) -> Option<u32>;

    /// Current measured height in pixels, if the surface has been laid out
    fn measured_height(&self) -> Option<u32>;

    /// Whether the surface is still part of a live display
    fn is_connected(&self) -> bool;

    /// Whether `node` is currently a child of this surface
    fn contains(&self, node: OutputNode) -> bool;

    /// Attach `node` as the last child
    fn append_child(&mut self, node: OutputNode);

    /// Detach `node`
    fn remove_child(&mut self, node: OutputNode) -> Result<(), SurfaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_are_unique() {
        let a = OutputNode::next();
        let b = OutputNode::next();
        assert_ne!(a, b);
    }
}
