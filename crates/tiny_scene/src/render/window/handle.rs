//! In-memory display surface

use std::cell::RefCell;
use std::rc::Rc;

use super::backend::{DisplaySurface, OutputNode, SurfaceError};

/// Display surface backed by plain fields
///
/// Used by headless hosts and tests: the measured size and the connected
/// flag are set by the owner, children are tracked in attach order.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    width: Option<u32>,
    height: Option<u32>,
    connected: bool,
    children: Vec<OutputNode>,
}

impl HeadlessSurface {
    /// Connected surface measuring `width` × `height`
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            connected: true,
            children: Vec::new(),
        }
    }

    /// Connected surface that has not been measured
    pub fn unmeasured() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// Wrap in the shared handle sessions expect
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// Connect or disconnect the surface
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Attached nodes in attach order
    pub fn children(&self) -> &[OutputNode] {
        &self.children
    }
}

impl DisplaySurface for HeadlessSurface {
    fn measured_width(&self) -> Option<u32> {
        self.width
    }

    fn measured_height(&self) -> Option<u32> {
        self.height
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn contains(&self, node: OutputNode) -> bool {
        self.children.contains(&node)
    }

    fn append_child(&mut self, node: OutputNode) {
        // Re-appending moves the node to the end
        self.children.retain(|child| *child != node);
        self.children.push(node);
    }

    fn remove_child(&mut self, node: OutputNode) -> Result<(), SurfaceError> {
        let index = self
            .children
            .iter()
            .position(|child| *child == node)
            .ok_or(SurfaceError::NotAChild(node))?;
        self.children.remove(index);
        Ok(())
    }
}
