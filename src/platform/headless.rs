//! In-memory host for tests and the native demo

use std::collections::HashMap;

use super::Host;
use crate::renderer::RecordingSurface;

/// A fake page: named recording surfaces plus a viewport size
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    surfaces: HashMap<String, RecordingSurface>,
    viewport: (u32, u32),
}

impl HeadlessHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surfaces: HashMap::new(),
            viewport: (width, height),
        }
    }

    /// Add an (unsized) surface under `id`
    pub fn with_surface(mut self, id: &str) -> Self {
        self.surfaces.insert(id.to_string(), RecordingSurface::default());
        self
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }
}

impl Host for HeadlessHost {
    type Surface = RecordingSurface;

    fn surface_by_id(&self, id: &str) -> Option<RecordingSurface> {
        self.surfaces.get(id).cloned()
    }

    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut host = HeadlessHost::new(320, 240).with_surface("bg");
        assert!(host.surface_by_id("bg").is_some());
        assert!(host.surface_by_id("other").is_none());
        host.set_viewport(10, 20);
        assert_eq!(host.viewport_size(), (10, 20));
    }
}
