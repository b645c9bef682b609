/// Which behavior a pointer-up event routes to. Exactly one tool is active at
/// a time; switching takes effect on the next pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Select,
    CreateBox,
    CreateSphere,
}

impl ToolMode {
    pub fn label(self) -> &'static str {
        match self {
            ToolMode::Select => "Select",
            ToolMode::CreateBox => "Create Box",
            ToolMode::CreateSphere => "Create Sphere",
        }
    }
}

/// Holds the active tool and the camera-drag latch: a pointer-up that ends a
/// camera drag must not select or create anything.
#[derive(Debug, Default)]
pub struct ToolController {
    active: ToolMode,
    camera_moved: bool,
}

impl ToolController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ToolMode {
        self.active
    }

    pub fn activate(&mut self, mode: ToolMode) {
        self.active = mode;
    }

    /// Marks that the camera moved since the last pointer-up.
    pub fn note_camera_motion(&mut self) {
        self.camera_moved = true;
    }

    /// Whether the upcoming pointer-up should be swallowed. Consuming clears
    /// the latch, so exactly one pointer-up is suppressed per drag.
    pub fn take_suppression(&mut self) -> bool {
        let suppressed = self.camera_moved;
        self.camera_moved = false;
        suppressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_the_default_tool() {
        let tools = ToolController::new();
        assert_eq!(tools.active(), ToolMode::Select);
    }

    #[test]
    fn activate_switches_immediately() {
        let mut tools = ToolController::new();
        tools.activate(ToolMode::CreateSphere);
        assert_eq!(tools.active(), ToolMode::CreateSphere);
        tools.activate(ToolMode::CreateBox);
        assert_eq!(tools.active(), ToolMode::CreateBox);
    }

    #[test]
    fn suppression_is_consumed_once() {
        let mut tools = ToolController::new();
        assert!(!tools.take_suppression());
        tools.note_camera_motion();
        tools.note_camera_motion();
        assert!(tools.take_suppression());
        assert!(!tools.take_suppression(), "latch clears after one consumption");
    }
}
