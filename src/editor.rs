use crate::camera3d::{Camera3D, OrbitCamera};
use crate::config::EditorConfig;
use crate::entity_registry::{EntityId, EntityRegistry};
use crate::highlight::HighlightSync;
use crate::input::EditorEvent;
use crate::inspect::{AxisValue, Inspector};
use crate::placement::{self, Creation};
use crate::selection::SelectionSet;
use crate::tools::{ToolController, ToolMode};
use glam::{Vec2, Vec3};
use winit::dpi::PhysicalSize;

const ORBIT_SENSITIVITY: f32 = 0.008;
const ZOOM_STEP: f32 = 0.1;

/// Renderer collaborator. Draws from read-only scene state; the editor never
/// mutates anything during a frame.
pub trait SceneRenderer {
    fn resize(&mut self, size: PhysicalSize<u32>);
    fn draw_frame(&mut self, registry: &EntityRegistry, camera: &Camera3D);
}

/// Composition root: owns the scene, the interaction components, and the
/// orbit camera, and routes host events to them. All mutation happens
/// synchronously inside one event handler at a time.
pub struct Editor<R: SceneRenderer> {
    config: EditorConfig,
    registry: EntityRegistry,
    selection: SelectionSet,
    highlight: HighlightSync,
    inspector: Inspector,
    creation: Creation,
    tools: ToolController,
    orbit: OrbitCamera,
    viewport: PhysicalSize<u32>,
    renderer: R,
}

impl<R: SceneRenderer> Editor<R> {
    pub fn new(config: EditorConfig, renderer: R) -> Self {
        let mut registry = EntityRegistry::new(config.ground.extent, config.ground.grid_divisions);
        seed_demo_scene(&mut registry);
        let orbit =
            OrbitCamera::from_pose(Vec3::from(config.camera.position), Vec3::from(config.camera.target));
        let viewport = PhysicalSize::new(config.window.width, config.window.height);
        let creation = Creation::new(config.spawn.clone());
        Self {
            config,
            registry,
            selection: SelectionSet::new(),
            highlight: HighlightSync::new(),
            inspector: Inspector::new(),
            creation,
            tools: ToolController::new(),
            orbit,
            viewport,
            renderer,
        }
    }

    pub fn camera(&self) -> Camera3D {
        self.orbit.to_camera(
            self.config.camera.fov_y_degrees.to_radians(),
            self.config.camera.near,
            self.config.camera.far,
        )
    }

    pub fn activate_tool(&mut self, mode: ToolMode) {
        self.tools.activate(mode);
    }

    pub fn active_tool(&self) -> ToolMode {
        self.tools.active()
    }

    /// Routes a pointer-up to the active tool. A pointer-up that ends a
    /// camera drag is swallowed entirely and clears the drag latch.
    pub fn handle_pointer_up(&mut self, position: Vec2, additive: bool) {
        if self.tools.take_suppression() {
            return;
        }
        let camera = self.camera();
        match self.tools.active() {
            ToolMode::Select => {
                self.selection.pick(&self.registry, &camera, self.viewport, position, additive);
                self.highlight.sync(&self.selection, &mut self.registry);
            }
            ToolMode::CreateBox => {
                self.creation.create_box_at(&mut self.registry, &camera, self.viewport, position);
            }
            ToolMode::CreateSphere => {
                self.creation.create_sphere_at(&mut self.registry, &camera, self.viewport, position);
            }
        }
    }

    pub fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.viewport = size;
        self.renderer.resize(size);
    }

    /// External camera collaborators call this when their pose changes
    /// between frames; the next pointer-up is then ignored.
    pub fn handle_camera_changed(&mut self) {
        self.tools.note_camera_motion();
    }

    pub fn orbit_camera(&mut self, delta: Vec2) {
        self.orbit.orbit(delta * ORBIT_SENSITIVITY);
        self.tools.note_camera_motion();
    }

    pub fn zoom_camera(&mut self, delta: f32) {
        let factor = (1.0 - delta * ZOOM_STEP).clamp(0.2, 5.0);
        self.orbit.zoom(factor);
        self.tools.note_camera_motion();
    }

    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::PointerUp { position, additive } => self.handle_pointer_up(position, additive),
            EditorEvent::Orbit { delta } => self.orbit_camera(delta),
            EditorEvent::Zoom { delta } => self.zoom_camera(delta),
            EditorEvent::Resized { size } => self.handle_resize(size),
        }
    }

    /// Read-only draw of the current scene.
    pub fn render_frame(&mut self) {
        let camera = self.camera();
        self.renderer.draw_frame(&self.registry, &camera);
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub fn highlight(&self) -> &HighlightSync {
        &self.highlight
    }

    pub fn viewport(&self) -> PhysicalSize<u32> {
        self.viewport
    }

    pub fn inspect_position(&self) -> Option<[AxisValue; 3]> {
        self.inspector.multi_position(&self.registry, &self.selection.list())
    }

    pub fn inspect_rotation_degrees(&self) -> Option<[AxisValue; 3]> {
        self.inspector.multi_rotation_degrees(&self.registry, &self.selection.list())
    }

    pub fn inspect_scale_percent(&self) -> Option<[AxisValue; 3]> {
        self.inspector.multi_scale_percent(&self.registry, &self.selection.list())
    }

    /// Removes an entity, first evicting it from the selection and decoration
    /// map so neither holds a stale id.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        if self.selection.has(id) {
            self.selection.remove(&[id]);
            self.highlight.sync(&self.selection, &mut self.registry);
        }
        self.registry.remove(id)
    }
}

/// Permanent demo content: one box and one sphere to click against.
fn seed_demo_scene(registry: &mut EntityRegistry) {
    let mut rng = rand::thread_rng();
    let box_color = placement::random_color(&mut rng);
    let sphere_color = placement::random_color(&mut rng);
    registry.add_box(Vec3::new(12.0, 2.0, 3.0), 4.0, box_color);
    registry.add_sphere(Vec3::new(-12.0, 5.0, -3.0), 5.0, sphere_color);
}
