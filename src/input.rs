use glam::Vec2;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Editor-level events produced from raw window input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    PointerUp { position: Vec2, additive: bool },
    Orbit { delta: Vec2 },
    Zoom { delta: f32 },
    Resized { size: PhysicalSize<u32> },
}

/// Folds window events into editor events, drained once per frame. Tracks the
/// cursor, the shift modifier (additive selection), and right-button drags
/// (camera orbit).
#[derive(Default)]
pub struct Input {
    events: Vec<EditorEvent>,
    cursor: Option<Vec2>,
    shift_held: bool,
    right_held: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let next = Vec2::new(position.x as f32, position.y as f32);
                if self.right_held {
                    if let Some(last) = self.cursor {
                        self.events.push(EditorEvent::Orbit { delta: next - last });
                    }
                }
                self.cursor = Some(next);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_held = modifiers.state().shift_key();
            }
            WindowEvent::MouseInput { state, button, .. } => match button {
                MouseButton::Left => {
                    if *state == ElementState::Released {
                        if let Some(position) = self.cursor {
                            self.events
                                .push(EditorEvent::PointerUp { position, additive: self.shift_held });
                        }
                    }
                }
                MouseButton::Right => {
                    self.right_held = *state == ElementState::Pressed;
                }
                _ => {}
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / 40.0,
                };
                self.events.push(EditorEvent::Zoom { delta: amount });
            }
            WindowEvent::Resized(size) => {
                self.events.push(EditorEvent::Resized { size: *size });
            }
            _ => {}
        }
    }

    pub fn drain(&mut self) -> Vec<EditorEvent> {
        self.events.drain(..).collect()
    }

    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn shift_held(&self) -> bool {
        self.shift_held
    }
}
