use glam::{UVec2, Vec2};
use overlay::HostCamera;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, WindowEvent},
};

use crate::{gizmo::PointerEvent, region::Region, ViewCubeGizmo};

/// Pointer interaction derived from window events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Move(PointerEvent),
    Click(PointerEvent),
    Leave,
}

/// Turns winit window events into gizmo pointer events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    cursor: Option<Vec2>,
    canvas: UVec2,
    pressed: bool,
}

impl PointerTracker {
    pub fn new(canvas: PhysicalSize<u32>) -> Self {
        Self {
            canvas: UVec2::new(canvas.width, canvas.height),
            ..Default::default()
        }
    }

    pub fn canvas(&self) -> UVec2 {
        self.canvas
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerAction> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.pressed = false;
                Some(PointerAction::Leave)
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::Resized(size) => {
                self.resized(*size);
                None
            }
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> PointerAction {
        let offset = Vec2::new(position.x as f32, position.y as f32);
        self.cursor = Some(offset);
        PointerAction::Move(self.event_at(offset))
    }

    /// A click is a left press followed by a release.
    pub fn mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
    ) -> Option<PointerAction> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => {
                self.pressed = true;
                None
            }
            ElementState::Released => {
                let was_pressed = std::mem::take(&mut self.pressed);
                let offset = self.cursor.filter(|_| was_pressed)?;
                Some(PointerAction::Click(self.event_at(offset)))
            }
        }
    }

    pub fn resized(&mut self, size: PhysicalSize<u32>) {
        self.canvas = UVec2::new(size.width, size.height);
    }

    fn event_at(&self, offset: Vec2) -> PointerEvent {
        PointerEvent {
            offset,
            canvas: self.canvas,
        }
    }
}

impl ViewCubeGizmo {
    /// Feeds a window event through `tracker`. Returns the region that was
    /// hovered or clicked, if any.
    pub fn handle_window_event(
        &mut self,
        tracker: &mut PointerTracker,
        event: &WindowEvent,
        camera: &dyn HostCamera,
    ) -> Option<Region> {
        match tracker.handle_event(event)? {
            PointerAction::Move(pointer) => self.on_pointer_move(pointer),
            PointerAction::Click(pointer) => self.on_pointer_click(pointer, camera),
            PointerAction::Leave => {
                self.clear_hover();
                None
            }
        }
    }
}
