use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::editor::Editor;
use crate::error::FigureResult;

/// Editor-level input, with pointer positions in canvas-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the canvas has focus
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Turns raw egui input into [`InputEvent`]s for one canvas
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Collect this frame's events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        // Keys belong to the focused text field while one is being edited
        let typing = ctx.wants_keyboard_input();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = hover.filter(|pos| self.canvas_rect.contains(*pos)) {
                    events.push(InputEvent::PointerDown {
                        position: self.to_local(pos),
                    });
                }
            }

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: self.to_local(pos),
                    });
                }
            }

            // Release anywhere ends the gesture, even outside the canvas
            if input.pointer.button_released(PointerButton::Primary) {
                if let Some(pos) = hover.or(self.last_pointer_pos) {
                    events.push(InputEvent::PointerUp {
                        position: self.to_local(pos),
                    });
                }
            }

            for event in input.raw.events.iter().filter(|_| !typing) {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }

            if hover.is_some() {
                self.last_pointer_pos = hover;
            }
        });

        events
    }
}

/// Feed one event into the editor.
///
/// Escape cancels the active gesture (or drops the selection when idle), Delete/Backspace removes the selected
/// shape, Ctrl+Z / Ctrl+Shift+Z undo and redo.
pub fn dispatch(editor: &mut Editor, event: &InputEvent) -> FigureResult<()> {
    match event {
        InputEvent::PointerDown { position } => editor.pointer_down(*position),
        InputEvent::PointerMove { position } => editor.pointer_move(*position),
        InputEvent::PointerUp { position } => editor.pointer_up(*position),
        InputEvent::KeyDown { key, modifiers } => match key {
            Key::Escape => {
                if !editor.cancel_gesture() {
                    editor.clear_selection();
                }
                Ok(())
            }
            Key::Delete | Key::Backspace if editor.selection().is_some() => {
                editor.delete_selected().map(|_| ())
            }
            Key::Z if modifiers.command && modifiers.shift => editor.redo(),
            Key::Z if modifiers.command => editor.undo(),
            _ => Ok(()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::editor::Tool;
    use crate::shape::ShapeKind;
    use egui::pos2;

    #[test]
    fn escape_cancels_drawing() {
        let mut editor = Editor::new(EditorConfig::default());
        editor.set_tool(Tool::Draw(ShapeKind::Square)).unwrap();
        dispatch(&mut editor, &InputEvent::PointerDown { position: pos2(5.0, 5.0) }).unwrap();
        assert_eq!(editor.document().len(), 1);

        let escape = InputEvent::KeyDown { key: Key::Escape, modifiers: Modifiers::NONE };
        dispatch(&mut editor, &escape).unwrap();
        assert!(editor.document().is_empty());
        assert!(editor.state().is_idle());
    }

    #[test]
    fn escape_when_idle_drops_selection() {
        let mut editor = Editor::new(EditorConfig::default());
        editor.set_tool(Tool::Draw(ShapeKind::Square)).unwrap();
        dispatch(&mut editor, &InputEvent::PointerDown { position: pos2(5.0, 5.0) }).unwrap();
        dispatch(&mut editor, &InputEvent::PointerUp { position: pos2(5.0, 5.0) }).unwrap();
        assert!(editor.selection().is_some());

        let escape = InputEvent::KeyDown { key: Key::Escape, modifiers: Modifiers::NONE };
        dispatch(&mut editor, &escape).unwrap();
        assert_eq!(editor.selection(), None);
        assert_eq!(editor.document().len(), 1);
    }

    #[test]
    fn command_z_undoes() {
        let mut editor = Editor::new(EditorConfig::default());
        editor.set_tool(Tool::Draw(ShapeKind::Circle)).unwrap();
        dispatch(&mut editor, &InputEvent::PointerDown { position: pos2(50.0, 50.0) }).unwrap();
        dispatch(&mut editor, &InputEvent::PointerUp { position: pos2(80.0, 50.0) }).unwrap();

        let undo = InputEvent::KeyDown { key: Key::Z, modifiers: Modifiers::COMMAND };
        dispatch(&mut editor, &undo).unwrap();
        assert!(editor.document().is_empty());
    }
}
