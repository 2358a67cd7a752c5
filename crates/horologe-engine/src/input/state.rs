use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Pointer position in logical pixels; `None` when outside the window.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event to the held state and records transitions into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => self.pointer_pos = Some((*x, *y)),

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) && !*repeat {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));
                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                            if *button == MouseButton::Left {
                                frame.clicks.push((*x, *y));
                            }
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }

    fn click(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn key_press_is_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(Key::T));
        state.apply_event(&mut frame, InputEvent::Key { key: Key::T, state: KeyState::Pressed, repeat: true });
        assert!(frame.key_pressed(Key::T));
        assert_eq!(frame.keys_pressed.len(), 1);
        assert!(state.key_down(Key::T));
    }

    #[test]
    fn held_key_does_not_retrigger_next_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(Key::N));
        frame.clear();
        state.apply_event(&mut frame, press(Key::N));
        assert!(!frame.key_pressed(Key::N));
        state.apply_event(&mut frame, release(Key::N));
        state.apply_event(&mut frame, press(Key::N));
        assert!(frame.key_pressed(Key::N));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(Key::S));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.key_down(Key::S));
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn left_press_records_click_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, click(MouseButtonState::Pressed, 12.0, 34.0));
        state.apply_event(&mut frame, click(MouseButtonState::Released, 12.0, 34.0));
        assert_eq!(frame.clicks, vec![(12.0, 34.0)]);
        assert!(frame.buttons_released.contains(&MouseButton::Left));
        assert_eq!(state.pointer_pos, Some((12.0, 34.0)));
    }

    #[test]
    fn pointer_leave_forgets_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
        assert_eq!(frame.events.len(), 2);
    }
}
