//! Input polling seam
//!
//! The sim never talks to a keyboard directly: a backend implements
//! [`InputSource`] and the app layer snapshots it into a
//! [`FrameInput`](crate::sim::FrameInput) once per frame.

/// Logical keys the game binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Fire a beam (edge-triggered)
    Fire,
    /// Quit the host loop (level-triggered)
    Quit,
}

/// Polled keyboard state for the current frame
pub trait InputSource {
    /// Key is currently held down.
    fn key_held(&self, key: Key) -> bool;

    /// Key went down on this frame (edge, not repeat).
    fn key_pressed(&self, key: Key) -> bool;
}

/// Canned input for the demo binary and headless tests: a fixed list of
/// per-frame (held, pressed) key sets, replayed in order and empty after
/// the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: Vec<(Vec<Key>, Vec<Key>)>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<(Vec<Key>, Vec<Key>)>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Advance to the next scripted frame.
    pub fn step(&mut self) {
        self.cursor += 1;
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    fn current(&self) -> Option<&(Vec<Key>, Vec<Key>)> {
        self.frames.get(self.cursor)
    }
}

impl InputSource for ScriptedInput {
    fn key_held(&self, key: Key) -> bool {
        self.current().is_some_and(|(held, _)| held.contains(&key))
    }

    fn key_pressed(&self, key: Key) -> bool {
        self.current()
            .is_some_and(|(_, pressed)| pressed.contains(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_frames() {
        let mut input = ScriptedInput::new(vec![
            (vec![Key::Left], vec![Key::Fire]),
            (vec![Key::Left, Key::Fire], vec![]),
        ]);

        assert!(input.key_held(Key::Left));
        assert!(input.key_pressed(Key::Fire));
        assert!(!input.key_held(Key::Fire));

        input.step();
        assert!(input.key_held(Key::Fire));
        assert!(!input.key_pressed(Key::Fire));

        input.step();
        assert!(input.finished());
        assert!(!input.key_held(Key::Left));
    }
}
