//! Single-line text editing shared by the new-task input and the edit field.
//!
//! The cursor is a character index into the text; it is clamped on every
//! call so an externally replaced text never leaves it out of range.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply an editing key to `text`. Returns whether the key was consumed.
///
/// Control and Alt chords are never inserted as text.
pub fn apply_key(text: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    let len = text.chars().count();
    *cursor = (*cursor).min(len);

    match key.code {
        KeyCode::Char(c) if !is_chord(key.modifiers) => {
            text.insert(byte_index(text, *cursor), c);
            *cursor += 1;
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                text.remove(byte_index(text, *cursor));
            }
        }
        KeyCode::Delete => {
            if *cursor < len {
                text.remove(byte_index(text, *cursor));
            }
        }
        KeyCode::Left => *cursor = cursor.saturating_sub(1),
        KeyCode::Right => *cursor = (*cursor + 1).min(len),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = len,
        _ => return false,
    }
    true
}

/// Byte offset of the character at `char_idx`, or the end of `text`.
#[must_use]
pub fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(i, _)| i)
}

fn is_chord(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
