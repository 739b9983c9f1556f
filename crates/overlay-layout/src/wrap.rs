//! Greedy word wrapping against a pixel budget

use overlay_core::traits::FontRef;

use crate::measure::text_width;

/// Splits `text` into lines no wider than `max_width` pixels
///
/// Words are taken left to right and a line is closed as soon as the next
/// word (plus its leading space) would overflow. Any run of whitespace is a
/// single separator. A word that is wider than the budget on its own still
/// gets a line of its own; words are never broken.
pub fn wrap_text(text: &str, font: &dyn FontRef, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate_len = current.len();
        current.push(' ');
        current.push_str(word);

        if text_width(font, &current, size) > max_width {
            current.truncate(candidate_len);
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    log::debug!(
        "Wrapped {} chars into {} lines at {}px",
        text.len(),
        lines.len(),
        max_width
    );

    lines
}
