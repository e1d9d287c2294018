// WHY: standalone whitespace collapsing so Text parsing and callers share one definition

/// Collapse every run of whitespace into a single space
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut result);
    result
}

/// Collapse whitespace into supplied buffer to avoid allocation
/// WHY: enables buffer reuse when normalizing many inputs in a row
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut prev_was_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            buffer.push(ch);
            prev_was_space = false;
        }
    }
}
