/// Bound free text to `max_len` characters, preferring to cut at a sentence
/// or line boundary.
///
/// Positions are character positions, so multi-byte text is never split
/// inside a code point. Returns the input unchanged when it already fits;
/// the result never exceeds `max_len` characters, and re-truncating a
/// truncated text is a no-op.
pub fn truncate(text: &str, max_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_len {
        return text.to_string();
    }

    let prefix = &chars[..max_len];
    let boundary = max_len as f64 * 0.7;

    if let Some(pos) = rposition(prefix, '.') {
        if pos as f64 > boundary {
            return chars[..=pos].iter().collect();
        }
    }
    if let Some(pos) = rposition(prefix, '\n') {
        if pos as f64 > boundary {
            return chars[..pos].iter().collect();
        }
    }
    if max_len <= 3 {
        return chars[..max_len].iter().collect();
    }
    let mut out: String = chars[..max_len - 3].iter().collect();
    out.push_str("...");
    out
}

fn rposition(chars: &[char], needle: char) -> Option<usize> {
    chars.iter().rposition(|&c| c == needle)
}

// ── tests ─────────────────────────────────────────────────────────────────────
