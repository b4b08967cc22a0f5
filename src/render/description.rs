//! Teaser text for news cards.

/// Longest teaser, in characters, before falling back to one sentence.
pub const MAX_TEASER_CHARS: usize = 500;

/// Split text into sentences.
///
/// A boundary is a period, optional whitespace, then an ASCII uppercase
/// letter or the end of the text. Each sentence is trimmed and ends with a
/// period; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if c != '.' {
            continue;
        }
        let rest = &text[i + 1..];
        let after_space = rest.trim_start();
        let boundary = match after_space.chars().next() {
            None => true,
            Some(next) => next.is_ascii_uppercase(),
        };
        if boundary {
            pieces.push(&text[start..i]);
            start = i + 1 + (rest.len() - after_space.len());
        }
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            if piece.ends_with('.') {
                piece.to_string()
            } else {
                format!("{piece}.")
            }
        })
        .collect()
}

/// First two sentences, or only the first when two would exceed
/// [`MAX_TEASER_CHARS`].
pub fn teaser(description: &str) -> String {
    let sentences = split_sentences(description);
    let text = sentences
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let text = text.trim();

    if text.chars().count() > MAX_TEASER_CHARS && sentences.len() > 1 {
        sentences[0].clone()
    } else {
        text.to_string()
    }
}
