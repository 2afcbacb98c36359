//! Text normalization ahead of tokenization.

/// Normalize raw text: lowercase, collapse newlines (real or escaped as the
/// two-character sequences `\n` / `\r`) into single spaces, and fold the
/// straight apostrophe into the typographic one so downstream matching sees a
/// single spelling.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let unescaped = lowered.replace("\\n", " ").replace("\\r", " ");
    unescaped
        .chars()
        .map(|c| match c {
            '\n' | '\r' => ' ',
            '\'' => '’',
            other => other,
        })
        .collect()
}
