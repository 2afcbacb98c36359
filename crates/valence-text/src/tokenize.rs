//! Word tokenization and trigram windowing.

use regex::Regex;

use valence_core::models::feature::{Edge, Feature};

use crate::normalize::normalize;

/// Separator set for word splitting. The straight apostrophe is folded into
/// `’` by normalization, so only the typographic form appears here alongside
/// whitespace and sentence punctuation.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '!' | '?' | '.' | ';' | ',' | ')' | '(' | '/' | '’' | '\'')
}

/// Split text into non-empty lowercase tokens. Runs of separators collapse.
///
/// `"Hello, world! Isn't it #great"` becomes
/// `["hello", "world", "isn", "t", "it", "#great"]`.
pub fn word_tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build trigram context windows over the token stream.
///
/// Tokens matching `exclude` (the corpus topic hashtag) are dropped first so
/// the tag itself never acts as a discriminating feature. From the remaining
/// L tokens:
///
/// - index 0 yields two windows, `(Boundary, *, t1)` and `(t0, *, t2)`;
/// - interior index i yields `(t_i, *, t_{i+2})`;
/// - index L-2 yields `(t_{L-2}, *, Boundary)`.
///
/// Streams shorter than three tokens yield no windows.
pub fn trigram_windows(text: &str, exclude: Option<&Regex>) -> Vec<Feature> {
    let tokens: Vec<String> = word_tokens(text)
        .into_iter()
        .filter(|t| exclude.map_or(true, |re| !re.is_match(t)))
        .collect();

    let len = tokens.len();
    if len < 3 {
        return Vec::new();
    }

    let mut windows = Vec::with_capacity(len);
    windows.push(Feature::trigram(Edge::Boundary, Edge::Token(tokens[1].clone())));
    windows.push(Feature::trigram(
        Edge::Token(tokens[0].clone()),
        Edge::Token(tokens[2].clone()),
    ));
    for i in 1..=len.saturating_sub(3) {
        windows.push(Feature::trigram(
            Edge::Token(tokens[i].clone()),
            Edge::Token(tokens[i + 2].clone()),
        ));
    }
    windows.push(Feature::trigram(Edge::Token(tokens[len - 2].clone()), Edge::Boundary));

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_apostrophe() {
        assert_eq!(
            word_tokens("Hello, world! Isn't it #great"),
            vec!["hello", "world", "isn", "t", "it", "#great"]
        );
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(word_tokens("a...b!!  c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn five_token_window_sequence() {
        let windows = trigram_windows("a b c d e", None);
        let expect = vec![
            Feature::trigram(Edge::Boundary, Edge::Token("b".into())),
            Feature::trigram(Edge::Token("a".into()), Edge::Token("c".into())),
            Feature::trigram(Edge::Token("b".into()), Edge::Token("d".into())),
            Feature::trigram(Edge::Token("c".into()), Edge::Token("e".into())),
            Feature::trigram(Edge::Token("d".into()), Edge::Boundary),
        ];
        assert_eq!(windows, expect);
    }

    #[test]
    fn short_streams_yield_nothing() {
        assert!(trigram_windows("", None).is_empty());
        assert!(trigram_windows("one", None).is_empty());
        assert!(trigram_windows("one two", None).is_empty());
    }

    #[test]
    fn three_tokens_yield_three_windows() {
        let windows = trigram_windows("a b c", None);
        assert_eq!(
            windows,
            vec![
                Feature::trigram(Edge::Boundary, Edge::Token("b".into())),
                Feature::trigram(Edge::Token("a".into()), Edge::Token("c".into())),
                Feature::trigram(Edge::Token("b".into()), Edge::Boundary),
            ]
        );
    }

    #[test]
    fn topic_hashtag_is_excluded() {
        let re = Regex::new(r"(?i)^#topic$").unwrap();
        let windows = trigram_windows("a #topic b c", Some(&re));
        // #topic removed; stream is [a, b, c].
        assert_eq!(windows.len(), 3);
        assert_eq!(
            windows[1],
            Feature::trigram(Edge::Token("a".into()), Edge::Token("c".into()))
        );
    }
}
