/// Characters of context kept on each side of a match.
pub(crate) const CONTEXT_CHARS: usize = 50;
/// Characters returned when there is no match to center on.
pub(crate) const FALLBACK_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Case-folded form of `text`, one char per char of the input so that
/// positions in the folded text are positions in `text`.
pub(crate) fn fold(text: &str) -> Vec<char> {
  text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
  c.to_lowercase().next().unwrap_or(c)
}

/// Char index of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
  if needle.is_empty() {
    return Some(0);
  }
  haystack
    .windows(needle.len())
    .position(|window| window == needle)
}

/// Snippet of `text` around the first case-insensitive occurrence of `query`,
/// with an ellipsis on each side that was cut.
pub(crate) fn highlight(text: &str, query: &str) -> String {
  let chars = text.chars().collect::<Vec<_>>();
  let needle = fold(query);
  let Some(index) = find(&fold(text), &needle) else {
    return chars.iter().take(FALLBACK_CHARS).collect();
  };

  let start = index.saturating_sub(CONTEXT_CHARS);
  let end = (index + needle.len() + CONTEXT_CHARS).min(chars.len());
  let mut snippet = String::new();
  if start > 0 {
    snippet.push_str(ELLIPSIS);
  }
  snippet.extend(&chars[start..end]);
  if end < chars.len() {
    snippet.push_str(ELLIPSIS);
  }
  snippet
}
