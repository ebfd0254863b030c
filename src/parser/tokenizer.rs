//! Instruction tokenizer

/// Split instruction text into words
///
/// Splits on single spaces and drops empty pieces, so runs of spaces
/// collapse. Case is preserved.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|token| !token.is_empty()).collect()
}

/// Position of the first token at or after `start` equal to `keyword`,
/// ignoring ASCII case
pub fn find_keyword(tokens: &[&str], keyword: &str, start: usize) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, token)| token.eq_ignore_ascii_case(keyword))
        .map(|(index, _)| index)
}
