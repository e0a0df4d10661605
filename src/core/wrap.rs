// File: src/core/wrap.rs

/// Greedily packs the space-separated words of `source` into lines of at most
/// `max_width` characters. Repeated spaces are kept: the empty word between two
/// spaces still costs its separator. A word longer than `max_width` gets a line
/// of its own and is never split. An empty source yields a single empty line.
pub fn wrap_words(source: &str, max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut started = false;

    for word in source.split(' ') {
        let word_width = word.chars().count();

        if !started {
            current.push_str(word);
            current_width = word_width;
            started = true;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    lines.push(current);

    // Only the outer edges are trimmed; a line left blank by a run of spaces
    // at a break point is dropped.
    let lines: Vec<String> = lines
        .into_iter()
        .map(|l| l.trim_matches(' ').to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
