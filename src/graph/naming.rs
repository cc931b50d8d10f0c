//! Successor functions for auto-named nodes.

/// Pure callback mapping the previous auto-generated node value to the next.
///
/// Supplied at graph construction and invoked once per implicit `add_node`
/// call; the graph keeps the latest value as its naming state.
pub type NamingFn<T> = Box<dyn Fn(&T) -> T + Send + Sync>;

/// Numeric naming: each auto-added node gets the previous value plus one.
pub fn counter() -> NamingFn<u64> {
    Box::new(|n| n + 1)
}

/// Spreadsheet-style naming: `A, B, .., Z, AA, AB, ..`.
///
/// Seed with an empty string to start at `A`.
pub fn letters() -> NamingFn<String> {
    Box::new(|s| next_letters(s))
}

fn next_letters(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    for c in chars.iter_mut().rev() {
        if *c == 'Z' {
            *c = 'A';
        } else {
            *c = (*c as u8 + 1) as char;
            return chars.into_iter().collect();
        }
    }
    // Every column rolled over (or the seed was empty).
    chars.insert(0, 'A');
    chars.into_iter().collect()
}
