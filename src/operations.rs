/// List view operations: ordering, fuzzy filtering, plain-text import/export

use std::cmp::Ordering;

use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::record::Order;

/// Values prefixed with this marker are compared as numbers
const MONEY_MARKER: char = '$';

/// Query characters treated as word separators and ignored when matching
const QUERY_SEPARATORS: [char; 6] = [' ', '_', '-', ':', '/', '\\'];

/// Parse the numeric part of a money value the way a JS `Number()` cast does:
/// surrounding whitespace ignored, blank is zero, `Infinity` spelled out in
/// full, anything else unparseable is NaN. Negative zero reads as zero.
fn parse_amount(amount: &str) -> f64 {
    let amount = amount.trim();
    if amount.is_empty() {
        return 0.0;
    }
    let digits = amount.trim_start_matches(['+', '-']);
    let parsed = if digits == "Infinity" {
        amount.replace("Infinity", "inf").parse::<f64>()
    } else if digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        amount.parse::<f64>()
    } else {
        return f64::NAN;
    };
    // -0.0 + 0.0 is +0.0
    parsed.map_or(f64::NAN, |value| value + 0.0)
}

/// Compare two column values
///
/// Two money values (`$12.50`) compare by amount; everything else compares
/// as strings by UTF-16 code unit, as JS `<` does. A money value against plain
/// text falls back to string order, which keeps all money values together and
/// the ordering total.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.strip_prefix(MONEY_MARKER), b.strip_prefix(MONEY_MARKER)) {
        (Some(a), Some(b)) => parse_amount(a).total_cmp(&parse_amount(b)),
        _ => a.encode_utf16().cmp(b.encode_utf16()),
    }
}

/// Sort items in place by a text field
///
/// Descending compares `(b, a)` rather than reversing the ascending result.
/// The sort is stable, so equal values keep their current relative order.
pub fn sort_in_place<T>(items: &mut [T], direction: Order, field: impl Fn(&T) -> &str) {
    match direction {
        Order::None => {}
        Order::Asc => items.sort_by(|a, b| compare_values(field(a), field(b))),
        Order::Desc => items.sort_by(|a, b| compare_values(field(b), field(a))),
    }
}

/// Sorted copy of `items`; `Order::None` keeps insertion order
pub fn sort_items<T: Clone>(items: &[T], direction: Order, field: impl Fn(&T) -> &str) -> Vec<T> {
    let mut sorted = items.to_vec();
    sort_in_place(&mut sorted, direction, field);
    sorted
}

/// Keep the items whose field fuzzy-matches `query` (case-insensitive)
///
/// Separators (space, `_`, `-`, `:`, `/`, `\`) in the query are ignored, and a
/// query with nothing else keeps everything. Only the match decision is used;
/// items keep their order rather than being ranked by score.
pub fn filter_items<T: Clone>(items: &[T], query: &str, field: impl Fn(&T) -> &str) -> Vec<T> {
    let query: String = query.chars().filter(|c| !QUERY_SEPARATORS.contains(c)).collect();
    let query = query.trim();
    if query.is_empty() {
        return items.to_vec();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let query_lowercase = query.to_lowercase();
    let mut needle_buf = Vec::new();
    let needle = Utf32Str::new(&query_lowercase, &mut needle_buf);

    let mut haystack_buf = Vec::new();

    items
        .iter()
        .filter(|&item| {
            let value_lowercase = field(item).to_lowercase();
            haystack_buf.clear();
            let haystack = Utf32Str::new(&value_lowercase, &mut haystack_buf);
            matcher.fuzzy_match(haystack, needle).is_some()
        })
        .cloned()
        .collect()
}

/// One value per line
pub fn export_text<T>(items: &[T], field: impl Fn(&T) -> &str) -> String {
    items.iter().map(field).collect::<Vec<_>>().join("\n")
}

/// Split an imported file into values, dropping empty lines
pub fn import_text(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
