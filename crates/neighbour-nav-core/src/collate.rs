//! Natural, case-insensitive string collation.
//!
//! Approximates a locale collator with numeric collation at base strength:
//! letters compare without case or accents ("Ä" = "a"), runs of ASCII digits
//! compare by numeric value ("2.9" < "2.10"), and character classes order as
//! whitespace < punctuation < symbols < digits < letters.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = fold(a);
    let b = fold(b);
    let (mut i, mut j) = (0, 0);

    loop {
        match (a.get(i), b.get(j)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let run_a = digit_run(&a, i);
                let run_b = digit_run(&b, j);
                let ord = cmp_numeric(&a[i..run_a], &b[j..run_b]);
                if ord != Ordering::Equal {
                    return ord;
                }
                i = run_a;
                j = run_b;
            }
            (Some(ca), Some(cb)) => {
                let ord = char_class(*ca)
                    .cmp(&char_class(*cb))
                    .then_with(|| ca.cmp(cb));
                if ord != Ordering::Equal {
                    return ord;
                }
                i += 1;
                j += 1;
            }
        }
    }
}

/// Strip accents and case: canonical decomposition, drop combining marks,
/// lowercase.
fn fold(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// End index of the digit run starting at `start`.
fn digit_run(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |offset| start + offset)
}

/// Compare two digit runs by value without parsing (runs may overflow u64).
fn cmp_numeric(a: &[char], b: &[char]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(digits: &[char]) -> &[char] {
    let zeros = digits.iter().take_while(|c| **c == '0').count();
    &digits[zeros..]
}

/// Primary ordering class of a folded character.
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_alphabetic() {
        4
    } else if c.is_numeric() {
        3
    } else if c.is_ascii_punctuation() && !"$+<=>^`|~".contains(c) {
        1
    } else {
        2
    }
}
