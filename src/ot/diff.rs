//! Diff: derive operations from two snapshots of an editor buffer
//!
//! Editors usually report "the text is now X" rather than a structured
//! edit. Trimming the common prefix and suffix leaves the changed region,
//! which becomes at most one Delete followed by one Insert at the same
//! offset.

use super::operation::Operation;

/// Operations turning `before` into `after`, to be applied in order
///
/// Returns an empty vector when the texts are equal, a single Insert or
/// Delete for pure typing or erasing, and `[Delete, Insert]` for a
/// replacement.
///
/// # Example
///
/// ```
/// use synckit_ot::ot::{diff, Operation};
///
/// assert_eq!(diff("hello world", "hello, world"), vec![Operation::insert(5, ",")]);
/// assert_eq!(
///     diff("cat", "cut"),
///     vec![Operation::delete(1, 1), Operation::insert(1, "u")]
/// );
/// ```
pub fn diff(before: &str, after: &str) -> Vec<Operation> {
    let old: Vec<char> = before.chars().collect();
    let new: Vec<char> = after.chars().collect();

    let prefix = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let max_suffix = old.len().min(new.len()) - prefix;
    let suffix = old
        .iter()
        .rev()
        .zip(new.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let removed = old.len() - prefix - suffix;
    let inserted: String = new[prefix..new.len() - suffix].iter().collect();

    let mut ops = Vec::with_capacity(2);
    if removed > 0 {
        ops.push(Operation::delete(prefix, removed));
    }
    if !inserted.is_empty() {
        ops.push(Operation::insert(prefix, inserted));
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ot::apply_all;

    #[test]
    fn test_diff_equal() {
        assert!(diff("same", "same").is_empty());
        assert!(diff("", "").is_empty());
    }

    #[test]
    fn test_diff_insert() {
        assert_eq!(diff("", "abc"), vec![Operation::insert(0, "abc")]);
        assert_eq!(diff("ac", "abc"), vec![Operation::insert(1, "b")]);
        assert_eq!(diff("ab", "abc"), vec![Operation::insert(2, "c")]);
    }

    #[test]
    fn test_diff_delete() {
        assert_eq!(diff("abc", ""), vec![Operation::delete(0, 3)]);
        assert_eq!(diff("abc", "ac"), vec![Operation::delete(1, 1)]);
    }

    #[test]
    fn test_diff_repeated_chars() {
        // Prefix consumes the shared run; suffix must not overlap it
        assert_eq!(diff("aaa", "aaaa"), vec![Operation::insert(3, "a")]);
        assert_eq!(diff("aaaa", "aa"), vec![Operation::delete(2, 2)]);
    }

    #[test]
    fn test_diff_replace_multibyte() {
        let ops = diff("héllo 👋", "hallo 🦊");
        assert_eq!(apply_all("héllo 👋", &ops).unwrap(), "hallo 🦊");
    }

    #[test]
    fn test_diff_reproduces_after() {
        let cases = [
            ("hello world", "hello brave new world"),
            ("function foo() {}", "fn foo() {}"),
            ("abc", "xyz"),
            ("", "seed"),
        ];
        for (before, after) in cases {
            assert_eq!(apply_all(before, &diff(before, after)).unwrap(), after);
        }
    }
}
