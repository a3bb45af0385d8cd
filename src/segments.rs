//! Segment-join routines shared by the path and the fragment path.
//!
//! Both fields follow the same `/`-delimited convention, so the split,
//! append, prepend, and rebuild algorithms live here once and are
//! parameterized by whichever field the caller hands in.

/// Splits a field on `/`, discarding the artifact empty leading element
/// produced by a leading separator. An empty field has no segments.
pub(crate) fn split_segments(field: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = field.split('/').collect();
    if segments.first().is_some_and(|s| s.is_empty()) {
        segments.remove(0);
    }
    segments
}

/// Joins `base` and `segment` with exactly one separator, stripping one
/// trailing separator from `base` and one leading separator from `segment`.
pub(crate) fn append_segment(base: &str, segment: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let segment = segment.strip_prefix('/').unwrap_or(segment);
    format!("{base}/{segment}")
}

/// Joins `segment` before `base` with exactly one separator in between.
///
/// `segment` ends up with exactly one leading and no trailing separator;
/// `base` loses one leading separator.
pub(crate) fn prepend_segment(base: &str, segment: &str) -> String {
    let base = base.strip_prefix('/').unwrap_or(base);
    let segment = segment.strip_prefix('/').unwrap_or(segment);
    let segment = segment.strip_suffix('/').unwrap_or(segment);
    format!("/{segment}/{base}")
}

/// Rebuilds a field as the separator-prefixed join of every segment.
/// An empty slice rebuilds to an empty field.
pub(crate) fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut field = String::new();
    for segment in segments {
        field.push('/');
        field.push_str(segment.as_ref());
    }
    field
}

/// Replaces the segment at `index` and rebuilds the field, or returns
/// `None` when `index` is out of range so the caller can skip the write.
pub(crate) fn replace_segment(field: &str, text: &str, index: usize) -> Option<String> {
    let mut segments = split_segments(field);
    if index >= segments.len() {
        return None;
    }
    segments[index] = text;
    Some(join_segments(&segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_leading_empty() {
        assert_eq!(split_segments("/a/b"), vec!["a", "b"]);
    }

    #[test]
    fn split_keeps_trailing_empty() {
        assert_eq!(split_segments("/a/b/"), vec!["a", "b", ""]);
    }

    #[test]
    fn split_without_leading_separator() {
        assert_eq!(split_segments("a/b"), vec!["a", "b"]);
    }

    #[test]
    fn split_empty_field() {
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn append_normalizes_one_separator() {
        assert_eq!(append_segment("/a/b/", "/c"), "/a/b/c");
        assert_eq!(append_segment("/a/b", "c"), "/a/b/c");
    }

    #[test]
    fn append_strips_only_one_separator() {
        assert_eq!(append_segment("/a/b//", "c"), "/a/b//c");
    }

    #[test]
    fn append_to_empty_base() {
        assert_eq!(append_segment("", "c"), "/c");
    }

    #[test]
    fn prepend_normalizes_one_separator() {
        assert_eq!(prepend_segment("/a/b", "/x/"), "/x/a/b");
        assert_eq!(prepend_segment("a/b", "x"), "/x/a/b");
    }

    #[test]
    fn join_prefixes_every_segment() {
        assert_eq!(join_segments(&["a", "b", "c"]), "/a/b/c");
    }

    #[test]
    fn join_empty_list() {
        assert_eq!(join_segments::<&str>(&[]), "");
    }

    #[test]
    fn replace_in_range() {
        assert_eq!(replace_segment("/a/b/c", "x", 1), Some("/a/x/c".to_string()));
    }

    #[test]
    fn replace_out_of_range_is_none() {
        assert_eq!(replace_segment("/a/b", "x", 2), None);
    }

    #[test]
    fn replace_preserves_trailing_empty() {
        assert_eq!(replace_segment("/a/b/", "x", 0), Some("/x/b/".to_string()));
    }
}
