//! Byte-bounded content helpers.

use bytes::Bytes;

/// Bound `content` to at most `size` bytes, preferring a newline-aligned
/// cut point.
///
/// Scans backward from `size - 1` over at most `max_scan` bytes; the cut
/// lands immediately after the rightmost newline in that window. When the
/// window holds no newline, the cut is at exactly `size`. Content that
/// already fits is returned unchanged.
pub fn truncate_to_newline(content: Bytes, size: usize, max_scan: usize) -> Bytes {
    if content.len() <= size {
        return content;
    }
    let floor = size.saturating_sub(max_scan);
    for i in (floor..size).rev() {
        if content[i] == b'\n' {
            return content.slice(..i + 1);
        }
    }
    content.slice(..size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitting_content_is_unchanged() {
        let content = Bytes::from_static(b"short\ntext");
        assert_eq!(
            truncate_to_newline(content.clone(), 100, 10),
            content
        );
        let exact = Bytes::from_static(b"0123456789");
        assert_eq!(truncate_to_newline(exact.clone(), 10, 4), exact);
    }

    #[test]
    fn cuts_after_rightmost_newline_in_window() {
        let content = Bytes::from_static(b"aaaa\nbb\nccccXXXX");
        // size 12, window covers both newlines; cut lands after the later one
        assert_eq!(
            truncate_to_newline(content, 12, 12),
            Bytes::from_static(b"aaaa\nbb\n")
        );
    }

    #[test]
    fn newline_outside_window_is_ignored() {
        let content = Bytes::from_static(b"a\nbbbbbbbbbbXXXX");
        // newline at index 1, window [10, 11] only
        assert_eq!(
            truncate_to_newline(content, 12, 2),
            Bytes::from_static(b"a\nbbbbbbbbbb")
        );
    }

    #[test]
    fn no_newline_cuts_at_exact_size() {
        let content = Bytes::from_static(b"abcdefghijklmnop");
        assert_eq!(
            truncate_to_newline(content, 8, 4),
            Bytes::from_static(b"abcdefgh")
        );
    }

    #[test]
    fn scan_window_clamps_at_start() {
        // max_scan larger than size must not underflow
        let content = Bytes::from_static(b"abc\ndefgh");
        assert_eq!(
            truncate_to_newline(content, 6, 100),
            Bytes::from_static(b"abc\n")
        );
    }
}
