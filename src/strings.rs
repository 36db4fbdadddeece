// String demo: indexing by character position (from the front and from the
// end), concatenation, and suffix slicing. Positions count chars, not bytes.

fn char_at(s: &str, i: usize) -> Option<char> {
    s.chars().nth(i)
}

// i counts from the end, so char_from_end(s, 1) is the last char
fn char_from_end(s: &str, i: usize) -> Option<char> {
    let len = s.chars().count();
    if i == 0 || i > len {
        return None;
    }
    s.chars().nth(len - i)
}

// everything from char position i to the end
fn suffix(s: &str, i: usize) -> &str {
    match s.char_indices().nth(i) {
        Some((pos, _)) => &s[pos..],
        None => "",
    }
}

pub(crate) fn main() {
    let s = "Python";
    if let Some(c) = char_at(s, 2) {
        println!("{}", c);
    }
    if let Some(c) = char_from_end(s, 4) {
        println!("{}", c);
    }
    // strings can be concatenated
    let s = format!("hello {}", s);
    println!("{}", s);
    // and portions of them selected
    println!("{}", suffix(&s, 5));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_from_the_front() {
        assert_eq!(char_at("Python", 2), Some('t'));
        assert_eq!(char_at("Python", 0), Some('P'));
        assert_eq!(char_at("Python", 6), None);
    }

    #[test]
    fn indexing_from_the_end() {
        assert_eq!(char_from_end("Python", 4), Some('t'));
        assert_eq!(char_from_end("Python", 1), Some('n'));
        assert_eq!(char_from_end("Python", 6), Some('P'));
        assert_eq!(char_from_end("Python", 7), None);
        assert_eq!(char_from_end("Python", 0), None);
    }

    #[test]
    fn suffix_slicing() {
        assert_eq!(suffix("hello Python", 5), " Python");
        assert_eq!(suffix("hello", 0), "hello");
        assert_eq!(suffix("hello", 5), "");
        assert_eq!(suffix("hello", 99), "");
    }

    #[test]
    fn positions_count_chars_not_bytes() {
        assert_eq!(char_at("héllo", 1), Some('é'));
        assert_eq!(suffix("héllo", 2), "llo");
        assert_eq!(char_from_end("héllo", 5), Some('h'));
    }
}
