use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard-wraps `s` at `width` display columns, splitting anywhere.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut line_width = 0;
    for c in s.chars() {
        if c == '\n' {
            result.push(c);
            line_width = 0;
            continue;
        }
        let char_width = c.width().unwrap_or(0);
        if line_width + char_width > width && line_width > 0 {
            result.push('\n');
            line_width = 0;
        }
        result.push(c);
        line_width += char_width;
    }
    result
}

/// Wraps prose on whitespace. Words wider than `width` fall back to
/// [`wrap_text`].
pub fn wrap_words(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();
    for paragraph in s.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if word_width > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let mut pieces: Vec<String> = wrap_text(word, width).lines().map(String::from).collect();
                line = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                continue;
            }

            let needed = if line.is_empty() {
                word_width
            } else {
                line.width() + 1 + word_width
            };
            if needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

/// Cuts a single line to `width` columns, ending with `…` when shortened.
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        result.push(c);
        used += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 13), "hello, world!");
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 4), "hell\no, w\norld\n!");
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        assert_eq!(wrap_text("こんにちは、世界！", 7), "こんに\nちは、\n世界！");
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello, world!", 0), "");
    }

    #[test]
    fn test_wrap_words_breaks_on_spaces() {
        assert_eq!(
            wrap_words("a thief who steals corporate secrets", 12),
            "a thief who\nsteals\ncorporate\nsecrets"
        );
    }

    #[test]
    fn test_wrap_words_splits_long_words() {
        assert_eq!(wrap_words("supercalifragilistic x", 8), "supercal\nifragili\nstic x");
    }

    #[test]
    fn test_wrap_words_keeps_paragraphs() {
        assert_eq!(wrap_words("one two\nthree", 20), "one two\nthree");
    }

    #[test]
    fn test_truncate_text_truncate() {
        assert_eq!(truncate_text("foo\nbar\nbaz", 2), "foo\n...");
        assert_eq!(truncate_text("foo\nbar", 1), "...");
        assert_eq!(truncate_text("foo\nbar\nbaz", 3), "foo\nbar\nbaz");
        assert_eq!(truncate_text("foo\nbar\nbaz", 0), "");
    }

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("Inception", 20), "Inception");
        assert_eq!(ellipsize("Inception", 5), "Ince…");
        assert_eq!(ellipsize("Inception", 0), "");
        assert_eq!(ellipsize("世界世界", 5), "世界…");
    }
}
