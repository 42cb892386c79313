//! Word-wrapping and page grouping for dialogue text.

/// Maximum characters per rendered dialogue line.
pub const MAX_LINE_CHARS: usize = 35;
/// Lines grouped into one dialogue page.
pub const LINES_PER_PAGE: usize = 3;

/// A group of up to [`LINES_PER_PAGE`] wrapped lines shown together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joined page text as handed to the reveal timer and the text label.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }

    fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

/// Wraps `text` to [`MAX_LINE_CHARS`]-wide lines and groups them into pages.
///
/// Explicit newlines are preserved verbatim. Wrapping prefers moving the word
/// in progress to the next line; when no space is recorded within reach, a
/// hard break is inserted at the width boundary instead. Empty input yields a
/// single page holding one empty line.
pub fn paginate(text: &str) -> Vec<Page> {
    let wrapped = wrap(text, MAX_LINE_CHARS);
    let lines: Vec<&str> = wrapped.split('\n').collect();

    let mut pages: Vec<Page> = lines
        .chunks(LINES_PER_PAGE)
        .map(|chunk| Page {
            lines: chunk.iter().map(|line| (*line).to_string()).collect(),
        })
        .collect();

    while pages.len() > 1 && pages.last().is_some_and(Page::is_blank) {
        pages.pop();
    }

    pages
}

/// Inserts line breaks so no line between two breaks exceeds `max_chars`.
fn wrap(text: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / max_chars.max(1));
    // Position of the most recent space pushed to `out`, as (chars, bytes).
    let mut last_space: Option<(usize, usize)> = None;
    let mut line_len = 0;
    let mut total = 0;

    for c in text.chars() {
        if c == '\n' {
            out.push('\n');
            total += 1;
            line_len = 0;
            continue;
        }

        if line_len >= max_chars {
            if c == ' ' {
                // The boundary lands on a space: break here instead of it.
                out.push('\n');
                total += 1;
                line_len = 0;
                continue;
            }

            match last_space {
                // Recorded space is close enough: retroactively turn it into
                // the line break and carry the partial word over.
                Some((char_pos, byte_pos)) if total - char_pos < max_chars => {
                    out.replace_range(byte_pos..byte_pos + 1, "\n");
                    out.push(c);
                    line_len = total - char_pos;
                    total += 1;
                }
                // No usable space in the current line: hard mid-word break.
                _ => {
                    out.push('\n');
                    out.push(c);
                    total += 2;
                    line_len = 1;
                }
            }
        } else {
            if c == ' ' {
                last_space = Some((total, out.len()));
            }
            out.push(c);
            line_len += 1;
            total += 1;
        }
    }

    out
}
