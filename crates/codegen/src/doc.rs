//! Javadoc to KDoc transformation.
//!
//! Inline reference tags are rewritten through an explicit tokenizer
//! over `{@tag ...}` forms rather than sequential pattern substitution,
//! so the qualified `{@link Foo#bar}` form can never be partially
//! consumed by the general `{@link Foo}` rewrite. Anything that does
//! not parse as a known tag is copied through verbatim.

/// Characters allowed in a javadoc reference target or label.
fn is_ref_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

/// Transforms raw Javadoc content into KDoc markup.
///
/// The input is the text between `/**` and `*/`, leaders intact. An
/// absent or blank comment yields the empty string; otherwise the
/// result is trimmed with a single trailing newline.
pub fn transform_doc(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let stripped = strip_leaders(raw);
    let html = stripped
        .replace("<em>", "*")
        .replace("</em>", "*")
        .replace("<p>", "");
    let mut out = rewrite_inline_tags(&html).trim().to_string();
    out.push('\n');
    out
}

/// Removes the `" * "`/`" *"` comment leader from each line.
fn strip_leaders(raw: &str) -> String {
    let lines: Vec<&str> = raw
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if let Some(rest) = trimmed.strip_prefix("* ") {
                rest
            } else if trimmed == "*" {
                ""
            } else {
                line
            }
        })
        .collect();
    lines.join("\n")
}

fn rewrite_inline_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find("{@") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match parse_tag(tail) {
            Some((consumed, rendered)) => {
                out.push_str(&rendered);
                rest = &tail[consumed..];
            }
            None => {
                out.push_str("{@");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parses one `{@tag ...}` token at the start of `s` (which begins with
/// `"{@"`). Returns the consumed byte length and the KDoc rendering, or
/// `None` when the token is not a recognized well-formed tag.
fn parse_tag(s: &str) -> Option<(usize, String)> {
    let mut scanner = Scanner::new(&s[2..]);
    let tag = scanner.take_while(|c| c.is_ascii_alphabetic());
    scanner.expect(' ')?;

    let rendered = match tag {
        "code" => {
            let target = scanner.take_while(is_ref_char);
            format!("`{}`", target)
        }
        "link" => {
            let target = scanner.take_while(is_ref_char).to_string();
            match scanner.accept('#') {
                true => {
                    let member = scanner.take_while(is_ref_char);
                    format!("[{}.{}]", target, member)
                }
                false => format!("[{}]", target),
            }
        }
        "linkplain" => {
            let target = scanner.take_while(is_ref_char).to_string();
            let member = if scanner.accept('#') {
                Some(scanner.take_while(is_ref_char).to_string())
            } else {
                None
            };
            scanner.expect(' ')?;
            let label = scanner.take_while(is_ref_char);
            match member {
                Some(member) => format!("[{}][{}.{}]", label, target, member),
                None => format!("[{}][{}]", label, target),
            }
        }
        _ => return None,
    };

    scanner.expect('}')?;
    Some((2 + scanner.consumed(), rendered))
}

/// Minimal cursor over the tag body.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = &self.input[self.pos..];
        let len = rest
            .char_indices()
            .find(|(_, c)| !pred(*c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn accept(&mut self, expected: char) -> bool {
        let rest = &self.input[self.pos..];
        if rest.starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Option<()> {
        self.accept(expected).then_some(())
    }

    fn consumed(&self) -> usize {
        self.pos
    }
}
