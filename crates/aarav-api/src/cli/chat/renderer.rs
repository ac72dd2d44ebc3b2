//! Terminal rendering of assistant messages.
//!
//! Implements the fixed message contract: `**bold**` and `*italic*`
//! emphasis markers, literal newlines as line breaks, and a small set of
//! recognized symbolic glyphs that receive visual highlighting. Nothing
//! else in the text is interpreted as markup.
//!
//! The text is first parsed into spans (a pure step, tested directly),
//! then painted with console styles.

use console::Style;

/// Glyphs that get highlighted when they appear in a message.
const GLYPHS: [&str; 6] = ["\u{1F549}\u{FE0F}", "\u{1F64F}", "\u{1FAD4}", "\u{262A}\u{FE0F}", "\u{271D}\u{FE0F}", "\u{2638}\u{FE0F}"];

/// One rendered segment of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Glyph(String),
    LineBreak,
}

/// Split a message into spans.
///
/// `**...**` pairs become `Bold`, single `*...*` pairs become `Italic`,
/// `\n` becomes `LineBreak`, recognized glyphs become `Glyph`; everything
/// else is plain `Text`. Unpaired markers stay literal.
pub fn parse_spans(input: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut rest = input;

    let flush = |text: &mut String, spans: &mut Vec<Span>| {
        if !text.is_empty() {
            spans.push(Span::Text(std::mem::take(text)));
        }
    };

    'outer: while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('\n') {
            flush(&mut text, &mut spans);
            spans.push(Span::LineBreak);
            rest = after;
            continue;
        }

        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**") {
                if end > 0 {
                    flush(&mut text, &mut spans);
                    spans.push(Span::Bold(after[..end].to_string()));
                    rest = &after[end + 2..];
                    continue;
                }
            }
        }

        if let Some(after) = rest.strip_prefix('*') {
            if let Some(end) = after.find('*') {
                if end > 0 {
                    flush(&mut text, &mut spans);
                    spans.push(Span::Italic(after[..end].to_string()));
                    rest = &after[end + 1..];
                    continue;
                }
            }
        }

        for glyph in GLYPHS {
            if let Some(after) = rest.strip_prefix(glyph) {
                flush(&mut text, &mut spans);
                spans.push(Span::Glyph(glyph.to_string()));
                rest = after;
                continue 'outer;
            }
        }

        let ch = rest.chars().next().unwrap_or_default();
        text.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush(&mut text, &mut spans);
    spans
}

/// Render a message for the terminal.
pub fn render_message(input: &str) -> String {
    paint(&parse_spans(input), false)
}

/// Paint spans with console styles. `force` bypasses tty detection so
/// tests get deterministic escape sequences.
fn paint(spans: &[Span], force: bool) -> String {
    let styled = |style: Style| {
        if force {
            style.force_styling(true)
        } else {
            style
        }
    };
    let bold = styled(Style::new().bold());
    let italic = styled(Style::new().italic());
    let highlight = styled(Style::new().yellow().bold());

    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(s) => out.push_str(s),
            Span::Bold(s) => out.push_str(&bold.apply_to(s).to_string()),
            Span::Italic(s) => out.push_str(&italic.apply_to(s).to_string()),
            Span::Glyph(s) => out.push_str(&highlight.apply_to(s).to_string()),
            Span::LineBreak => out.push('\n'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_linebreak_and_text() {
        let spans = parse_spans("**hi** there\nfriend");
        assert_eq!(
            spans,
            vec![
                Span::Bold("hi".to_string()),
                Span::Text(" there".to_string()),
                Span::LineBreak,
                Span::Text("friend".to_string()),
            ]
        );
    }

    #[test]
    fn test_italic() {
        let spans = parse_spans("a *gentle* word");
        assert_eq!(
            spans,
            vec![
                Span::Text("a ".to_string()),
                Span::Italic("gentle".to_string()),
                Span::Text(" word".to_string()),
            ]
        );
    }

    #[test]
    fn test_glyph_highlighted_without_altering_surroundings() {
        let spans = parse_spans("Om \u{1F549}\u{FE0F} shanti");
        assert_eq!(
            spans,
            vec![
                Span::Text("Om ".to_string()),
                Span::Glyph("\u{1F549}\u{FE0F}".to_string()),
                Span::Text(" shanti".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_recognized_glyphs() {
        for glyph in GLYPHS {
            let spans = parse_spans(glyph);
            assert_eq!(spans, vec![Span::Glyph(glyph.to_string())]);
        }
    }

    #[test]
    fn test_unpaired_marker_stays_literal() {
        // No closing '*', so the marker stays literal.
        let spans = parse_spans("2 * 3 is six");
        assert_eq!(spans, vec![Span::Text("2 * 3 is six".to_string())]);
    }

    #[test]
    fn test_unrecognized_markup_not_interpreted() {
        let spans = parse_spans("<b>not html</b>");
        assert_eq!(spans, vec![Span::Text("<b>not html</b>".to_string())]);
    }

    #[test]
    fn test_painted_output_emphasizes_bold() {
        let out = paint(&parse_spans("**hi** there\nfriend"), true);
        // Bold escape wraps exactly "hi"; the rest is untouched.
        assert!(out.contains("\u{1b}[1mhi\u{1b}[0m"));
        assert!(out.contains(" there\nfriend"));
    }

    #[test]
    fn test_painted_glyph_wrapped_in_highlight() {
        let out = paint(&parse_spans("peace \u{1F64F} always"), true);
        assert!(out.starts_with("peace "));
        assert!(out.ends_with(" always"));
        assert!(out.contains("\u{1b}["));
        assert!(out.contains('\u{1F64F}'));
    }

    #[test]
    fn test_render_message_preserves_plain_text() {
        // Without forced styling in a non-tty test run, content survives.
        let out = render_message("hello world");
        assert!(out.contains("hello world"));
    }
}
