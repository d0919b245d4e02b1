//! Lesson page renderer

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::{PageBlock, parse_page};
use crate::theme::Theme;

/// Render a markdown page to styled lines
pub fn render_page(markdown: &str, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    render_blocks(&parse_page(markdown), theme, width)
}

/// Render page blocks to styled lines
pub fn render_blocks(blocks: &[PageBlock], theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for block in blocks {
        match block {
            PageBlock::Heading { level, text } => render_heading(&mut lines, *level, text, theme),
            PageBlock::Paragraph(text) => {
                lines.push(Line::from(parse_inline_formatting(text, theme)));
                lines.push(Line::from(""));
            }
            PageBlock::Code { language, code } => {
                render_code_block(&mut lines, language.as_deref(), code, theme)
            }
            PageBlock::UnorderedList(items) => {
                for item in items {
                    let mut spans =
                        vec![Span::styled("  • ", Style::default().fg(theme.accent_secondary))];
                    spans.extend(parse_inline_formatting(item, theme));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::from(""));
            }
            PageBlock::OrderedList(items) => {
                for (i, item) in items.iter().enumerate() {
                    let mut spans = vec![Span::styled(
                        format!("  {}. ", i + 1),
                        Style::default().fg(theme.accent_secondary),
                    )];
                    spans.extend(parse_inline_formatting(item, theme));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::from(""));
            }
            PageBlock::Blockquote(text) => {
                for quote_line in text.lines() {
                    lines.push(Line::from(vec![
                        Span::styled("  │ ", Style::default().fg(theme.border)),
                        Span::styled(
                            quote_line.to_string(),
                            Style::default().fg(theme.quote).add_modifier(Modifier::ITALIC),
                        ),
                    ]));
                }
                lines.push(Line::from(""));
            }
            PageBlock::HorizontalRule => {
                lines.push(Line::from(Span::styled(
                    "─".repeat(width.max(1)),
                    Style::default().fg(theme.border),
                )));
                lines.push(Line::from(""));
            }
        }
    }

    // Drop the trailing spacer
    if lines.last().is_some_and(|l| l.width() == 0) {
        lines.pop();
    }
    lines
}

fn render_heading(lines: &mut Vec<Line<'static>>, level: u8, text: &str, theme: &Theme) {
    let style = match level {
        1 => Style::default()
            .fg(theme.accent_primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        3 => Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
    };

    // Headings keep inline code as plain heading text
    lines.push(Line::from(Span::styled(text.replace('`', ""), style)));
    lines.push(Line::from(""));
}

fn render_code_block(
    lines: &mut Vec<Line<'static>>,
    language: Option<&str>,
    code: &str,
    theme: &Theme,
) {
    if let Some(lang) = language {
        lines.push(Line::from(Span::styled(
            format!("  {}", lang),
            Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
        )));
    }
    let style = Style::default().fg(theme.code).bg(theme.bg_secondary);
    for code_line in code.lines() {
        lines.push(Line::from(Span::styled(format!("  {}", code_line), style)));
    }
    lines.push(Line::from(""));
}

/// Parse inline markdown formatting into styled spans
///
/// Handles `code`, **bold** and *italic*. Unclosed markers are kept as text.
fn parse_inline_formatting(text: &str, theme: &Theme) -> Vec<Span<'static>> {
    let plain = Style::default().fg(theme.fg_primary);
    let mut spans = Vec::new();
    let mut chars = text.chars().peekable();
    let mut current = String::new();

    while let Some(c) = chars.next() {
        match c {
            '`' => {
                let mut code = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '`' {
                        closed = true;
                        break;
                    }
                    code.push(next);
                }
                if closed {
                    flush(&mut current, &mut spans, plain);
                    spans.push(Span::styled(
                        code,
                        Style::default().fg(theme.code).bg(theme.bg_secondary),
                    ));
                } else {
                    current.push('`');
                    current.push_str(&code);
                }
            }
            '*' => {
                let is_double = chars.peek() == Some(&'*');
                if is_double {
                    chars.next();
                }

                let mut content = String::new();
                let mut closed = false;
                while let Some(next) = chars.next() {
                    if next == '*' {
                        if !is_double {
                            closed = true;
                            break;
                        }
                        if chars.peek() == Some(&'*') {
                            chars.next();
                            closed = true;
                            break;
                        }
                    }
                    content.push(next);
                }

                if closed {
                    flush(&mut current, &mut spans, plain);
                    let modifier = if is_double { Modifier::BOLD } else { Modifier::ITALIC };
                    spans.push(Span::styled(content, plain.add_modifier(modifier)));
                } else {
                    current.push_str(if is_double { "**" } else { "*" });
                    current.push_str(&content);
                }
            }
            _ => current.push(c),
        }
    }

    flush(&mut current, &mut spans, plain);
    spans
}

fn flush(current: &mut String, spans: &mut Vec<Span<'static>>, style: Style) {
    if !current.is_empty() {
        spans.push(Span::styled(std::mem::take(current), style));
    }
}
