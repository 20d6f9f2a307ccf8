//! Markdown rendering for TUI output
//!
//! Converts markdown text to styled ratatui Lines, hard-wrapped to a fixed
//! width. Rendering is deterministic: the same text and width always give
//! the same lines.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

use crate::tui::theme::Theme;

/// Reasons markdown could not be turned into terminal lines
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("wrap width must be at least 1 column")]
    ZeroWidth,

    /// Raw control bytes would be written straight to the terminal
    #[error("content contains control character U+{0:04X}")]
    ControlCharacter(u32),
}

/// Markdown to styled-lines renderer with a fixed wrap width
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    theme: Theme,
    wrap_width: usize,
}

impl MarkdownRenderer {
    pub fn new(theme: Theme, wrap_width: usize) -> Result<Self, RenderError> {
        if wrap_width == 0 {
            return Err(RenderError::ZeroWidth);
        }
        Ok(Self { theme, wrap_width })
    }

    /// Render markdown text to styled lines
    ///
    /// Supports headings, **bold**, *italic*, `inline code`, code blocks,
    /// bullet and numbered lists, block quotes, links and rules. HTML is
    /// kept as plain text.
    pub fn render(&self, text: &str) -> Result<Vec<Line<'static>>, RenderError> {
        if let Some(c) = text
            .chars()
            .find(|c| c.is_control() && !matches!(c, '\n' | '\t' | '\r'))
        {
            return Err(RenderError::ControlCharacter(c as u32));
        }

        let lines = render_lines(text, &self.theme, self.wrap_width);
        Ok(wrap_lines(lines, self.wrap_width))
    }
}

fn render_lines(text: &str, theme: &Theme, max_width: usize) -> Vec<Line<'static>> {
    let parser = Parser::new(text);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();
    let mut style_stack: Vec<Style> = vec![Style::default().fg(theme.text_primary)];
    // One entry per open list: next number for ordered lists
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut quote_depth = 0usize;
    let mut in_code_block = false;
    let mut link: Option<(String, String)> = None;

    let quote_prefix = |depth: usize| -> Option<Span<'static>> {
        (depth > 0).then(|| Span::styled("│ ".repeat(depth), Style::default().fg(theme.quote)))
    };

    let flush = |spans: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>, depth: usize| {
        if !spans.is_empty() {
            let mut line_spans = Vec::with_capacity(spans.len() + 1);
            line_spans.extend(quote_prefix(depth));
            line_spans.append(spans);
            lines.push(Line::from(line_spans));
        }
    };

    for event in parser {
        match event {
            Event::Text(text) => {
                let text = text.replace('\t', "    ");
                if in_code_block {
                    for line in text.lines() {
                        let mut spans = Vec::new();
                        spans.extend(quote_prefix(quote_depth));
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(
                            line.to_string(),
                            Style::default().fg(theme.code_fg).bg(theme.bg_code),
                        ));
                        lines.push(Line::from(spans));
                    }
                } else {
                    if let Some((_, ref mut link_text)) = link {
                        link_text.push_str(&text);
                    }
                    let style = style_stack.last().copied().unwrap_or_default();
                    current_spans.push(Span::styled(text, style));
                }
            }
            Event::Code(code) => {
                current_spans.push(Span::styled(
                    code.to_string(),
                    Style::default().fg(theme.code_fg).bg(theme.bg_code),
                ));
            }
            Event::Start(Tag::Strong) => {
                let current_style = style_stack.last().copied().unwrap_or_default();
                style_stack.push(current_style.add_modifier(Modifier::BOLD));
            }
            Event::Start(Tag::Emphasis) => {
                let current_style = style_stack.last().copied().unwrap_or_default();
                style_stack.push(current_style.add_modifier(Modifier::ITALIC));
            }
            Event::Start(Tag::Strikethrough) => {
                let current_style = style_stack.last().copied().unwrap_or_default();
                style_stack.push(current_style.add_modifier(Modifier::CROSSED_OUT));
            }
            Event::End(TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough) => {
                style_stack.pop();
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                flush(&mut current_spans, &mut lines, quote_depth);
                in_code_block = true;
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                if !lang.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", lang),
                        Style::default().fg(theme.text_muted),
                    )));
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                lines.push(Line::from(""));
            }
            Event::Start(Tag::List(start)) => {
                flush(&mut current_spans, &mut lines, quote_depth);
                list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                flush(&mut current_spans, &mut lines, quote_depth);
                list_stack.pop();
                if list_stack.is_empty() {
                    lines.push(Line::from(""));
                }
            }
            Event::Start(Tag::Item) => {
                flush(&mut current_spans, &mut lines, quote_depth);
                let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                let marker = match list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}{}. ", indent, n);
                        *n += 1;
                        marker
                    }
                    _ => format!("{}• ", indent),
                };
                current_spans.push(Span::styled(marker, Style::default().fg(theme.heading)));
            }
            Event::End(TagEnd::Item) => {
                flush(&mut current_spans, &mut lines, quote_depth);
            }
            Event::Start(Tag::BlockQuote) => {
                flush(&mut current_spans, &mut lines, quote_depth);
                quote_depth += 1;
                let current_style = style_stack.last().copied().unwrap_or_default();
                style_stack.push(current_style.fg(theme.quote).add_modifier(Modifier::ITALIC));
            }
            Event::End(TagEnd::BlockQuote) => {
                flush(&mut current_spans, &mut lines, quote_depth);
                quote_depth = quote_depth.saturating_sub(1);
                style_stack.pop();
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                link = Some((dest_url.to_string(), String::new()));
                let current_style = style_stack.last().copied().unwrap_or_default();
                style_stack.push(
                    current_style
                        .fg(theme.link)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            Event::End(TagEnd::Link) => {
                style_stack.pop();
                if let Some((url, text)) = link.take() {
                    if !url.is_empty() && url != text {
                        current_spans.push(Span::styled(
                            format!(" ({})", url),
                            Style::default().fg(theme.text_muted),
                        ));
                    }
                }
            }
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut current_spans, &mut lines, quote_depth);
                let current_style = style_stack.last().copied().unwrap_or_default();
                let mut style = current_style.fg(theme.heading).add_modifier(Modifier::BOLD);
                if level == HeadingLevel::H1 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                style_stack.push(style);
            }
            Event::End(TagEnd::Heading(_)) => {
                style_stack.pop();
                flush(&mut current_spans, &mut lines, quote_depth);
                lines.push(Line::from(""));
            }
            Event::Rule => {
                flush(&mut current_spans, &mut lines, quote_depth);
                lines.push(Line::from(Span::styled(
                    "─".repeat(max_width.min(40)),
                    Style::default().fg(theme.text_muted),
                )));
                lines.push(Line::from(""));
            }
            Event::SoftBreak => {
                current_spans.push(Span::raw(" "));
            }
            Event::HardBreak => {
                flush(&mut current_spans, &mut lines, quote_depth);
            }
            Event::End(TagEnd::Paragraph) => {
                flush(&mut current_spans, &mut lines, quote_depth);
                // Tight list items end with their own flush
                if list_stack.is_empty() {
                    lines.push(Line::from(""));
                }
            }
            Event::InlineHtml(html) => {
                let style = style_stack.last().copied().unwrap_or_default();
                current_spans.push(Span::styled(html.to_string(), style));
            }
            Event::Html(html) => {
                let style = style_stack.last().copied().unwrap_or_default();
                for line in html.lines() {
                    current_spans.push(Span::styled(line.to_string(), style));
                    flush(&mut current_spans, &mut lines, quote_depth);
                }
            }
            _ => {}
        }
    }

    flush(&mut current_spans, &mut lines, quote_depth);

    // Remove trailing empty lines
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }

    lines
}

/// Hard-wrap styled lines to `max_width` display columns, breaking at
/// spaces where possible.
fn wrap_lines(lines: Vec<Line<'static>>, max_width: usize) -> Vec<Line<'static>> {
    let mut wrapped: Vec<Line<'static>> = Vec::new();

    for line in lines {
        if line.spans.is_empty() {
            wrapped.push(Line::from(""));
            continue;
        }

        let mut current: Vec<(String, Style)> = Vec::new();
        let mut current_width = 0usize;

        for span in line.spans {
            let style = span.style;
            for word in span.content.split_inclusive(' ') {
                let word_width = str_width(word);
                let visible_width = str_width(word.trim_end_matches(' '));

                if current_width > 0 && current_width + visible_width > max_width {
                    wrapped.push(to_line(std::mem::take(&mut current)));
                    current_width = 0;
                    if word.trim().is_empty() {
                        continue;
                    }
                }

                if word_width <= max_width.saturating_sub(current_width) {
                    push_piece(&mut current, word, style);
                    current_width += word_width;
                    continue;
                }

                // Word longer than the remaining room: split by character
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > max_width && current_width > 0 {
                        wrapped.push(to_line(std::mem::take(&mut current)));
                        current_width = 0;
                        if ch == ' ' {
                            continue;
                        }
                    }
                    let mut buf = [0u8; 4];
                    push_piece(&mut current, ch.encode_utf8(&mut buf), style);
                    current_width += ch_width;
                }
            }
        }

        wrapped.push(to_line(current));
    }

    wrapped
}

fn str_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Append text, merging with the previous piece when the style matches
fn push_piece(pieces: &mut Vec<(String, Style)>, text: &str, style: Style) {
    match pieces.last_mut() {
        Some((last, last_style)) if *last_style == style => last.push_str(text),
        _ => pieces.push((text.to_string(), style)),
    }
}

fn to_line(pieces: Vec<(String, Style)>) -> Line<'static> {
    Line::from(
        pieces
            .into_iter()
            .map(|(text, style)| Span::styled(text, style))
            .collect::<Vec<_>>(),
    )
}

/// Unformatted text split on newlines and wrapped like rendered markdown.
/// Control characters are dropped since the text may come from a remote body.
pub fn plain_lines(text: &str, style: Style, max_width: usize) -> Vec<Line<'static>> {
    let lines = text
        .lines()
        .map(|line| {
            let clean: String = line
                .chars()
                .map(|c| if c == '\t' { ' ' } else { c })
                .filter(|c| !c.is_control())
                .collect();
            Line::from(Span::styled(clean, style))
        })
        .collect();

    if max_width == 0 {
        lines
    } else {
        wrap_lines(lines, max_width)
    }
}

/// Flatten rendered lines to plain text, one line per row
pub fn lines_to_plain(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
