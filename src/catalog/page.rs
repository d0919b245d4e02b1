//! Markdown parsing for lesson pages
//!
//! Each lesson page is a markdown string. It is flattened into a short list of
//! blocks; inline `code`, **bold** and *italic* markers are kept in the text
//! so the renderer can style them.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A block of content within a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBlock {
    /// A heading (level 1-6)
    Heading { level: u8, text: String },
    /// A paragraph of text
    Paragraph(String),
    /// A code block with optional language annotation
    Code { language: Option<String>, code: String },
    /// A bulleted list
    UnorderedList(Vec<String>),
    /// A numbered list
    OrderedList(Vec<String>),
    /// A blockquote
    Blockquote(String),
    /// A horizontal rule
    HorizontalRule,
}

/// Parse a markdown page into blocks
// skipcq: RS-R1000 - Parser functions inherently have high cyclomatic complexity
#[allow(clippy::cognitive_complexity)]
pub fn parse_page(markdown: &str) -> Vec<PageBlock> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);
    let mut blocks = Vec::new();

    let mut current_text = String::new();
    let mut heading_level: Option<u8> = None;

    let mut in_code_block = false;
    let mut code_language: Option<String> = None;
    let mut code_content = String::new();

    let mut in_list = false;
    let mut list_ordered = false;
    let mut list_items: Vec<String> = Vec::new();
    let mut current_item = String::new();

    let mut in_blockquote = false;
    let mut quote_content = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush_paragraph(&mut current_text, &mut blocks);
                heading_level = Some(heading_level_to_u8(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(level) = heading_level.take() {
                    let text = std::mem::take(&mut current_text).trim().to_string();
                    if !text.is_empty() {
                        blocks.push(PageBlock::Heading { level, text });
                    }
                }
            }

            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                if in_blockquote {
                    if !quote_content.is_empty() {
                        quote_content.push('\n');
                    }
                    quote_content.push_str(current_text.trim());
                    current_text.clear();
                } else if in_list {
                    current_item.push_str(&current_text);
                    current_text.clear();
                } else {
                    flush_paragraph(&mut current_text, &mut blocks);
                }
            }

            Event::Start(Tag::CodeBlock(kind)) => {
                flush_paragraph(&mut current_text, &mut blocks);
                in_code_block = true;
                code_language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                let code = std::mem::take(&mut code_content).trim_end().to_string();
                blocks.push(PageBlock::Code { language: code_language.take(), code });
            }

            Event::Start(Tag::List(first_item)) => {
                flush_paragraph(&mut current_text, &mut blocks);
                in_list = true;
                list_ordered = first_item.is_some();
                list_items.clear();
            }
            Event::End(TagEnd::List(_)) => {
                in_list = false;
                let items = std::mem::take(&mut list_items);
                if !items.is_empty() {
                    if list_ordered {
                        blocks.push(PageBlock::OrderedList(items));
                    } else {
                        blocks.push(PageBlock::UnorderedList(items));
                    }
                }
            }
            Event::Start(Tag::Item) => current_item.clear(),
            Event::End(TagEnd::Item) => {
                // Tight lists emit item text without a wrapping paragraph
                current_item.push_str(&current_text);
                current_text.clear();
                let item = std::mem::take(&mut current_item).trim().to_string();
                if !item.is_empty() {
                    list_items.push(item);
                }
            }

            Event::Start(Tag::BlockQuote(_)) => {
                flush_paragraph(&mut current_text, &mut blocks);
                in_blockquote = true;
                quote_content.clear();
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                in_blockquote = false;
                let text = std::mem::take(&mut quote_content);
                if !text.is_empty() {
                    blocks.push(PageBlock::Blockquote(text));
                }
            }

            Event::Rule => {
                flush_paragraph(&mut current_text, &mut blocks);
                blocks.push(PageBlock::HorizontalRule);
            }

            Event::Text(text) => {
                if in_code_block {
                    code_content.push_str(&text);
                } else {
                    current_text.push_str(&text);
                }
            }
            Event::Code(code) => {
                current_text.push('`');
                current_text.push_str(&code);
                current_text.push('`');
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_code_block {
                    code_content.push('\n');
                } else {
                    current_text.push(' ');
                }
            }

            Event::Start(Tag::Strong) | Event::End(TagEnd::Strong) => current_text.push_str("**"),
            Event::Start(Tag::Emphasis) | Event::End(TagEnd::Emphasis) => current_text.push('*'),

            // Everything else contributes text only
            _ => {}
        }
    }

    flush_paragraph(&mut current_text, &mut blocks);
    blocks
}

fn flush_paragraph(text: &mut String, blocks: &mut Vec<PageBlock>) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        blocks.push(PageBlock::Paragraph(trimmed.to_string()));
    }
    text.clear();
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
