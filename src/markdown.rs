// SPDX-License-Identifier: MPL-2.0
//! Markdown conversion for changelog entry bodies.
//!
//! Content is authored by the site owner and is not sanitized. Two outputs
//! are produced from the same source:
//!
//! - [`to_html`]: HTML, as a browser host would inject it
//! - [`to_blocks`]: a flat block list the native view draws with plain
//!   text widgets

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Converts markdown to an HTML fragment.
#[must_use]
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// One drawable unit of an entry body. Inline formatting is flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    /// `depth` starts at 1 for a top-level list.
    ListItem {
        depth: usize,
        marker: String,
        text: String,
    },
    Code(String),
    Quote(String),
    Rule,
}

/// Converts markdown to a block list.
#[must_use]
pub fn to_blocks(markdown: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    for event in Parser::new_ext(markdown, options()) {
        builder.push(event);
    }
    builder.finish()
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    buffer: String,
    /// Next number for each open list; `None` for bullet lists.
    lists: Vec<Option<u64>>,
    /// Marker of the list item whose text is being collected.
    item: Option<String>,
    quote_depth: usize,
    table_cells: Vec<String>,
}

impl BlockBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::List(start)) => {
                self.flush_item();
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.flush_item();
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush_item();
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}.", n);
                        *n += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                self.item = Some(marker);
            }
            Event::End(TagEnd::Item) => self.flush_item(),
            Event::Start(Tag::Paragraph) => {
                if self.item.is_some() && !self.buffer.is_empty() {
                    self.buffer.push(' ');
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if self.item.is_none() {
                    let text = self.take_text();
                    if !text.is_empty() {
                        if self.quote_depth > 0 {
                            self.blocks.push(Block::Quote(text));
                        } else {
                            self.blocks.push(Block::Paragraph(text));
                        }
                    }
                }
            }
            Event::Start(Tag::Heading { .. }) => self.flush_item(),
            Event::End(TagEnd::Heading(level)) => {
                let text = self.take_text();
                self.blocks.push(Block::Heading {
                    level: level as u8,
                    text,
                });
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                self.flush_item();
                if let CodeBlockKind::Fenced(_) | CodeBlockKind::Indented = kind {
                    self.buffer.clear();
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                let code = std::mem::take(&mut self.buffer);
                self.blocks.push(Block::Code(code.trim_end().to_string()));
            }
            Event::Start(Tag::BlockQuote(_)) => self.quote_depth += 1,
            Event::End(TagEnd::BlockQuote(_)) => {
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            Event::End(TagEnd::TableCell) => {
                let cell = self.take_text();
                self.table_cells.push(cell);
            }
            Event::End(TagEnd::TableHead | TagEnd::TableRow) => {
                let row = std::mem::take(&mut self.table_cells).join(" | ");
                if !row.is_empty() {
                    self.blocks.push(Block::Paragraph(row));
                }
            }
            Event::Rule => {
                self.flush_item();
                self.blocks.push(Block::Rule);
            }
            Event::Text(text) | Event::Code(text) => self.buffer.push_str(&text),
            Event::SoftBreak => self.buffer.push(' '),
            Event::HardBreak => self.buffer.push('\n'),
            Event::TaskListMarker(done) => {
                self.buffer.push_str(if done { "☑ " } else { "☐ " });
            }
            _ => {}
        }
    }

    fn take_text(&mut self) -> String {
        std::mem::take(&mut self.buffer).trim().to_string()
    }

    fn flush_item(&mut self) {
        if let Some(marker) = self.item.take() {
            let text = self.take_text();
            if !text.is_empty() {
                self.blocks.push(Block::ListItem {
                    depth: self.lists.len(),
                    marker,
                    text,
                });
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_item();
        let rest = self.take_text();
        if !rest.is_empty() {
            self.blocks.push(Block::Paragraph(rest));
        }
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_list_render_to_html() {
        let html = to_html("# Hi\n- item");
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>item</li>"));
    }

    #[test]
    fn html_is_not_sanitized() {
        let html = to_html("<b>bold</b>");
        assert!(html.contains("<b>bold</b>"));
    }

    #[test]
    fn heading_and_list_become_blocks() {
        assert_eq!(
            to_blocks("# Hi\n- item"),
            vec![
                Block::Heading {
                    level: 1,
                    text: "Hi".into()
                },
                Block::ListItem {
                    depth: 1,
                    marker: "•".into(),
                    text: "item".into()
                },
            ]
        );
    }

    #[test]
    fn ordered_lists_are_numbered_from_start() {
        let blocks = to_blocks("3. three\n4. four");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem {
                    depth: 1,
                    marker: "3.".into(),
                    text: "three".into()
                },
                Block::ListItem {
                    depth: 1,
                    marker: "4.".into(),
                    text: "four".into()
                },
            ]
        );
    }

    #[test]
    fn nested_list_tracks_depth() {
        let blocks = to_blocks("- outer\n  - inner");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem {
                    depth: 1,
                    marker: "•".into(),
                    text: "outer".into()
                },
                Block::ListItem {
                    depth: 2,
                    marker: "•".into(),
                    text: "inner".into()
                },
            ]
        );
    }

    #[test]
    fn inline_formatting_is_flattened() {
        assert_eq!(
            to_blocks("Some **bold** and `code`."),
            vec![Block::Paragraph("Some bold and code.".into())]
        );
    }

    #[test]
    fn fenced_code_keeps_content() {
        assert_eq!(
            to_blocks("```\nlet x = 1;\n```"),
            vec![Block::Code("let x = 1;".into())]
        );
    }

    #[test]
    fn quote_and_rule() {
        assert_eq!(
            to_blocks("> note\n\n---"),
            vec![Block::Quote("note".into()), Block::Rule]
        );
    }

    #[test]
    fn task_list_markers() {
        let blocks = to_blocks("- [x] done\n- [ ] todo");
        assert!(matches!(&blocks[0], Block::ListItem { text, .. } if text == "☑ done"));
        assert!(matches!(&blocks[1], Block::ListItem { text, .. } if text == "☐ todo"));
    }

    #[test]
    fn empty_content_has_no_blocks() {
        assert!(to_blocks("").is_empty());
        assert_eq!(to_html(""), "");
    }
}
