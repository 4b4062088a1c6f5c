//! Markdown stripping for prose analysis.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. Code blocks, headings, inline code, image alt text, and YAML
//! frontmatter are not prose and would skew every metric, so they are
//! removed. Paragraph boundaries come out as blank lines so paragraph
//! segmentation still works on the stripped text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose.
///
/// Keeps link text, emphasis text, blockquote text, and list item text;
/// drops code (fenced, indented, and inline), headings, HTML, image alt
/// text, and frontmatter. Paragraphs and list items are separated by blank
/// lines in the output.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut prose = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            // Non-prose containers: skip everything inside
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                prose.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                prose.push(' ');
            }

            // Block boundaries become blank lines so paragraph counts survive
            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                prose.push_str("\n\n");
            }
            Event::End(TagEnd::TableCell) if skip_depth == 0 => {
                prose.push(' ');
            }

            // Inline code is never prose
            Event::Code(_) => {}

            _ => {}
        }
    }

    prose.trim_end().to_string()
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text;
    }

    let Some(close) = trimmed[3..].find("\n---") else {
        return text;
    };

    // Skip past the closing `---` and its newline
    let rest = &trimmed[3 + close + 4..];
    rest.strip_prefix('\n').unwrap_or(rest)
}
