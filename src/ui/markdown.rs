//! Markdown rendering for the long-form pages
//!
//! Docs, security brief and legal copy live as Markdown under `content/` and
//! are rendered to HTML with pulldown-cmark. Headings accept `{#anchor}`
//! ids so other pages can deep link into a section.

use leptos::prelude::*;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render markdown content as HTML
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: &'static str,
) -> impl IntoView {
    let html = parse_markdown(content);

    view! { <div class="prose" inner_html=html/> }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Links to other sites open in a new tab; site links and anchors do not
fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Parse markdown string to HTML
pub fn parse_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();

    let mut in_code_block = false;
    let mut code_block_content = String::new();
    let mut code_language = String::new();
    let mut in_table_head = false;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html_output.push_str("<p>"),
                Tag::Heading { level, id, .. } => {
                    let tag = heading_tag(level);
                    match id {
                        Some(id) => html_output
                            .push_str(&format!("<{} id=\"{}\">", tag, escape_html(&id))),
                        None => html_output.push_str(&format!("<{}>", tag)),
                    }
                }
                Tag::BlockQuote(_) => html_output.push_str("<blockquote>"),
                Tag::CodeBlock(kind) => {
                    in_code_block = true;
                    code_block_content.clear();
                    code_language = match kind {
                        CodeBlockKind::Fenced(lang) => lang.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                }
                Tag::List(Some(_)) => html_output.push_str("<ol>"),
                Tag::List(None) => html_output.push_str("<ul>"),
                Tag::Item => html_output.push_str("<li>"),
                Tag::Emphasis => html_output.push_str("<em>"),
                Tag::Strong => html_output.push_str("<strong>"),
                Tag::Strikethrough => html_output.push_str("<del>"),
                Tag::Link { dest_url, .. } => {
                    let target = if is_external(&dest_url) {
                        " target=\"_blank\" rel=\"noopener noreferrer\""
                    } else {
                        ""
                    };
                    html_output.push_str(&format!(
                        "<a href=\"{}\"{}>",
                        escape_html(&dest_url),
                        target
                    ));
                }
                Tag::Table(_) => html_output.push_str("<div class=\"table-scroll\"><table>"),
                Tag::TableHead => {
                    in_table_head = true;
                    html_output.push_str("<thead><tr>");
                }
                Tag::TableRow => html_output.push_str("<tr>"),
                Tag::TableCell => {
                    html_output.push_str(if in_table_head { "<th>" } else { "<td>" })
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => html_output.push_str("</p>"),
                TagEnd::Heading(level) => {
                    html_output.push_str(&format!("</{}>", heading_tag(level)));
                }
                TagEnd::BlockQuote(_) => html_output.push_str("</blockquote>"),
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    let lang_class = if !code_language.is_empty() {
                        format!(" class=\"language-{}\"", escape_html(&code_language))
                    } else {
                        String::new()
                    };
                    html_output.push_str(&format!(
                        "<pre class=\"code-block\"><code{}>{}</code></pre>",
                        lang_class,
                        escape_html(&code_block_content)
                    ));
                }
                TagEnd::List(true) => html_output.push_str("</ol>"),
                TagEnd::List(false) => html_output.push_str("</ul>"),
                TagEnd::Item => html_output.push_str("</li>"),
                TagEnd::Emphasis => html_output.push_str("</em>"),
                TagEnd::Strong => html_output.push_str("</strong>"),
                TagEnd::Strikethrough => html_output.push_str("</del>"),
                TagEnd::Link => html_output.push_str("</a>"),
                TagEnd::Table => html_output.push_str("</tbody></table></div>"),
                TagEnd::TableHead => {
                    in_table_head = false;
                    html_output.push_str("</tr></thead><tbody>");
                }
                TagEnd::TableRow => html_output.push_str("</tr>"),
                TagEnd::TableCell => {
                    html_output.push_str(if in_table_head { "</th>" } else { "</td>" })
                }
                _ => {}
            },
            Event::Text(text) => {
                if in_code_block {
                    code_block_content.push_str(&text);
                } else {
                    html_output.push_str(&escape_html(&text));
                }
            }
            Event::Code(code) => {
                html_output.push_str(&format!("<code>{}</code>", escape_html(&code)));
            }
            // Content is first party, but raw HTML is still shown as text
            Event::Html(html) | Event::InlineHtml(html) => {
                html_output.push_str(&escape_html(&html));
            }
            Event::SoftBreak => html_output.push(' '),
            Event::HardBreak => html_output.push_str("<br />"),
            Event::Rule => html_output.push_str("<hr />"),
            _ => {}
        }
    }

    html_output
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        let html = parse_markdown("Approve once.");
        assert_eq!(html, "<p>Approve once.</p>");
    }

    #[test]
    fn test_heading_with_anchor() {
        let html = parse_markdown("## Declare a policy {#policy}");
        assert!(html.contains("<h2 id=\"policy\">"));
        assert!(html.contains("Declare a policy</h2>"));
    }

    #[test]
    fn test_heading_without_anchor() {
        let html = parse_markdown("### FAQ");
        assert_eq!(html, "<h3>FAQ</h3>");
    }

    #[test]
    fn test_code_block_is_escaped() {
        let html = parse_markdown("```ts\nif (a < b) throw new Error(\"x\");\n```");
        assert!(html.contains("<pre class=\"code-block\"><code class=\"language-ts\">"));
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("&quot;x&quot;"));
    }

    #[test]
    fn test_internal_link_stays_in_tab() {
        let html = parse_markdown("[Contact](/contact?topic=security)");
        assert!(html.contains("<a href=\"/contact?topic=security\">"));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = parse_markdown("[OTel](https://opentelemetry.io)");
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn test_lists() {
        let html = parse_markdown("- Item 1\n- Item 2\n\n1. First\n2. Second");
        assert!(html.contains("<ul><li>Item 1</li><li>Item 2</li></ul>"));
        assert!(html.contains("<ol><li>First</li><li>Second</li></ol>"));
    }

    #[test]
    fn test_table_header_cells() {
        let html = parse_markdown("| Plan | Seats |\n|---|---|\n| Build | 1 |");
        assert!(html.contains("<thead><tr><th>Plan</th><th>Seats</th></tr></thead>"));
        assert!(html.contains("<tbody><tr><td>Build</td><td>1</td></tr></tbody>"));
    }

    #[test]
    fn test_raw_html_is_not_injected() {
        let html = parse_markdown("<script>alert('xss')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">'"), "&lt;a href=&quot;x&quot;&gt;&#39;");
    }
}
