//! HTML assembly for pages and the navigation index. Templates are static
//! strings with `{placeholder}` slots filled by plain string replacement;
//! syntax highlighting is left to highlight.js in the browser, the generator
//! only tags code blocks with their language.

use crate::models::section::Section;
use crate::render::markdown;

pub const STYLESHEET_NAME: &str = "marginalia.css";

const HIGHLIGHT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css";
const HIGHLIGHT_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="{root}marginalia.css">
  <link rel="stylesheet" href="{highlight_css}">
</head>
<body>
  <div class="container">
    {nav}
    <table class="sections">
      <tbody>
{rows}      </tbody>
    </table>
  </div>
  <script src="{highlight_js}"></script>
  <script>hljs.highlightAll();</script>
</body>
</html>
"#;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="marginalia.css">
</head>
<body>
  <div class="container index">
    <h1>{title}</h1>
    <ul class="file-list">
{items}    </ul>
  </div>
</body>
</html>
"#;

/// One section after rendering: prose as HTML, code escaped and tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub docs_html: String,
    pub code_html: String,
}

/// A navigation link shown on every page and on the index.
#[derive(Debug, Clone)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Wraps escaped code in a language-tagged block for client-side
/// highlighting. The code itself is treated as opaque text.
pub fn code_block(code: &str, language: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        language,
        escape_text(code)
    )
}

/// Renders sections 1:1 and in order: Markdown for docs, escaping for code.
pub fn render_sections(sections: &[Section], language: &str) -> Vec<RenderedSection> {
    sections
        .iter()
        .map(|section| RenderedSection {
            docs_html: markdown::to_html(&section.docs_text),
            code_html: code_block(&section.code_text, language),
        })
        .collect()
}

/// Assembles a page for one source file. `root` is the `../`-prefix that
/// leads from this page back to the output root.
pub fn render_page(
    title: &str,
    sections: &[RenderedSection],
    nav: &[NavEntry],
    root: &str,
) -> String {
    let mut rows = String::new();
    for (index, section) in sections.iter().enumerate() {
        let anchor = index + 1;
        rows.push_str(&format!(
            concat!(
                "        <tr id=\"section-{n}\">\n",
                "          <td class=\"docs\"><a class=\"pilcrow\" href=\"#section-{n}\">&#182;</a>\n{docs}          </td>\n",
                "          <td class=\"code\">{code}</td>\n",
                "        </tr>\n"
            ),
            n = anchor,
            docs = section.docs_html,
            code = section.code_html,
        ));
    }

    // Rows carry user code verbatim; substitute them last so a literal
    // `{title}` in someone's source never gets re-expanded.
    PAGE_TEMPLATE
        .replace("{title}", &escape_text(title))
        .replace("{root}", root)
        .replace("{highlight_css}", HIGHLIGHT_CSS)
        .replace("{highlight_js}", HIGHLIGHT_JS)
        .replace("{nav}", &render_nav(title, nav, root))
        .replace("{rows}", &rows)
}

fn render_nav(current: &str, nav: &[NavEntry], root: &str) -> String {
    if nav.len() < 2 {
        return format!("<header class=\"page-title\">{}</header>", escape_text(current));
    }

    let mut items = String::new();
    for entry in nav {
        items.push_str(&format!(
            "          <li><a href=\"{}{}\">{}</a></li>\n",
            root,
            entry.href,
            escape_text(&entry.label)
        ));
    }

    format!(
        concat!(
            "<nav class=\"jump\">\n",
            "      <details>\n",
            "        <summary>{current} &mdash; jump to&hellip;</summary>\n",
            "        <ul>\n",
            "{items}",
            "          <li class=\"index-link\"><a href=\"{root}index.html\">index</a></li>\n",
            "        </ul>\n",
            "      </details>\n",
            "    </nav>"
        ),
        current = escape_text(current),
        items = items,
        root = root,
    )
}

/// The navigation index listing every generated page.
pub fn render_index(title: &str, entries: &[NavEntry]) -> String {
    let mut items = String::new();
    for entry in entries {
        items.push_str(&format!(
            "      <li><a href=\"{}\">{}</a></li>\n",
            entry.href,
            escape_text(&entry.label)
        ));
    }

    INDEX_TEMPLATE
        .replace("{title}", &escape_text(title))
        .replace("{items}", &items)
}
