// src/core/html.rs
//
// Thin helpers over `scraper` shared by the page specs.
// Selector building, the markup check and visible text.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};

/// Parse a full document. html5ever accepts anything, so reject inputs
/// that are empty or carry no tag at all before handing them over.
pub fn parse_document(doc: &str) -> Result<Html> {
    if !looks_like_markup(doc) {
        return Err(Error::NotMarkup);
    }
    Ok(Html::parse_document(doc))
}

pub fn looks_like_markup(doc: &str) -> bool {
    let t = doc.trim_start();
    !t.is_empty() && t.contains('<') && t.contains('>')
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// `tag[attr="value"]`, with quotes/backslashes in value escaped.
pub fn attr_eq(tag: &str, attr: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!(r#"{tag}[{attr}="{escaped}"]"#)
}

/// Visible text of an element: every text node trimmed at both ends, blanks
/// dropped, pieces glued back together without separators. Whitespace inside
/// a text node is kept as is.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(html: &str) -> String {
        let doc = Html::parse_fragment(html);
        let div = selector("div").unwrap();
        stripped_text(doc.select(&div).next().unwrap())
    }

    #[test]
    fn trims_each_text_node_but_keeps_inner_runs() {
        assert_eq!(text_of("<div>\n  Foo  &amp;\n  Bar \n</div>"), "Foo  &\n  Bar");
        assert_eq!(text_of("<div> 164.08 <span> x </span>\u{a0}</div>"), "164.08x");
    }
}
