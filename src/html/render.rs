//! HTML rendering implementation
//!
//! This module contains the tree-to-markup functions.

use std::borrow::Cow;

use crate::tree::{PathTree, TreeEntry};

/// Title of the generated document
pub const DOCUMENT_TITLE: &str = "Directory";
/// Heading shown above the index
pub const DOCUMENT_HEADING: &str = "HTML File Index";

/// Render a complete index document
///
/// The tree is wrapped in a minimal HTML shell with a UTF-8 charset
/// declaration, a fixed title and a fixed heading. An empty tree still
/// produces a valid document containing an empty list.
///
/// # Arguments
///
/// * `tree` - The root of the path tree
/// * `base_url` - Prefix for every link target
///
/// # Returns
///
/// The document as a string, identical for identical inputs.
pub fn render_document(tree: &PathTree, base_url: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n");
    html.push_str("<html><head><meta charset='utf-8'>");
    html.push_str(&format!("<title>{}</title></head><body>\n", DOCUMENT_TITLE));
    html.push_str(&format!("<h1>{}</h1>\n", DOCUMENT_HEADING));
    html.push_str(&render_tree(tree, base_url, ""));
    html.push_str("</body></html>");
    html
}

/// Render one tree level as a nested list
///
/// Entries are visited in lexicographic order. Files become links to
/// `base_url + prefix + name` labelled `prefix + name`. Directories become
/// a plain-text item followed by the nested list for that directory, and
/// are dropped when nothing below them is a file.
///
/// # Arguments
///
/// * `tree` - The node to render
/// * `base_url` - Prefix for every link target
/// * `prefix` - Relative path of `tree`, empty or ending in `/`
pub fn render_tree(tree: &PathTree, base_url: &str, prefix: &str) -> String {
    let mut html = String::from("<ul>\n");

    for entry in tree.entries() {
        match entry {
            TreeEntry::File(name) => {
                let relative = format!("{}{}", prefix, name);
                let url = format!("{}{}", base_url, relative);
                html.push_str(&format!(
                    "  <li><a href=\"{}\">{}</a></li>\n",
                    escape_html(&url),
                    escape_html(&relative)
                ));
            }
            TreeEntry::Directory(name, node) => {
                if !node.has_files() {
                    continue;
                }
                html.push_str(&format!("  <li>{}\n", escape_html(name)));
                html.push_str(&render_tree(node, base_url, &format!("{}{}/", prefix, name)));
                html.push_str("  </li>\n");
            }
        }
    }

    html.push_str("</ul>\n");
    html
}

/// Escape text for use in HTML content and double-quoted attributes
///
/// Borrows the input when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    const BASE: &str = "https://example.com/";

    fn links(document: &str) -> Vec<(String, String)> {
        let html = Html::parse_document(document);
        let selector = Selector::parse("a").unwrap();
        html.select(&selector)
            .map(|a| {
                (
                    a.value().attr("href").unwrap_or_default().to_string(),
                    a.text().collect::<String>(),
                )
            })
            .collect()
    }

    #[test]
    fn test_render_example_tree() {
        let tree = PathTree::from_paths(["b/c/z.html", "a/y.html", "a/x.html"]);
        let expected = "<ul>\n\
            \x20 <li>a\n\
            <ul>\n\
            \x20 <li><a href=\"https://example.com/a/x.html\">a/x.html</a></li>\n\
            \x20 <li><a href=\"https://example.com/a/y.html\">a/y.html</a></li>\n\
            </ul>\n\
            \x20 </li>\n\
            \x20 <li>b\n\
            <ul>\n\
            \x20 <li>c\n\
            <ul>\n\
            \x20 <li><a href=\"https://example.com/b/c/z.html\">b/c/z.html</a></li>\n\
            </ul>\n\
            \x20 </li>\n\
            </ul>\n\
            \x20 </li>\n\
            </ul>\n";
        assert_eq!(render_tree(&tree, BASE, ""), expected);
    }

    #[test]
    fn test_render_empty_document() {
        let document = render_document(&PathTree::default(), BASE);
        assert_eq!(
            document,
            "<!DOCTYPE html>\n\
             <html><head><meta charset='utf-8'><title>Directory</title></head><body>\n\
             <h1>HTML File Index</h1>\n\
             <ul>\n</ul>\n\
             </body></html>"
        );

        let html = Html::parse_document(&document);
        assert!(html.errors.is_empty(), "{:?}", html.errors);
        let ul = Selector::parse("body > ul").unwrap();
        let list = html.select(&ul).next().unwrap();
        assert_eq!(list.children().filter(|c| c.value().is_element()).count(), 0);
    }

    #[test]
    fn test_render_prunes_empty_directories() {
        let mut tree = PathTree::from_paths(["keep/page.html"]);
        let mut hollow = PathTree::default();
        hollow
            .subdirectories
            .insert("inner".to_string(), PathTree::default());
        tree.subdirectories.insert("hollow".to_string(), hollow);

        let rendered = render_tree(&tree, BASE, "");
        assert!(rendered.contains("<li>keep\n"));
        assert!(!rendered.contains("hollow"));
        assert!(!rendered.contains("inner"));
    }

    #[test]
    fn test_render_orders_siblings_lexicographically() {
        let tree = PathTree::from_paths(["zeta.html", "beta/b.html", "alpha.html", "Gamma.html"]);
        let rendered = render_tree(&tree, BASE, "");

        let positions: Vec<usize> = ["Gamma.html", "alpha.html", "<li>beta", "zeta.html"]
            .iter()
            .map(|needle| rendered.find(needle).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_render_is_deterministic() {
        let paths = ["m/n/o.html", "a.html", "m/p.html", "z/y/x/w.html"];
        let first = render_document(&PathTree::from_paths(paths), BASE);
        let mut reversed = paths;
        reversed.reverse();
        for _ in 0..5 {
            assert_eq!(render_document(&PathTree::from_paths(reversed), BASE), first);
        }
    }

    #[test]
    fn test_render_link_round_trip() {
        let paths = ["a/x.html", "a/y.html", "b/c/z.html", "top.html", "ñ/acción.html"];
        let document = render_document(&PathTree::from_paths(paths), BASE);
        let found = links(&document);

        assert_eq!(found.len(), paths.len());
        for path in paths {
            let matching = found
                .iter()
                .filter(|(href, text)| *href == format!("{BASE}{path}") && text == path)
                .count();
            assert_eq!(matching, 1, "expected exactly one link for {path}");
        }
    }

    #[test]
    fn test_render_escapes_names() {
        let tree = PathTree::from_paths(["R&D/<draft>.html"]);
        let document = render_document(&tree, BASE);
        assert!(document.contains("<li>R&amp;D\n"));
        assert!(document.contains("R&amp;D/&lt;draft&gt;.html</a>"));

        let found = links(&document);
        assert_eq!(
            found,
            vec![(
                "https://example.com/R&D/<draft>.html".to_string(),
                "R&D/<draft>.html".to_string()
            )]
        );
    }

    #[test]
    fn test_escape_html_borrows_plain_text() {
        assert!(matches!(escape_html("plain/path.html"), Cow::Borrowed(_)));
        assert_eq!(escape_html("a\"b'c"), "a&quot;b&#39;c");
    }
}
