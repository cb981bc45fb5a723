//! Markdown documents as seen by the frontmatter deriver.
//!
//! A [`Document`] is a source path, the block-level tree of the body (with
//! the frontmatter block already stripped) and the mutable frontmatter record.
//!
//! ```text
//! ---                       frontmatter: { title: "..." }
//! title: ...
//! ---
//! <p><img src="a.png"></p>  root.children[0]  (html, value = raw markup)
//! **Intro** summary text    root.children[1]  (paragraph)
//!                             .children[1]    (text " summary text")
//! ```

mod error;
mod frontmatter;

pub use error::ContentError;
pub use frontmatter::Frontmatter;

use markdown::{ParseOptions, mdast};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// One node of the content tree.
///
/// `value` carries literal text for text, HTML and code nodes; container
/// nodes only have `children`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub value: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    /// `value` when it is set and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }
}

#[cfg(test)]
impl Node {
    /// Leaf node with a literal value.
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Container node.
    pub fn parent(children: Vec<Node>) -> Self {
        Self {
            value: None,
            children,
        }
    }
}

impl From<&mdast::Node> for Node {
    fn from(node: &mdast::Node) -> Self {
        let value = match node {
            mdast::Node::Text(n) => Some(n.value.clone()),
            mdast::Node::Html(n) => Some(n.value.clone()),
            mdast::Node::InlineCode(n) => Some(n.value.clone()),
            mdast::Node::InlineMath(n) => Some(n.value.clone()),
            mdast::Node::Code(n) => Some(n.value.clone()),
            mdast::Node::Math(n) => Some(n.value.clone()),
            _ => None,
        };
        let children = node
            .children()
            .map(|children| children.iter().map(Node::from).collect())
            .unwrap_or_default();

        Self { value, children }
    }
}

/// Body of a document: its top-level blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Root {
    pub children: Vec<Node>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn block(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }
}

/// A content document: path, body tree and frontmatter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub path: PathBuf,
    pub root: Root,
    pub frontmatter: Frontmatter,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, root: Root, frontmatter: Frontmatter) -> Self {
        Self {
            path: path.into(),
            root,
            frontmatter,
        }
    }

    /// Read and parse a markdown file.
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let source =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        Self::parse(path, &source)
    }

    /// Parse markdown `source` (GFM, YAML or TOML frontmatter).
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Result<Self, ContentError> {
        let mut options = ParseOptions::gfm();
        options.constructs.frontmatter = true;

        let tree = markdown::to_mdast(source, &options)
            .map_err(|err| ContentError::Markdown(err.to_string()))?;

        let mut frontmatter = Frontmatter::new();
        let mut children = Vec::new();
        for child in tree.children().into_iter().flatten() {
            match child {
                mdast::Node::Yaml(yaml) => frontmatter = parse_yaml(&yaml.value)?,
                mdast::Node::Toml(toml) => frontmatter = parse_toml(&toml.value)?,
                other => children.push(Node::from(other)),
            }
        }

        Ok(Self::new(path, Root::new(children), frontmatter))
    }
}

fn parse_yaml(source: &str) -> Result<Frontmatter, ContentError> {
    if source.trim().is_empty() {
        return Ok(Frontmatter::new());
    }
    let value: Value =
        serde_saphyr::from_str(source).map_err(|err| ContentError::Yaml(err.to_string()))?;
    into_frontmatter(value)
}

fn parse_toml(source: &str) -> Result<Frontmatter, ContentError> {
    let value: toml::Table = toml::from_str(source)?;
    into_frontmatter(serde_json::to_value(value)?)
}

fn into_frontmatter(value: Value) -> Result<Frontmatter, ContentError> {
    match value {
        Value::Object(map) => Ok(Frontmatter::from(map)),
        Value::Null => Ok(Frontmatter::new()),
        Value::Bool(_) => Err(ContentError::NotMapping("a boolean")),
        Value::Number(_) => Err(ContentError::NotMapping("a number")),
        Value::String(_) => Err(ContentError::NotMapping("a string")),
        Value::Array(_) => Err(ContentError::NotMapping("a sequence")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_strips_yaml_frontmatter() {
        let source = "---\ntitle: 第一期\ntags: [a, b]\n---\n\n# Heading\n";
        let doc = Document::parse("/site/posts/1-first.md", source).unwrap();

        assert_eq!(doc.frontmatter.get_str("title"), Some("第一期"));
        assert!(doc.frontmatter.get("tags").unwrap().is_array());
        assert_eq!(doc.root.children.len(), 1);
        assert_eq!(doc.path, PathBuf::from("/site/posts/1-first.md"));
    }

    #[test]
    fn test_parse_toml_frontmatter() {
        let source = "+++\ntitle = \"toml\"\ndraft = false\n+++\n\ntext\n";
        let doc = Document::parse("a.md", source).unwrap();

        assert_eq!(doc.frontmatter.get_str("title"), Some("toml"));
        assert!(!doc.frontmatter.is_present("draft"));
    }

    #[test]
    fn test_parse_without_frontmatter() {
        let doc = Document::parse("a.md", "just text\n").unwrap();
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.root.children.len(), 1);
    }

    #[test]
    fn test_parse_empty_frontmatter() {
        let doc = Document::parse("a.md", "---\n---\n\ntext\n").unwrap();
        assert!(doc.frontmatter.is_empty());
    }

    #[test]
    fn test_parse_rejects_scalar_frontmatter() {
        let err = Document::parse("a.md", "---\njust a string\n---\n").unwrap_err();
        assert!(matches!(err, ContentError::NotMapping(_)));
    }

    #[test]
    fn test_html_block_keeps_raw_value() {
        let source = "<p align=\"center\"><img src=\"cover.png\"></p>\n\nbody\n";
        let doc = Document::parse("a.md", source).unwrap();

        let first = doc.root.block(0).unwrap();
        assert!(first.text().unwrap().contains(r#"<img src="cover.png">"#));
    }

    #[test]
    fn test_paragraph_children() {
        let doc = Document::parse("a.md", "**Weekly** keyboard news\n").unwrap();

        let paragraph = doc.root.block(0).unwrap();
        assert_eq!(paragraph.value, None);
        // strong, then the trailing text
        assert_eq!(paragraph.children.len(), 2);
        assert_eq!(paragraph.child(1).unwrap().text(), Some(" keyboard news"));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "---\ndate: 2024/01/01\n---\nhello\n").unwrap();

        let doc = Document::from_file(&path).unwrap();
        assert_eq!(doc.frontmatter.get_str("date"), Some("2024/01/01"));
        assert_eq!(doc.path, path);
    }

    #[test]
    fn test_from_file_missing() {
        let err = Document::from_file(Path::new("/nonexistent/post.md")).unwrap_err();
        assert!(matches!(err, ContentError::Io(..)));
    }

    #[test]
    fn test_node_text_ignores_empty() {
        assert_eq!(Node::leaf("").text(), None);
        assert_eq!(Node::leaf("x").text(), Some("x"));
        assert_eq!(Node::parent(vec![]).text(), None);
    }
}
