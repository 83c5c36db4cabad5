//! TrueSTUDIO descriptor documents
//!
//! A [`Descriptor`] owns the raw XML of `.project` or `.cproject`. Parsing
//! yields a `roxmltree::Document`; the wrappers in this module give typed,
//! read-only access to the handful of node shapes the extractors need so
//! that required fields are checked once, at the accessor.

mod build_config;
mod resources;

pub use build_config::{extract_build_settings, ToolKind};
pub use resources::extract_sources;

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};

use crate::error::{St2MakeError, St2MakeResult};
use crate::fs::FileSystem;

/// Raw descriptor text plus the file it came from (for error reporting).
#[derive(Debug, Clone)]
pub struct Descriptor {
    file: PathBuf,
    text: String,
}

impl Descriptor {
    pub fn new(file: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            text: text.into(),
        }
    }

    /// Read a descriptor from disk.
    pub fn load<F: FileSystem>(fs: &F, path: &Path) -> St2MakeResult<Self> {
        let text = fs
            .read_to_string(path)
            .map_err(|e| St2MakeError::DescriptorParse {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self::new(path, text))
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Parse the XML tree.
    pub fn parse(&self) -> St2MakeResult<Document<'_>> {
        Document::parse(&self.text).map_err(|e| St2MakeError::DescriptorParse {
            file: self.file.clone(),
            message: e.to_string(),
        })
    }
}

/// Direct child elements of `node` named `name`.
fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// Trimmed text of the first child element named `name`.
fn child_text<'a, 'input: 'a>(node: Node<'a, 'input>, name: &'static str) -> Option<&'a str> {
    child_elements(node, name)
        .next()
        .and_then(|n| n.text())
        .map(str::trim)
}

/// A `<tool>` element: one toolchain component inside one configuration.
#[derive(Debug, Clone, Copy)]
pub struct ToolScope<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input: 'a> ToolScope<'a, 'input> {
    /// Every `<tool>` anywhere in `doc` whose `superClass` is `id`, in
    /// document order.
    pub fn all(doc: &'a Document<'input>, id: &str) -> Vec<Self> {
        doc.descendants()
            .filter(|n| n.is_element() && n.has_tag_name("tool"))
            .filter(|n| n.attribute("superClass") == Some(id))
            .map(|node| Self { node })
            .collect()
    }

    pub fn options(&self) -> impl Iterator<Item = ToolOption<'a, 'input>> {
        child_elements(self.node, "option").map(|node| ToolOption { node })
    }

    /// First option with the given `name` attribute.
    pub fn option_named(&self, name: &str) -> Option<ToolOption<'a, 'input>> {
        self.options().find(|o| o.node.attribute("name") == Some(name))
    }

    /// First option with the given `superClass` attribute.
    pub fn option_with_super_class(&self, super_class: &str) -> Option<ToolOption<'a, 'input>> {
        self.options()
            .find(|o| o.node.attribute("superClass") == Some(super_class))
    }

    /// All options with the given `valueType` attribute.
    pub fn options_of_type(
        &self,
        value_type: &'static str,
    ) -> impl Iterator<Item = ToolOption<'a, 'input>> {
        self.options()
            .filter(move |o| o.node.attribute("valueType") == Some(value_type))
    }
}

/// An `<option>` element under a tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolOption<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input: 'a> ToolOption<'a, 'input> {
    /// The literal `value` attribute.
    pub fn value(&self) -> Option<&'a str> {
        self.node.attribute("value")
    }

    /// Non-empty `listOptionValue/@value` entries, in document order.
    pub fn list_values(&self) -> impl Iterator<Item = &'a str> {
        child_elements(self.node, "listOptionValue")
            .filter_map(|n| n.attribute("value"))
            .filter(|v| !v.is_empty())
    }
}
