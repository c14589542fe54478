//! Schema Accessors
//!
//! Typed lookups over a decoded response tree. Paths are `/`-separated tag
//! names relative to the node they are applied to. A missing element or an
//! unparsable value yields a [`SchemaError`] naming the path.

use indexmap::IndexMap;
use roxmltree::Node;
use std::str::FromStr;
use thiserror::Error;

/// The response tree did not match the expected shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing element <{path}>")]
    Missing { path: String },

    #[error("invalid value {value:?} at <{path}>, expected {expected}")]
    Invalid {
        path: String,
        value: String,
        expected: &'static str,
    },

    #[error("{0}")]
    Inconsistent(String),
}

pub trait NodeExt<'a, 'input: 'a> {
    /// Every element reachable through `path`, in document order
    fn find_all(&self, path: &str) -> Vec<Node<'a, 'input>>;

    /// First element reachable through `path`
    fn find(&self, path: &str) -> Option<Node<'a, 'input>>;

    fn required(&self, path: &str) -> Result<Node<'a, 'input>, SchemaError>;

    /// Text of a required element; an empty element reads as `""`
    fn text_at(&self, path: &str) -> Result<String, SchemaError>;

    fn opt_text_at(&self, path: &str) -> Option<String>;

    fn parse_at<T: FromStr>(&self, path: &str) -> Result<T, SchemaError>;

    /// Tag to text map of the direct element children
    fn leaf_map(&self) -> IndexMap<String, String>;
}

impl<'a, 'input: 'a> NodeExt<'a, 'input> for Node<'a, 'input> {
    fn find_all(&self, path: &str) -> Vec<Node<'a, 'input>> {
        let mut current = vec![*self];
        for segment in path.split('/') {
            current = current
                .iter()
                .flat_map(|node| {
                    node.children()
                        .filter(move |c| c.is_element() && c.tag_name().name() == segment)
                })
                .collect();
        }
        current
    }

    fn find(&self, path: &str) -> Option<Node<'a, 'input>> {
        self.find_all(path).into_iter().next()
    }

    fn required(&self, path: &str) -> Result<Node<'a, 'input>, SchemaError> {
        self.find(path).ok_or_else(|| SchemaError::Missing {
            path: path.to_string(),
        })
    }

    fn text_at(&self, path: &str) -> Result<String, SchemaError> {
        self.required(path)
            .map(|node| node.text().unwrap_or("").to_string())
    }

    fn opt_text_at(&self, path: &str) -> Option<String> {
        self.find(path)
            .and_then(|node| node.text())
            .map(|text| text.to_string())
    }

    fn parse_at<T: FromStr>(&self, path: &str) -> Result<T, SchemaError> {
        let raw = self.text_at(path)?;
        raw.trim().parse().map_err(|_| SchemaError::Invalid {
            path: path.to_string(),
            value: raw.clone(),
            expected: std::any::type_name::<T>(),
        })
    }

    fn leaf_map(&self) -> IndexMap<String, String> {
        self.children()
            .filter(|c| c.is_element())
            .map(|c| {
                (
                    c.tag_name().name().to_string(),
                    c.text().unwrap_or("").to_string(),
                )
            })
            .collect()
    }
}
