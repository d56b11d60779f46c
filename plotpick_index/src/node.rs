// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path elements as read from a document, and their style identity.

/// Attributes that describe geometry rather than drawn style.
const GEOMETRY_ATTRIBUTES: [&str; 2] = ["d", "transform"];

fn is_geometry(name: &str) -> bool {
    GEOMETRY_ATTRIBUTES.contains(&name)
}

/// One `<path>` element of a loaded document.
///
/// A node is an immutable snapshot of the element's attributes, in document
/// order, under their qualified names (`prefix:name` for namespaced
/// attributes). The attributes are copied out of the parsed document rather
/// than borrowed from it, so an index can own its source text. Nodes are
/// owned by their [`PathIndex`](crate::PathIndex) and are never modified
/// after loading; renderers build new records instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathNode {
    attributes: Vec<(String, String)>,
}

impl PathNode {
    /// Creates a node from `(name, value)` pairs in document order.
    pub fn new<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of the attribute called `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All attributes except `d` and `transform`, in document order.
    pub fn style_attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes().filter(|(k, _)| !is_geometry(k))
    }

    /// The path data; empty when the element has none.
    #[must_use]
    pub fn d(&self) -> &str {
        self.attribute("d").unwrap_or("")
    }

    /// The raw `transform` attribute, if present.
    #[must_use]
    pub fn transform(&self) -> Option<&str> {
        self.attribute("transform")
    }

    /// Returns `true` if the node carries any attribute besides `d` and
    /// `transform`.
    ///
    /// Unstyled paths are construction geometry (clip outlines and the like)
    /// rather than drawn content, and are not selectable.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.style_attributes().next().is_some()
    }

    /// The node's [`StyleKey`].
    #[must_use]
    pub fn style_key(&self) -> StyleKey {
        let mut pairs: Vec<(String, String)> = self
            .style_attributes()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        pairs.sort();
        StyleKey(pairs)
    }
}

/// Identity of a drawn style: every attribute except `d` and `transform`,
/// sorted by name.
///
/// Two paths with equal keys were drawn the same way, which in a plot usually
/// means they belong to the same data series.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleKey(Vec<(String, String)>);

impl StyleKey {
    /// The `(name, value)` pairs, sorted by name.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` for the key of an unstyled node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_is_not_style() {
        let node = PathNode::new([("transform", "matrix(1,0,0,1,0,0)"), ("d", "M 0 0")]);
        assert!(!node.is_styled());
        assert!(node.style_key().is_empty());
        assert_eq!(node.d(), "M 0 0");

        let node = PathNode::new([("d", "M 0 0"), ("stroke", "red")]);
        assert!(node.is_styled());
        assert_eq!(node.transform(), None);
    }

    #[test]
    fn style_key_ignores_order_and_geometry() {
        let a = PathNode::new([("d", "M 0 0"), ("stroke", "red"), ("fill", "none")]);
        let b = PathNode::new([
            ("fill", "none"),
            ("transform", "matrix(2,0,0,2,0,0)"),
            ("stroke", "red"),
            ("d", "M 5 5 L 6 6"),
        ]);
        assert_eq!(a.style_key(), b.style_key());
        assert_eq!(
            a.style_key().pairs().collect::<Vec<_>>(),
            vec![("fill", "none"), ("stroke", "red")]
        );

        let c = PathNode::new([("d", "M 0 0"), ("stroke", "blue"), ("fill", "none")]);
        assert_ne!(a.style_key(), c.style_key());
    }

    #[test]
    fn snapshot_outlives_its_source() {
        let source = String::from("M 0 0 L 72 0");
        let node = PathNode::new([("d", source.as_str()), ("stroke", "red")]);
        drop(source);
        assert_eq!(node.d(), "M 0 0 L 72 0");
        assert_eq!(node.clone(), node);
    }

    #[test]
    fn missing_d_reads_as_empty() {
        let node = PathNode::new([("stroke", "red")]);
        assert_eq!(node.d(), "");
        assert_eq!(node.attributes().count(), 1);
    }
}
