// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

use crate::node::{PathNode, StyleKey};
use crate::record::{PathRecord, RecordId};
use crate::{LoadError, Units};

/// Which step of [`PathIndex::select`] produced a selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectedBy {
    /// The record was the largest one fully enclosed by the rectangle.
    Enclosure,
    /// Nothing was enclosed; the record is the one nearest the rectangle's center.
    Nearest,
}

/// Result of [`PathIndex::select`].
#[derive(Copy, Clone, Debug)]
pub struct Selection<'a> {
    /// The selected record.
    pub record: &'a PathRecord,
    /// How it was selected.
    pub by: SelectedBy,
}

/// The selectable paths of one document page, with spatial queries.
///
/// An index is built once per loaded document and never changes afterwards.
/// Query points and returned coordinates are in query units (inches); the
/// index converts to document units (points) internally.
#[derive(Debug)]
pub struct PathIndex {
    text: String,
    header: String,
    trailer: String,
    units: Units,
    records: Vec<PathRecord>,
    groups: Vec<SmallVec<[RecordId; 8]>>,
    skipped: usize,
}

impl PathIndex {
    /// Loads a document.
    ///
    /// Every `<path>` element becomes a [`PathRecord`], in document order,
    /// unless its only attributes are `d` and `transform`. The root `width`
    /// must be declared in points.
    pub fn parse(text: impl Into<String>) -> Result<Self, LoadError> {
        let text = text.into();

        let (units, header, trailer, nodes) = {
            let options = roxmltree::ParsingOptions {
                allow_dtd: true,
                ..roxmltree::ParsingOptions::default()
            };
            let doc = roxmltree::Document::parse_with_options(&text, options)?;
            let root = doc.root_element();
            let width = root.attribute("width").ok_or(LoadError::MissingWidth)?;
            let units = Units::from_width(width).inspect_err(|err| {
                log::warn!("rejecting document: {err}");
            })?;
            let (header, trailer) = split_root(&text, root);
            let nodes: Vec<PathNode> = doc
                .descendants()
                .filter(|n| n.is_element() && n.tag_name().name() == "path")
                .map(path_node)
                .collect();
            (units, header, trailer, nodes)
        };

        let mut records = Vec::with_capacity(nodes.len());
        let mut groups: Vec<SmallVec<[RecordId; 8]>> = Vec::new();
        let mut group_of: HashMap<StyleKey, usize> = HashMap::new();
        let mut skipped = 0;
        for node in nodes {
            if !node.is_styled() {
                skipped += 1;
                continue;
            }
            let id = RecordId(records.len());
            let style = node.style_key();
            let next = groups.len();
            let group = *group_of.entry(style.clone()).or_insert(next);
            if group == next {
                groups.push(SmallVec::new());
            }
            groups[group].push(id);
            records.push(PathRecord::new(id, node, style, group));
        }

        log::debug!(
            "loaded {} selectable paths in {} styles ({} unstyled skipped), width {}pt",
            records.len(),
            groups.len(),
            skipped,
            units.document_width(),
        );

        Ok(Self {
            text,
            header,
            trailer,
            units,
            records,
            groups,
            skipped,
        })
    }

    /// The document text this index was loaded from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Document text up to (not including) the root element's closing tag.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The root element's closing tag and anything after it.
    #[must_use]
    pub fn trailer(&self) -> &str {
        &self.trailer
    }

    /// The document/query unit conversion.
    #[must_use]
    pub fn units(&self) -> Units {
        self.units
    }

    /// All selectable records, in document order.
    #[must_use]
    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }

    /// The record with the given id.
    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<&PathRecord> {
        self.records.get(id.0)
    }

    /// Number of selectable records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the document has no selectable paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of unstyled `<path>` elements that were not indexed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Squared distance from `pt` to `record`, both sides in query units.
    #[must_use]
    pub fn distance2(&self, record: &PathRecord, pt: Point) -> f64 {
        self.units
            .distance2_to_query(record.distance2(self.units.to_document(pt)))
    }

    /// The record nearest to `pt`.
    ///
    /// Records whose distance is undefined (empty or unsupported outlines) are
    /// never chosen. Ties go to the record earlier in the document.
    #[must_use]
    pub fn find_nearest(&self, pt: Point) -> Option<&PathRecord> {
        let pt = self.units.to_document(pt);
        let mut best: Option<(&PathRecord, f64)> = None;
        for record in &self.records {
            let d2 = record.distance2(pt);
            if d2.is_nan() {
                continue;
            }
            if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
                best = Some((record, d2));
            }
        }
        if let Some((record, d2)) = best {
            log::trace!("nearest path {:?}, squared distance {d2}", record.id());
        }
        best.map(|(record, _)| record)
    }

    /// The largest record fully contained in the rectangle spanned by two
    /// corners.
    ///
    /// "Largest" is by [`PathRecord::extent2`]; ties go to the record earlier in
    /// the document.
    #[must_use]
    pub fn find_inside(&self, corner0: Point, corner1: Point) -> Option<&PathRecord> {
        let c0 = self.units.to_document(corner0);
        let c1 = self.units.to_document(corner1);
        let min = Point::new(c0.x.min(c1.x), c0.y.min(c1.y));
        let max = Point::new(c0.x.max(c1.x), c0.y.max(c1.y));

        let mut best: Option<(&PathRecord, f64)> = None;
        for record in self.records.iter().filter(|r| r.is_inside(min, max)) {
            let extent2 = record.extent2();
            if best.is_none_or(|(_, best_extent2)| extent2 > best_extent2) {
                best = Some((record, extent2));
            }
        }
        best.map(|(record, _)| record)
    }

    /// The vertex of `record` nearest to `pt`, in query units.
    #[must_use]
    pub fn find_nearest_point(&self, record: &PathRecord, pt: Point) -> Option<Point> {
        record
            .closest_point(self.units.to_document(pt))
            .map(|p| self.units.to_query(p))
    }

    /// Every record drawn with the same style as `record`, itself included,
    /// in document order.
    ///
    /// Styles compare every attribute except `d` and `transform`. Returns an
    /// empty list for a record from another index.
    #[must_use]
    pub fn group(&self, record: &PathRecord) -> Vec<&PathRecord> {
        let owned = self
            .records
            .get(record.id().0)
            .is_some_and(|r| core::ptr::eq(r, record));
        let Some(members) = self.groups.get(record.group).filter(|_| owned) else {
            return Vec::new();
        };
        members.iter().map(|id| &self.records[id.0]).collect()
    }

    /// Selects a record from a drag rectangle, falling back to a click.
    ///
    /// The policy has two steps: first the largest record enclosed by the
    /// rectangle ([`find_inside`](Self::find_inside)); if there is none, the
    /// record nearest the rectangle's center ([`find_nearest`](Self::find_nearest)).
    /// A plain click is a rectangle with equal corners.
    #[must_use]
    pub fn select(&self, corner0: Point, corner1: Point) -> Option<Selection<'_>> {
        if let Some(record) = self.find_inside(corner0, corner1) {
            return Some(Selection {
                record,
                by: SelectedBy::Enclosure,
            });
        }
        self.find_nearest(corner0.midpoint(corner1))
            .map(|record| Selection {
                record,
                by: SelectedBy::Nearest,
            })
    }
}

fn path_node(element: roxmltree::Node<'_, '_>) -> PathNode {
    PathNode::new(element.attributes().map(|attr| {
        let name = match attr.namespace().and_then(|ns| element.lookup_prefix(ns)) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", attr.name()),
            _ => attr.name().to_owned(),
        };
        (name, attr.value())
    }))
}

/// Splits `text` just before the root element's closing tag.
///
/// A self-closing root is rewritten as an open/close pair so that content can
/// be inserted between the two halves.
fn split_root(text: &str, root: roxmltree::Node<'_, '_>) -> (String, String) {
    let range = root.range();
    let element = &text[range.clone()];

    if let Some(close) = element.rfind("</") {
        let at = range.start + close;
        return (text[..at].to_owned(), text[at..].to_owned());
    }

    let name = element
        .trim_start_matches('<')
        .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .next()
        .unwrap_or("svg");
    match element.strip_suffix("/>") {
        Some(open) => {
            let open = open.trim_end();
            (
                format!("{}{open}>", &text[..range.start]),
                format!("</{name}>{}", &text[range.end..]),
            )
        }
        None => (text.to_owned(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_prolog_and_epilog() {
        let text = "<?xml version=\"1.0\"?>\n<svg width=\"10pt\"><g/></svg>\n<!-- end -->\n";
        let index = PathIndex::parse(text).unwrap();
        assert_eq!(index.header(), "<?xml version=\"1.0\"?>\n<svg width=\"10pt\"><g/>");
        assert_eq!(index.trailer(), "</svg>\n<!-- end -->\n");
        assert_eq!(format!("{}{}", index.header(), index.trailer()), text);
    }

    #[test]
    fn split_opens_self_closing_root() {
        let index = PathIndex::parse("<svg width=\"10pt\" />").unwrap();
        assert_eq!(index.header(), "<svg width=\"10pt\">");
        assert_eq!(index.trailer(), "</svg>");
        assert!(index.is_empty());
    }

    #[test]
    fn namespaced_attributes_keep_their_prefix() {
        let text = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="10pt"><path d="M 0 0" xlink:title="t"/></svg>"#;
        let index = PathIndex::parse(text).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.records()[0].node().attribute("xlink:title"), Some("t"));
    }

    #[test]
    fn malformed_markup_is_an_xml_error() {
        assert!(matches!(
            PathIndex::parse("<svg width=\"10pt\"><path d=\"M 0 0\"></svg>"),
            Err(LoadError::Xml(_))
        ));
        assert!(matches!(
            PathIndex::parse("<svg height=\"10pt\"/>"),
            Err(LoadError::MissingWidth)
        ));
    }
}
