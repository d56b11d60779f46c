// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::OnceLock;

use kurbo::Point;
use plotpick_path::{Outline, interpret};

use crate::node::{PathNode, StyleKey};

/// Identifier of a selectable path within one [`PathIndex`](crate::PathIndex).
///
/// Ids follow document order: the first selectable `<path>` is `RecordId(0)`.
/// They are only meaningful for the index that issued them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    /// Position of the record in [`PathIndex::records`](crate::PathIndex::records).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A selectable path: its document node plus lazily derived geometry.
///
/// All geometry is in document units. The outline is interpreted on first use
/// and cached for the record's lifetime; the node never changes, so the cache
/// is never invalidated.
#[derive(Debug)]
pub struct PathRecord {
    id: RecordId,
    node: PathNode,
    style: StyleKey,
    pub(crate) group: usize,
    outline: OnceLock<Outline>,
}

impl PathRecord {
    pub(crate) fn new(id: RecordId, node: PathNode, style: StyleKey, group: usize) -> Self {
        Self {
            id,
            node,
            style,
            group,
            outline: OnceLock::new(),
        }
    }

    /// This record's id.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The document node this record was built from.
    #[must_use]
    pub fn node(&self) -> &PathNode {
        &self.node
    }

    /// The record's drawn style.
    #[must_use]
    pub fn style(&self) -> &StyleKey {
        &self.style
    }

    /// The absolute outline, interpreted on first access.
    pub fn outline(&self) -> &Outline {
        self.outline
            .get_or_init(|| interpret(self.node.d(), self.node.transform()))
    }

    /// See [`Outline::distance2`].
    #[must_use]
    pub fn distance2(&self, pt: Point) -> f64 {
        self.outline().distance2(pt)
    }

    /// See [`Outline::closest_point`].
    #[must_use]
    pub fn closest_point(&self, pt: Point) -> Option<Point> {
        self.outline().closest_point(pt)
    }

    /// See [`Outline::is_inside`].
    #[must_use]
    pub fn is_inside(&self, min: Point, max: Point) -> bool {
        self.outline().is_inside(min, max)
    }

    /// See [`Outline::extent2`].
    #[must_use]
    pub fn extent2(&self) -> f64 {
        self.outline().extent2()
    }

    /// See [`Outline::center`].
    #[must_use]
    pub fn center(&self) -> Point {
        self.outline().center()
    }
}
