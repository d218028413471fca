//! Static table of placeable elements.
//!
//! Each row describes one element id: its display name, the cells it covers
//! relative to its anchor, and the adjacency rule it obeys when placed.
//! Rules every element obeys live in the catalog's shared list, so a new
//! element type is a new row, not a new branch in the validator.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::fmt;

/// Identifier stored in grid cells. `0` means empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u16);

impl ElementId {
    pub const EMPTY: Self = Self(0);
    pub const SPAWN_POINT: Self = Self(1);
    pub const STAR: Self = Self(2);
    pub const BASE_BLOCK: Self = Self(3);
    pub const JUMP_SPRING: Self = Self(4);
    pub const SLOPED_BLOCK: Self = Self(5);
    pub const MOVING_PLATFORM: Self = Self(6);

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A relative `(d_row, d_col)` displacement from an anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_row: isize,
    pub d_col: isize,
}

impl Offset {
    pub const ANCHOR: Self = Self::new(0, 0);
    pub const LEFT: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(0, 1);
    pub const UP: Self = Self::new(-1, 0);
    pub const UP_LEFT: Self = Self::new(-1, -1);

    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    pub fn is_anchor(&self) -> bool {
        *self == Self::ANCHOR
    }

    /// Apply to a signed cell position.
    pub fn apply(&self, row: isize, col: isize) -> (isize, isize) {
        (row + self.d_row, col + self.d_col)
    }
}

/// Ordered list of cells an element covers. Most elements cover only the anchor.
pub type Footprint = SmallVec<[Offset; 3]>;

/// The constraint an element obeys on top of basic occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyRule {
    None,
    /// At most `n` instances of the element may exist on the whole grid.
    CountLimit(usize),
    /// No covered cell may sit directly left or right of the given id.
    NoHorizontalNeighborOf(ElementId),
    /// No covered cell may have the given id to its left, upper-left, or above.
    NoDiagonalOverlap(ElementId),
}

const HORIZONTAL_PROBES: &[Offset] = &[Offset::LEFT, Offset::RIGHT];
const DIAGONAL_PROBES: &[Offset] = &[Offset::LEFT, Offset::UP_LEFT, Offset::UP];

impl AdjacencyRule {
    /// Neighbor cells a cell-level rule inspects, relative to each covered cell.
    /// Empty for rules that are not evaluated per cell.
    pub fn probes(&self) -> &'static [Offset] {
        match self {
            Self::NoHorizontalNeighborOf(_) => HORIZONTAL_PROBES,
            Self::NoDiagonalOverlap(_) => DIAGONAL_PROBES,
            Self::None | Self::CountLimit(_) => &[],
        }
    }

    /// The id whose presence in a probed cell violates the rule.
    pub fn excluded(&self) -> Option<ElementId> {
        match self {
            Self::NoHorizontalNeighborOf(id) | Self::NoDiagonalOverlap(id) => Some(*id),
            Self::None | Self::CountLimit(_) => None,
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDescriptor {
    pub id: ElementId,
    /// Stable kebab-case name, also used as the sprite asset stem.
    pub name: &'static str,
    pub footprint: Footprint,
    pub rule: AdjacencyRule,
}

impl ElementDescriptor {
    /// A single-cell element.
    pub fn new(id: ElementId, name: &'static str, rule: AdjacencyRule) -> Self {
        Self {
            id,
            name,
            footprint: smallvec![Offset::ANCHOR],
            rule,
        }
    }

    pub fn with_footprint(mut self, offsets: &[Offset]) -> Self {
        self.footprint = offsets.iter().copied().collect();
        self
    }

    /// Absolute cells covered when anchored at `(row, col)`, in footprint order.
    pub fn cells_at(&self, row: isize, col: isize) -> SmallVec<[(isize, isize); 3]> {
        self.footprint.iter().map(|o| o.apply(row, col)).collect()
    }
}

/// The element table plus the rules every element obeys.
#[derive(Debug, Clone)]
pub struct ElementCatalog {
    /// Sorted by id.
    elements: Vec<ElementDescriptor>,
    shared_rules: SmallVec<[AdjacencyRule; 2]>,
}

impl Default for ElementCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ElementCatalog {
    /// A catalog with no elements and no shared rules.
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
            shared_rules: SmallVec::new(),
        }
    }

    /// The platformer element set.
    pub fn standard() -> Self {
        use AdjacencyRule::*;

        Self::empty()
            .with_element(ElementDescriptor::new(ElementId::SPAWN_POINT, "spawn-point", None))
            .with_element(ElementDescriptor::new(ElementId::STAR, "star", CountLimit(3)))
            .with_element(ElementDescriptor::new(ElementId::BASE_BLOCK, "base-block", None))
            .with_element(ElementDescriptor::new(ElementId::JUMP_SPRING, "jump-spring", None))
            .with_element(ElementDescriptor::new(ElementId::SLOPED_BLOCK, "sloped-block", None))
            .with_element(
                ElementDescriptor::new(ElementId::MOVING_PLATFORM, "moving-platform", None)
                    .with_footprint(&[Offset::LEFT, Offset::ANCHOR, Offset::RIGHT]),
            )
            // Platforms only store their anchor; this keeps their flanks clear.
            .with_shared_rule(NoHorizontalNeighborOf(ElementId::MOVING_PLATFORM))
            .with_shared_rule(NoDiagonalOverlap(ElementId::SLOPED_BLOCK))
    }

    /// Add or replace a row. Id `0` is reserved for empty cells and ignored.
    pub fn with_element(mut self, descriptor: ElementDescriptor) -> Self {
        if descriptor.id.is_empty() {
            log::warn!("ignoring catalog row {:?}: id 0 is reserved", descriptor.name);
            return self;
        }
        match self.elements.binary_search_by_key(&descriptor.id, |d| d.id) {
            Ok(pos) => self.elements[pos] = descriptor,
            Err(pos) => self.elements.insert(pos, descriptor),
        }
        self
    }

    pub fn with_shared_rule(mut self, rule: AdjacencyRule) -> Self {
        self.shared_rules.push(rule);
        self
    }

    pub fn describe(&self, id: ElementId) -> Option<&ElementDescriptor> {
        self.elements
            .binary_search_by_key(&id, |d| d.id)
            .ok()
            .map(|pos| &self.elements[pos])
    }

    pub fn by_name(&self, name: &str) -> Option<&ElementDescriptor> {
        self.elements.iter().find(|d| d.name == name)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.describe(id).is_some()
    }

    pub fn shared_rules(&self) -> &[AdjacencyRule] {
        &self.shared_rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
