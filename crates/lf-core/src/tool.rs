//! The tool the user has armed: place an element, or remove.

use crate::catalog::{ElementCatalog, ElementId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Place(ElementId),
    Remove,
}

impl Tool {
    pub const REMOVE_NAME: &'static str = "remove";

    /// Resolve a host-side tool name: `"remove"`, a numeric id, or a catalog name.
    ///
    /// Numeric ids are accepted even when the catalog lacks them; the
    /// validator rejects unknown elements. Returns `None` for `"0"`, empty,
    /// or unrecognized names.
    pub fn parse(name: &str, catalog: &ElementCatalog) -> Option<Self> {
        let name = name.trim();
        if name == Self::REMOVE_NAME {
            return Some(Self::Remove);
        }
        if let Ok(n) = name.parse::<u16>() {
            return (n != 0).then_some(Self::Place(ElementId(n)));
        }
        catalog.by_name(name).map(|d| Self::Place(d.id))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place(id) => write!(f, "place {id}"),
            Self::Remove => f.write_str(Self::REMOVE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remove_ids_and_names() {
        let catalog = ElementCatalog::standard();
        assert_eq!(Tool::parse("remove", &catalog), Some(Tool::Remove));
        assert_eq!(Tool::parse(" 2 ", &catalog), Some(Tool::Place(ElementId::STAR)));
        assert_eq!(
            Tool::parse("moving-platform", &catalog),
            Some(Tool::Place(ElementId::MOVING_PLATFORM))
        );
        assert_eq!(Tool::parse("99", &catalog), Some(Tool::Place(ElementId(99))));
        assert_eq!(Tool::parse("0", &catalog), None);
        assert_eq!(Tool::parse("", &catalog), None);
        assert_eq!(Tool::parse("lava", &catalog), None);
    }
}
