//! Sprite asset manifest: where each element's image lives.
//!
//! Images are named after the catalog entry, so a host only configures the
//! directory they are served from.

use lf_core::{ElementCatalog, ElementId};

pub const SPRITE_EXTENSION: &str = "svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    entries: Vec<(ElementId, String)>,
}

impl AssetManifest {
    /// One `<base_url>/<name>.svg` entry per catalog element.
    pub fn for_catalog(catalog: &ElementCatalog, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let entries = catalog
            .iter()
            .map(|d| {
                let url = if base.is_empty() {
                    format!("{}.{SPRITE_EXTENSION}", d.name)
                } else {
                    format!("{base}/{}.{SPRITE_EXTENSION}", d.name)
                };
                (d.id, url)
            })
            .collect();
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &str)> {
        self.entries.iter().map(|(id, url)| (*id, url.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
