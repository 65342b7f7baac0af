//! Static theme catalog and region slices.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::catalog_data::NAMES;
use crate::errors::domain::{DomainError, ValidationKind};

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// One theme entry; copied by value into the cards built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub image_ref: String,
}

static CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    NAMES
        .iter()
        .zip(1u32..)
        .map(|(name, id)| CatalogEntry {
            id,
            name: (*name).to_string(),
            image_ref: format!("{SPRITE_BASE}/{id}.png"),
        })
        .collect()
});

/// The full ordered catalog.
pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Theme selection: a named catalog slice or a caller-supplied list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Custom,
}

impl Region {
    /// Named regions in catalog order.
    pub const NAMED: [Region; 4] = [Region::Kanto, Region::Johto, Region::Hoenn, Region::Sinnoh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Kanto => "kanto",
            Region::Johto => "johto",
            Region::Hoenn => "hoenn",
            Region::Sinnoh => "sinnoh",
            Region::Custom => "custom",
        }
    }

    /// Catalog index range for a named region; `None` for `Custom`.
    pub fn catalog_range(&self) -> Option<Range<usize>> {
        match self {
            Region::Kanto => Some(0..151),
            Region::Johto => Some(151..251),
            Region::Hoenn => Some(251..386),
            Region::Sinnoh => Some(386..493),
            Region::Custom => None,
        }
    }

    /// Catalog entries for a named region, clamped to the catalog size.
    pub fn entries(&self) -> &'static [CatalogEntry] {
        let all = catalog();
        match self.catalog_range() {
            Some(range) => {
                let end = range.end.min(all.len());
                let start = range.start.min(end);
                &all[start..end]
            }
            None => &[],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kanto" => Ok(Region::Kanto),
            "johto" => Ok(Region::Johto),
            "hoenn" => Ok(Region::Hoenn),
            "sinnoh" => Ok(Region::Sinnoh),
            "custom" => Ok(Region::Custom),
            _ => Err(DomainError::validation(
                ValidationKind::UnknownRegion,
                format!("Unknown region: {s}"),
            )),
        }
    }
}
