use std::path::Path;

use bytes::Bytes;

const EMPTY: &[u8] = b"[]";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Regions,
    Pois,
    Courses,
}

impl CatalogKind {
    pub fn file_name(self) -> &'static str {
        match self {
            CatalogKind::Regions => "regions.json",
            CatalogKind::Pois => "pois.json",
            CatalogKind::Courses => "courses.json",
        }
    }
}

/// The three datasets, loaded once at startup and never modified.
///
/// Documents are kept as the bytes read from disk so they are served exactly
/// as written.
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: Bytes,
    pois: Bytes,
    courses: Bytes,
}

impl Catalog {
    /// Load every dataset from `dir`. A missing or malformed document is
    /// replaced with an empty array.
    pub fn load(dir: &Path) -> Self {
        Self {
            regions: load_or_empty(dir, CatalogKind::Regions),
            pois: load_or_empty(dir, CatalogKind::Pois),
            courses: load_or_empty(dir, CatalogKind::Courses),
        }
    }

    pub fn get(&self, kind: CatalogKind) -> &Bytes {
        match kind {
            CatalogKind::Regions => &self.regions,
            CatalogKind::Pois => &self.pois,
            CatalogKind::Courses => &self.courses,
        }
    }
}

fn load_or_empty(dir: &Path, kind: CatalogKind) -> Bytes {
    let path = dir.join(kind.file_name());
    match read_document(&path) {
        Ok(doc) => {
            tracing::info!("Loaded {}", path.display());
            doc
        }
        Err(e) => {
            tracing::warn!("Failed to load {}: {e}. Serving an empty list", path.display());
            Bytes::from_static(EMPTY)
        }
    }
}

fn read_document(path: &Path) -> Result<Bytes, String> {
    let raw = Bytes::from(std::fs::read(path).map_err(|e| e.to_string())?);
    // Editors on Windows like to prepend a BOM; it is not part of the document.
    let doc = if raw.starts_with(UTF8_BOM) {
        raw.slice(UTF8_BOM.len()..)
    } else {
        raw
    };
    serde_json::from_slice::<serde::de::IgnoredAny>(&doc).map_err(|e| e.to_string())?;
    Ok(doc)
}
