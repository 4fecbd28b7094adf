/// Data layer: catalog types, loading, filtering and ordering.
///
/// Architecture:
/// ```text
///  .json / .csv / bundled asset
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog   │  Vec<University>, field index, max fee
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → matching indices (stable)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  sort     │  optional display ordering
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;

/// The sample catalog shipped with the application.
pub const SAMPLE_CATALOG: &str = include_str!("../../assets/catalog.json");
