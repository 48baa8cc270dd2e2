/// Data layer: core types, loading, and queries.
///
/// Architecture:
/// ```text
///   pokedex.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Pokedex (trimmed headers, "None" fill)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Pokedex  │  Vec<Record>, source order, read-only
///   └──────────┘
///        │
///        ├──────────────┬───────────────┐
///        ▼              ▼               ▼
///   ┌─────────┐   ┌──────────┐   ┌──────────┐
///   │  query  │   │ compare  │   │ summary  │
///   └─────────┘   └──────────┘   └──────────┘
///   lookup/search  type means     chart data
/// ```

pub mod compare;
pub mod loader;
pub mod model;
pub mod query;
pub mod summary;
