/// Data layer: core types, loading, and speedup derivation.
///
/// Architecture:
/// ```text
///  results/{dataset}_{mode}_{threads}.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse floats → minimum runtime
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ speedup   │  sequential_min / parallel_min per thread count
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ ModeFigure  │  one curve per dataset, ready to render
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod speedup;
