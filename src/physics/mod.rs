/// Physics layer: parameters, screen sampling, and the diffraction model.
///
/// Architecture:
/// ```text
///   slider values (nm / mm / m)
///        │
///        ▼
///   ┌────────────┐
///   │   params    │  SlitParams → SI-unit accessors
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │    axis     │  ScreenAxis → symmetric position samples (m)
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ fraunhofer  │  phase terms → normalized intensity curves,
///   └────────────┘  far-field regime predicate
/// ```
///
/// Everything in this module is a pure function of its arguments: no UI
/// types, no I/O, no shared state between calls.

pub mod axis;
pub mod fraunhofer;
pub mod params;
