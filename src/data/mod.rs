/// Data layer: sensor log types, loading, orientation correction and export.
///
/// Architecture:
/// ```text
///  phone logger .csv  (ax;ay;az;…;t)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SensorLog
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ correction  │  flip ay, rotate by mount angles, center → CorrectedLog
///   └────────────┘
///        │
///        ├──────────────► ui::plot   (long, later) scatter
///        ▼
///   ┌──────────┐
///   │  export   │  t;long;later;vert .csv
///   └──────────┘
/// ```

pub mod correction;
pub mod export;
pub mod loader;
pub mod model;
