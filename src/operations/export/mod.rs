mod path_export;

pub use path_export::{PathExport, DEFAULT_PIXELS_PER_METER};
