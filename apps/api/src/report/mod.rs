// Report extraction: recovers named sections from the model reply and
// formats them for the results page. Pure functions only; no I/O here.

pub mod format;
pub mod parser;
pub mod render;
pub mod shape;
