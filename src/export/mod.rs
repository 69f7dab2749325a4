/// Export formatters
///
/// Pure, deterministic transforms from a loaded project aggregate to an
/// external document. No I/O and no mutation; callers are expected to pass
/// already-validated, persisted data.

pub mod css;
pub mod json;

pub use css::render_css;
pub use json::BrandExport;
