//! Document model types shared across the conversion pipeline.

mod audit;
mod element;
mod line;
mod paragraph;

pub use audit::AuditEntry;
pub use element::ElementType;
pub use line::ClassifiedLine;
pub use paragraph::{ParagraphRecord, RunEmphasis, StyledRun};

/// Identifier of a character or paragraph style in the style header.
pub type StyleId = u32;
