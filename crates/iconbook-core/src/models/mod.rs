mod catalog;
mod icon;

pub use catalog::{CodepointMap, IconCatalog, PrepareReport, TagMap};
pub use icon::{IconRecord, IconSize, IconStyle, StyleVariants, SvgVariants};
