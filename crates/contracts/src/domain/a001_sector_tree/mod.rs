pub mod aggregate;
pub mod flatten;

pub use aggregate::{Category, Leaf, SectorTree, SectorTreeError, Subcategory};
pub use flatten::{flatten, OptionGroup, SelectableOption, INDENT};
