//! Card system: printed faces, orientation, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `TreeType`: Apple, pear or plum
//! - `CardDefinition`: Immutable six-tree card face
//! - `Orientation`: Rotation state with its permutation table
//! - `Card`: A dealt card with orientation and board position
//! - `CardCatalog`: The 18 standard faces

pub mod definition;
pub mod instance;
pub mod orientation;
pub mod registry;

pub use definition::{CardDefinition, TreeType, TREES_PER_CARD};
pub use instance::Card;
pub use orientation::Orientation;
pub use registry::{CardCatalog, CATALOG_SIZE};
