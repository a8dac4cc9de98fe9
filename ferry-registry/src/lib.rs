//! Static catalogs the translator looks things up in: entity definitions,
//! vehicle kinds and block state mappings.

pub mod block_mappings;
pub mod entity_definitions;
pub mod vehicle;

pub use block_mappings::BlockMappings;
pub use entity_definitions::{EntityDefinition, EntityKind};
pub use vehicle::VehicleKind;
