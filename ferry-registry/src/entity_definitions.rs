//! Entity definitions for the entity types the input path cares about.
//!
//! Only dimensions and the Bedrock vertical offset are tracked here. The
//! offset is how far Bedrock places an entity's reported position above the
//! Java one (eye height for players, seat height for boats and carts).

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Entity types that matter to the input translation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A player.
    Player,
    /// A regular horse.
    Horse,
    /// A donkey.
    Donkey,
    /// A mule.
    Mule,
    /// A skeleton horse.
    SkeletonHorse,
    /// A zombie horse.
    ZombieHorse,
    /// A camel.
    Camel,
    /// A llama. Part of the horse family but steered differently.
    Llama,
    /// A trader llama.
    TraderLlama,
    /// Any wooden boat.
    Boat,
    /// Any wooden boat with a chest.
    ChestBoat,
    /// A bamboo raft.
    Raft,
    /// A minecart.
    Minecart,
    /// A pig.
    Pig,
    /// A strider.
    Strider,
    /// Anything else.
    Other,
}

/// Static data for an entity type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityDefinition {
    /// The kind this definition describes.
    pub kind: EntityKind,
    /// Hitbox width.
    pub width: f32,
    /// Hitbox height.
    pub height: f32,
    /// Bedrock position offset above the Java position.
    pub offset: f32,
}

impl EntityDefinition {
    const fn new(kind: EntityKind, width: f32, height: f32, offset: f32) -> Self {
        Self {
            kind,
            width,
            height,
            offset,
        }
    }
}

/// Player definition. The offset is the eye height.
pub const PLAYER: EntityDefinition = EntityDefinition::new(EntityKind::Player, 0.6, 1.8, 1.62);
/// Horse definition.
pub const HORSE: EntityDefinition = EntityDefinition::new(EntityKind::Horse, 1.3965, 1.6, 0.0);
/// Donkey definition.
pub const DONKEY: EntityDefinition = EntityDefinition::new(EntityKind::Donkey, 1.3965, 1.5, 0.0);
/// Mule definition.
pub const MULE: EntityDefinition = EntityDefinition::new(EntityKind::Mule, 1.3965, 1.6, 0.0);
/// Skeleton horse definition.
pub const SKELETON_HORSE: EntityDefinition =
    EntityDefinition::new(EntityKind::SkeletonHorse, 1.3965, 1.6, 0.0);
/// Zombie horse definition.
pub const ZOMBIE_HORSE: EntityDefinition =
    EntityDefinition::new(EntityKind::ZombieHorse, 1.3965, 1.6, 0.0);
/// Camel definition.
pub const CAMEL: EntityDefinition = EntityDefinition::new(EntityKind::Camel, 1.7, 2.375, 0.0);
/// Llama definition.
pub const LLAMA: EntityDefinition = EntityDefinition::new(EntityKind::Llama, 0.9, 1.87, 0.0);
/// Trader llama definition.
pub const TRADER_LLAMA: EntityDefinition =
    EntityDefinition::new(EntityKind::TraderLlama, 0.9, 1.87, 0.0);
/// Boat definition. Bedrock renders boats 0.35 above where Java has them.
pub const BOAT: EntityDefinition = EntityDefinition::new(EntityKind::Boat, 1.6, 0.6, 0.35);
/// Chest boat definition.
pub const CHEST_BOAT: EntityDefinition =
    EntityDefinition::new(EntityKind::ChestBoat, 1.6, 0.6, 0.35);
/// Raft definition.
pub const RAFT: EntityDefinition = EntityDefinition::new(EntityKind::Raft, 1.6, 0.6, 0.35);
/// Minecart definition.
pub const MINECART: EntityDefinition =
    EntityDefinition::new(EntityKind::Minecart, 0.98, 0.7, 0.35);
/// Pig definition.
pub const PIG: EntityDefinition = EntityDefinition::new(EntityKind::Pig, 0.9, 0.9, 0.0);
/// Strider definition.
pub const STRIDER: EntityDefinition = EntityDefinition::new(EntityKind::Strider, 0.9, 1.7, 0.0);
/// Fallback for kinds without a dedicated definition.
pub const OTHER: EntityDefinition = EntityDefinition::new(EntityKind::Other, 0.0, 0.0, 0.0);

static BY_IDENTIFIER: phf::Map<&'static str, EntityKind> = phf_map! {
    "minecraft:player" => EntityKind::Player,
    "minecraft:horse" => EntityKind::Horse,
    "minecraft:donkey" => EntityKind::Donkey,
    "minecraft:mule" => EntityKind::Mule,
    "minecraft:skeleton_horse" => EntityKind::SkeletonHorse,
    "minecraft:zombie_horse" => EntityKind::ZombieHorse,
    "minecraft:camel" => EntityKind::Camel,
    "minecraft:llama" => EntityKind::Llama,
    "minecraft:trader_llama" => EntityKind::TraderLlama,
    "minecraft:boat" => EntityKind::Boat,
    "minecraft:oak_boat" => EntityKind::Boat,
    "minecraft:spruce_boat" => EntityKind::Boat,
    "minecraft:birch_boat" => EntityKind::Boat,
    "minecraft:jungle_boat" => EntityKind::Boat,
    "minecraft:acacia_boat" => EntityKind::Boat,
    "minecraft:cherry_boat" => EntityKind::Boat,
    "minecraft:dark_oak_boat" => EntityKind::Boat,
    "minecraft:pale_oak_boat" => EntityKind::Boat,
    "minecraft:mangrove_boat" => EntityKind::Boat,
    "minecraft:chest_boat" => EntityKind::ChestBoat,
    "minecraft:oak_chest_boat" => EntityKind::ChestBoat,
    "minecraft:spruce_chest_boat" => EntityKind::ChestBoat,
    "minecraft:birch_chest_boat" => EntityKind::ChestBoat,
    "minecraft:jungle_chest_boat" => EntityKind::ChestBoat,
    "minecraft:acacia_chest_boat" => EntityKind::ChestBoat,
    "minecraft:cherry_chest_boat" => EntityKind::ChestBoat,
    "minecraft:dark_oak_chest_boat" => EntityKind::ChestBoat,
    "minecraft:pale_oak_chest_boat" => EntityKind::ChestBoat,
    "minecraft:mangrove_chest_boat" => EntityKind::ChestBoat,
    "minecraft:bamboo_raft" => EntityKind::Raft,
    "minecraft:bamboo_chest_raft" => EntityKind::Raft,
    "minecraft:minecart" => EntityKind::Minecart,
    "minecraft:pig" => EntityKind::Pig,
    "minecraft:strider" => EntityKind::Strider,
};

impl EntityKind {
    /// Looks up a kind by its namespaced identifier. Unknown identifiers
    /// resolve to [`EntityKind::Other`].
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        BY_IDENTIFIER
            .get(identifier)
            .copied()
            .unwrap_or(EntityKind::Other)
    }

    /// The static definition for this kind.
    #[must_use]
    pub const fn definition(self) -> &'static EntityDefinition {
        match self {
            Self::Player => &PLAYER,
            Self::Horse => &HORSE,
            Self::Donkey => &DONKEY,
            Self::Mule => &MULE,
            Self::SkeletonHorse => &SKELETON_HORSE,
            Self::ZombieHorse => &ZOMBIE_HORSE,
            Self::Camel => &CAMEL,
            Self::Llama => &LLAMA,
            Self::TraderLlama => &TRADER_LLAMA,
            Self::Boat => &BOAT,
            Self::ChestBoat => &CHEST_BOAT,
            Self::Raft => &RAFT,
            Self::Minecart => &MINECART,
            Self::Pig => &PIG,
            Self::Strider => &STRIDER,
            Self::Other => &OTHER,
        }
    }
}
