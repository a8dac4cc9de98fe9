//! World queries the input path depends on but does not own.

use ferry_utils::BlockStateId;
use glam::IVec3;
use rustc_hash::FxHashMap;

use crate::Entity;

/// Read access to the entity table and collision state of a session's world.
pub trait WorldView {
    /// Looks up an entity by Java id.
    fn entity(&self, entity_id: i32) -> Option<&Entity>;
    /// Whether the session's player is in water.
    fn is_player_in_water(&self) -> bool;
    /// Whether the session's player has to stay crawling at its position
    /// because there is no headroom to stand up.
    fn must_player_crawl_here(&self) -> bool;
    /// The Java block state at a block coordinate.
    fn block_state_at(&self, position: IVec3) -> BlockStateId;
}

/// An in-memory [`WorldView`].
#[derive(Debug, Default)]
pub struct WorldSnapshot {
    entities: FxHashMap<i32, Entity>,
    blocks: FxHashMap<IVec3, BlockStateId>,
    /// Result of [`WorldView::is_player_in_water`].
    pub player_in_water: bool,
    /// Result of [`WorldView::must_player_crawl_here`].
    pub player_must_crawl: bool,
}

impl WorldSnapshot {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entity.
    pub fn insert_entity(&mut self, entity: Entity) {
        self.entities.insert(entity.entity_id, entity);
    }

    /// Sets a block. Air removes the entry.
    pub fn set_block(&mut self, position: IVec3, state: BlockStateId) {
        if state.is_air() {
            self.blocks.remove(&position);
        } else {
            self.blocks.insert(position, state);
        }
    }
}

impl WorldView for WorldSnapshot {
    fn entity(&self, entity_id: i32) -> Option<&Entity> {
        self.entities.get(&entity_id)
    }

    fn is_player_in_water(&self) -> bool {
        self.player_in_water
    }

    fn must_player_crawl_here(&self) -> bool {
        self.player_must_crawl
    }

    fn block_state_at(&self, position: IVec3) -> BlockStateId {
        self.blocks
            .get(&position)
            .copied()
            .unwrap_or(BlockStateId::AIR)
    }
}
