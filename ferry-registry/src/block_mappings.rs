//! Java block state to Bedrock runtime id mappings.

use ferry_utils::BlockStateId;
use rustc_hash::FxHashMap;

/// Maps Java block states to Bedrock block runtime ids.
///
/// The table itself is built elsewhere from the palette data; this type only
/// answers lookups. States missing from the table map to the air runtime id.
#[derive(Debug, Clone, Default)]
pub struct BlockMappings {
    java_to_bedrock: FxHashMap<BlockStateId, u32>,
    air_runtime_id: u32,
}

impl BlockMappings {
    /// Creates an empty table whose fallback is `air_runtime_id`.
    #[must_use]
    pub fn new(air_runtime_id: u32) -> Self {
        Self {
            java_to_bedrock: FxHashMap::default(),
            air_runtime_id,
        }
    }

    /// Registers a mapping, replacing any previous one for `state`.
    pub fn insert(&mut self, state: BlockStateId, runtime_id: u32) {
        self.java_to_bedrock.insert(state, runtime_id);
    }

    /// Returns the Bedrock runtime id for a Java block state.
    #[must_use]
    pub fn bedrock_runtime_id(&self, state: BlockStateId) -> u32 {
        match self.java_to_bedrock.get(&state) {
            Some(runtime_id) => *runtime_id,
            None => {
                if !state.is_air() {
                    log::trace!("No Bedrock mapping for block state {}", state.0);
                }
                self.air_runtime_id
            }
        }
    }
}
