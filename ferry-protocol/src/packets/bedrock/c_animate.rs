use serde::{Deserialize, Serialize};

/// Animation played by [`CAnimate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimateAction {
    /// Main hand swing.
    SwingArm,
    /// Wake up from a bed.
    WakeUp,
    /// Critical hit particles.
    CriticalHit,
}

/// Clientbound `AnimatePacket`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CAnimate {
    /// Bedrock runtime id of the animated entity.
    pub runtime_entity_id: u64,
    /// The animation.
    pub action: AnimateAction,
}
