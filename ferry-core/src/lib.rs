//! The per-tick input reconciliation engine.
//!
//! Bedrock clients send one `PlayerAuthInput` per tick. This crate turns it
//! into the separate Java movement, input, command and ability packets the
//! server expects, tracking just enough per-session state to avoid sending
//! anything twice.

pub mod config;
pub mod entity;
pub mod session;
pub mod sink;
pub mod translate;
pub mod worker;
pub mod world;

pub use config::{CooldownPreference, FerryConfig};
pub use entity::{Entity, EntityFlags, SessionPlayerEntity};
pub use session::Session;
pub use sink::{ChannelSink, PacketSink};
pub use translate::on_input;
pub use worker::{SessionEvent, SessionHandle, SessionWorker};
pub use world::{WorldSnapshot, WorldView};
