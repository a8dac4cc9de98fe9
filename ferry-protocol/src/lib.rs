//! Structured packet types for both sides of the bridge.
//!
//! Wire encoding lives in the transport layer; these types are what the
//! decoders produce and the encoders consume.

pub mod packets;

pub use packets::{bedrock::BedrockPacket, java::JavaPacket};
