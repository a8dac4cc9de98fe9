//! Outbound packet queues.
//!
//! Sending never blocks the translation path: packets are enqueued and the
//! transports drain them at their own pace.

use ferry_protocol::{BedrockPacket, JavaPacket};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Fire-and-forget packet output for one session.
pub trait PacketSink: Send + Sync {
    /// Enqueues a packet for the Java server.
    fn send_java(&self, packet: JavaPacket);
    /// Enqueues a packet for the Bedrock client.
    fn send_bedrock(&self, packet: BedrockPacket);
}

/// A [`PacketSink`] backed by unbounded tokio channels.
pub struct ChannelSink {
    java: UnboundedSender<JavaPacket>,
    bedrock: UnboundedSender<BedrockPacket>,
}

impl ChannelSink {
    /// Creates a sink and the receivers the transports read from.
    #[must_use]
    pub fn new() -> (
        Self,
        UnboundedReceiver<JavaPacket>,
        UnboundedReceiver<BedrockPacket>,
    ) {
        let (java, java_rx) = mpsc::unbounded_channel();
        let (bedrock, bedrock_rx) = mpsc::unbounded_channel();
        (Self { java, bedrock }, java_rx, bedrock_rx)
    }
}

impl PacketSink for ChannelSink {
    fn send_java(&self, packet: JavaPacket) {
        if let Err(err) = self.java.send(packet) {
            log::debug!("Java connection closed, dropping {:?}", err.0);
        }
    }

    fn send_bedrock(&self, packet: BedrockPacket) {
        if let Err(err) = self.bedrock.send(packet) {
            log::debug!("Bedrock connection closed, dropping {:?}", err.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use ferry_protocol::packets::java::{Hand, SSwing};

    use super::*;

    #[test]
    fn send_after_receiver_dropped_is_absorbed() {
        let (sink, java_rx, bedrock_rx) = ChannelSink::new();
        drop(java_rx);
        drop(bedrock_rx);

        sink.send_java(SSwing { hand: Hand::MainHand }.into());
    }

    #[test]
    fn packets_arrive_in_order() {
        let (sink, mut java_rx, _bedrock_rx) = ChannelSink::new();
        sink.send_java(SSwing { hand: Hand::MainHand }.into());
        sink.send_java(SSwing { hand: Hand::OffHand }.into());

        assert_eq!(
            java_rx.try_recv().ok(),
            Some(SSwing { hand: Hand::MainHand }.into())
        );
        assert_eq!(
            java_rx.try_recv().ok(),
            Some(SSwing { hand: Hand::OffHand }.into())
        );
        assert!(java_rx.try_recv().is_err());
    }
}
