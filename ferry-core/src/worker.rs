//! Per-session worker task.
//!
//! Each session is driven by exactly one task that applies its events in the
//! order they were sent. Ticks of one session never overlap, which is what
//! lets the translation path diff against session state without locking it.

use std::{sync::Arc, time::Instant};

use ferry_protocol::packets::{bedrock::SPlayerAuthInput, java::SEditBook};
use ferry_utils::{GameMode, locks::SyncRwLock};
use glam::Vec3;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{EntityFlags, Session, WorldView, on_input};

/// Something that happened to a session.
#[derive(Debug)]
pub enum SessionEvent {
    /// A `PlayerAuthInput` arrived from the client.
    Input {
        /// The packet.
        packet: Box<SPlayerAuthInput>,
        /// When it was received, on the monotonic clock.
        received_at: Instant,
    },
    /// The Java server finished spawning the player.
    Spawned {
        /// Java feet position of the player.
        position: Vec3,
    },
    /// The Java server changed the player's game mode.
    GameModeChanged(GameMode),
    /// The Java server granted or revoked flight.
    FlyCapabilityChanged(bool),
    /// The Java server updated the player's entity flags.
    PlayerFlagsChanged(EntityFlags),
    /// The player mounted a vehicle, or dismounted with `None`.
    Mounted(Option<i32>),
    /// The client edited a book.
    QueueBookEdit(SEditBook),
    /// A game tick passed (every 50 ms).
    GameTick {
        /// Haste effect level, 0 when absent.
        haste_level: i32,
        /// Mining fatigue effect level, 0 when absent.
        mining_fatigue_level: i32,
    },
}

/// Sending half of a session worker's event queue.
#[derive(Clone)]
pub struct SessionHandle {
    events: UnboundedSender<SessionEvent>,
}

impl SessionHandle {
    /// Queues an event. Returns false if the worker has stopped.
    pub fn send(&self, event: SessionEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// Queues a client input received now.
    pub fn send_input(&self, packet: SPlayerAuthInput) -> bool {
        self.send(SessionEvent::Input {
            packet: Box::new(packet),
            received_at: Instant::now(),
        })
    }
}

/// Owns a [`Session`] and applies its events one at a time.
pub struct SessionWorker<W> {
    session: Session,
    world: Arc<SyncRwLock<W>>,
    events: UnboundedReceiver<SessionEvent>,
    cancel_token: CancellationToken,
}

impl<W: WorldView + Send + Sync + 'static> SessionWorker<W> {
    /// Creates a worker and the handle used to feed it.
    #[must_use]
    pub fn new(
        session: Session,
        world: Arc<SyncRwLock<W>>,
        cancel_token: CancellationToken,
    ) -> (Self, SessionHandle) {
        let (events_tx, events) = mpsc::unbounded_channel();
        (
            Self {
                session,
                world,
                events,
                cancel_token,
            },
            SessionHandle { events: events_tx },
        )
    }

    /// Runs the worker on the tokio runtime.
    pub fn spawn(self) -> JoinHandle<Session> {
        tokio::spawn(self.run())
    }

    /// Applies events until every handle is dropped or the token is
    /// cancelled, then hands the session back.
    pub async fn run(mut self) -> Session {
        log::debug!("Session worker for {} started", self.session.username);

        loop {
            tokio::select! {
                biased;
                () = self.cancel_token.cancelled() => break,
                event = self.events.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
            }
        }

        log::debug!("Session worker for {} stopped", self.session.username);
        self.session
    }

    /// Applies a single event.
    pub fn handle(&mut self, event: SessionEvent) {
        let session = &mut self.session;
        match event {
            SessionEvent::Input {
                packet,
                received_at,
            } => {
                let world = self.world.read();
                on_input(session, &*world, &packet, received_at);
            }
            SessionEvent::Spawned { position } => session.spawn(position),
            SessionEvent::GameModeChanged(game_mode) => session.game_mode = game_mode,
            SessionEvent::FlyCapabilityChanged(can_fly) => session.can_fly = can_fly,
            SessionEvent::PlayerFlagsChanged(flags) => session.player.flags = flags,
            SessionEvent::Mounted(vehicle_id) => session.player.vehicle_id = vehicle_id,
            SessionEvent::QueueBookEdit(packet) => session.book_edit.set_packet(packet),
            SessionEvent::GameTick {
                haste_level,
                mining_fatigue_level,
            } => session.tick_arm_animation(haste_level, mining_fatigue_level),
        }
    }

    /// The session being driven.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }
}
