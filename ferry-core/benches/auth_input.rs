#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use ferry_core::{
    ChannelSink, Entity, EntityFlags, FerryConfig, Session, SessionPlayerEntity, WorldSnapshot,
    on_input,
};
use ferry_protocol::packets::bedrock::{InputFlags, SPlayerAuthInput};
use ferry_registry::{BlockMappings, EntityKind};
use glam::{Vec2, Vec3};
use smallvec::smallvec;
use std::{
    hint::black_box,
    sync::Arc,
    time::{Duration, Instant},
};

const PLAYER_ID: i32 = 1;
const BOAT_ID: i32 = 2;

fn spawned_session() -> Session {
    // Receivers are dropped; sends fail fast instead of piling up.
    let (sink, _java, _bedrock) = ChannelSink::new();
    let mut session = Session::new(
        "bench",
        SessionPlayerEntity::new(PLAYER_ID, 1),
        Arc::new(FerryConfig::default()),
        Arc::new(BlockMappings::new(0)),
        Arc::new(sink),
    );
    session.spawn(Vec3::new(0.0, 64.0, 0.0));
    session
}

fn input(position: Vec3, flags: InputFlags) -> SPlayerAuthInput {
    SPlayerAuthInput {
        rotation: Vec3::ZERO,
        position,
        motion: Vec2::ZERO,
        analog_move_vector: Vec2::ZERO,
        input_data: flags,
        tick: 0,
        delta: Vec3::ZERO,
        item_use_transaction: None,
        player_actions: Vec::new(),
    }
}

fn bench_idle(c: &mut Criterion) {
    let mut session = spawned_session();
    let world = WorldSnapshot::new();
    let packet = input(
        Vec3::new(0.0, 64.0 + session.config().player_eye_height, 0.0),
        InputFlags::empty(),
    );
    let now = Instant::now();

    c.bench_function("auth_input_idle", |b| {
        b.iter(|| on_input(&mut session, &world, black_box(&packet), now));
    });
}

fn bench_walking(c: &mut Criterion) {
    let mut session = spawned_session();
    let world = WorldSnapshot::new();
    let eye = session.config().player_eye_height;
    // Two points a step apart, so every tick is an accepted move.
    let packets = [
        input(Vec3::new(0.0, 64.0 + eye, 0.0), InputFlags::empty()),
        input(
            Vec3::new(0.2, 64.0 + eye, 0.0),
            InputFlags::SPRINTING | InputFlags::VERTICAL_COLLISION,
        ),
    ];
    let now = Instant::now();
    let mut tick = 0_usize;

    c.bench_function("auth_input_walking", |b| {
        b.iter(|| {
            tick += 1;
            on_input(&mut session, &world, black_box(&packets[tick % 2]), now);
        });
    });
}

fn bench_steering_boat(c: &mut Criterion) {
    let mut session = spawned_session();
    let mut world = WorldSnapshot::new();
    world.insert_entity(Entity {
        entity_id: BOAT_ID,
        geyser_id: 2,
        kind: EntityKind::Boat,
        position: Vec3::new(0.0, 62.0, 0.0),
        yaw: 0.0,
        pitch: 0.0,
        on_ground: false,
        flags: EntityFlags::empty(),
        passengers: smallvec![PLAYER_ID],
        vehicle_id: None,
    });
    session.player.vehicle_id = Some(BOAT_ID);

    let mut packets = [
        input(Vec3::ZERO, InputFlags::empty()),
        input(Vec3::ZERO, InputFlags::JUMPING),
    ];
    packets[0].analog_move_vector = Vec2::new(0.0, 1.0);
    packets[1].analog_move_vector = Vec2::new(0.5, 1.0);
    let start = Instant::now();
    let mut tick = 0_u64;

    c.bench_function("auth_input_steering_boat", |b| {
        b.iter(|| {
            tick += 1;
            let now = start + Duration::from_millis(tick * 50);
            on_input(&mut session, &world, black_box(&packets[usize::from(tick % 2 == 1)]), now);
        });
    });
}

criterion_group!(benches, bench_idle, bench_walking, bench_steering_boat);
criterion_main!(benches);
