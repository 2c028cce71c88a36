//! Tick integration tests for the snake pipeline: render publication,
//! direction intake, head advance, tail propagation, collision resolution,
//! and fruit lifecycle.

use bevy_ecs::prelude::*;

use gridsnake::components::fruit::Fruit;
use gridsnake::components::mapposition::MapPosition;
use gridsnake::components::player::Player;
use gridsnake::components::segment::Segment;
use gridsnake::components::sprite::Sprite;
use gridsnake::components::tailpiece::TailPiece;
use gridsnake::components::wall::Wall;
use gridsnake::events::input::{Direction, InputEvent};
use gridsnake::game;
use gridsnake::maths::{Cell, Vec2};
use gridsnake::resources::drawbuffer::DrawBuffer;
use gridsnake::resources::framecontext::FrameContext;
use gridsnake::resources::gameconfig::GameConfig;
use gridsnake::resources::input::InputQueue;
use gridsnake::resources::runstate::RunState;
use gridsnake::systems::fruit::fruit_lifecycle_system;
use gridsnake::systems::movement::move_player_system;
use gridsnake::systems::render::render_system;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(width: u32, height: u32, speed: f32) -> World {
    let mut world = World::new();
    let mut config = GameConfig::new();
    config.grid_width = width;
    config.grid_height = height;
    config.speed = speed;
    world.insert_resource(config);
    world.insert_resource(FrameContext::default());
    world.insert_resource(DrawBuffer::default());
    world.insert_resource(InputQueue::default());
    world.insert_resource(RunState::default());
    world
}

/// Render pass + movement, the per-tick core without fruit respawn.
fn core_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((render_system, move_player_system).chain());
    schedule
}

/// The full fixed-order tick: render, movement, fruit lifecycle.
fn full_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((render_system, move_player_system, fruit_lifecycle_system).chain());
    schedule
}

fn spawn_player_at(world: &mut World, cell: Cell, speed: f32) -> Entity {
    let head = world
        .spawn((
            Segment::new(cell),
            Sprite::cell("player"),
            MapPosition::at_cell(cell),
        ))
        .id();
    world.entity_mut(head).insert(Player::new(head, speed));
    head
}

fn spawn_tail_segment(world: &mut World, player: Entity, cell: Cell) -> Entity {
    let segment = world
        .spawn((
            TailPiece,
            Segment::new(cell),
            Sprite::cell("tail"),
            MapPosition::at_cell(cell),
        ))
        .id();
    world.get_mut::<Player>(player).unwrap().tail.push(segment);
    segment
}

fn push_turn(world: &mut World, direction: Direction) {
    world
        .resource_mut::<InputQueue>()
        .push(InputEvent::Turn(direction));
}

fn pos_of(world: &World, entity: Entity) -> Vec2 {
    world.get::<MapPosition>(entity).unwrap().pos
}

fn grid_of(world: &World, entity: Entity) -> Cell {
    world.get::<MapPosition>(entity).unwrap().grid()
}

fn fruit_entities(world: &mut World) -> Vec<Entity> {
    world
        .query_filtered::<Entity, With<Fruit>>()
        .iter(world)
        .collect()
}

#[test]
fn head_advances_by_direction_times_speed() {
    let mut world = make_world(32, 24, 0.25);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 0.25);
    let mut schedule = core_schedule();

    schedule.run(&mut world);
    let pos = pos_of(&world, head);
    assert!(approx_eq(pos.x, 5.25));
    assert!(approx_eq(pos.y, 5.0));

    for _ in 0..3 {
        schedule.run(&mut world);
    }
    let pos = pos_of(&world, head);
    assert!(approx_eq(pos.x, 6.0));
    assert!(approx_eq(pos.y, 5.0));
}

#[test]
fn stopped_player_never_moves() {
    let mut world = make_world(32, 24, 0.0);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 0.0);
    let mut schedule = core_schedule();

    for _ in 0..10 {
        schedule.run(&mut world);
    }
    assert_eq!(pos_of(&world, head), Vec2::new(5.0, 5.0));
}

#[test]
fn head_only_snake_turns_freely() {
    let mut world = make_world(32, 24, 0.25);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 0.25);

    push_turn(&mut world, Direction::Up);
    core_schedule().run(&mut world);

    assert_eq!(
        world.get::<Player>(head).unwrap().direction,
        Direction::Up
    );
    let pos = pos_of(&world, head);
    assert!(approx_eq(pos.y, 4.75));
}

#[test]
fn exact_reverse_is_always_rejected() {
    let mut world = make_world(32, 24, 0.25);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 0.25);

    push_turn(&mut world, Direction::Left);
    core_schedule().run(&mut world);

    assert_eq!(
        world.get::<Player>(head).unwrap().direction,
        Direction::Right
    );
}

#[test]
fn all_queued_events_are_processed_in_order() {
    let mut world = make_world(32, 24, 0.25);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 0.25);

    // Up then Left within one tick: Up is applied first, then Left is a
    // legal turn relative to Up.
    push_turn(&mut world, Direction::Up);
    push_turn(&mut world, Direction::Left);
    core_schedule().run(&mut world);

    assert_eq!(
        world.get::<Player>(head).unwrap().direction,
        Direction::Left
    );
    assert!(world.resource::<InputQueue>().is_empty());
}

#[test]
fn turn_into_the_neck_is_rejected() {
    let mut world = make_world(32, 24, 0.25);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 0.25);
    // Tail directly below the head, as right after an Up -> Right turn.
    spawn_tail_segment(&mut world, head, Cell::new(5, 6));

    push_turn(&mut world, Direction::Down);
    core_schedule().run(&mut world);

    assert_eq!(
        world.get::<Player>(head).unwrap().direction,
        Direction::Right
    );
}

#[test]
fn turn_away_from_the_neck_is_accepted() {
    let mut world = make_world(32, 24, 0.25);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 0.25);
    // Tail directly behind the head.
    spawn_tail_segment(&mut world, head, Cell::new(4, 5));

    push_turn(&mut world, Direction::Up);
    core_schedule().run(&mut world);

    assert_eq!(
        world.get::<Player>(head).unwrap().direction,
        Direction::Up
    );
}

#[test]
fn tail_follows_lag_one_behind_the_head() {
    let mut world = make_world(32, 24, 1.0);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 1.0);
    let a = spawn_tail_segment(&mut world, head, Cell::new(4, 5));
    let b = spawn_tail_segment(&mut world, head, Cell::new(3, 5));
    let mut schedule = core_schedule();

    for _ in 0..3 {
        schedule.run(&mut world);
    }

    assert_eq!(grid_of(&world, head), Cell::new(8, 5));
    assert_eq!(grid_of(&world, a), Cell::new(7, 5));
    assert_eq!(grid_of(&world, b), Cell::new(6, 5));
    // Nothing collided along the way.
    assert!(approx_eq(world.get::<Player>(head).unwrap().speed, 1.0));
}

#[test]
fn fruit_is_consumed_grown_and_respawned() {
    let mut world = make_world(7, 7, 1.0);
    game::setup_map(&mut world, None);
    let head = {
        let mut players = world.query::<(Entity, &Player)>();
        players.single(&world).unwrap().0
    };
    // Fruit one cell ahead of the head at the centre.
    let fruit = world.spawn(game::fruit_bundle(Cell::new(4, 3))).id();
    let mut schedule = full_schedule();

    // Tick 1: head walks into the fruit's cell; no overlap yet at
    // detection time (start-of-tick positions).
    schedule.run(&mut world);
    assert!(world.get_entity(fruit).is_ok());

    // Tick 2: overlap detected, fruit consumed, tail grown, replacement
    // spawned by the lifecycle check after resolution.
    schedule.run(&mut world);
    assert!(world.get_entity(fruit).is_err());
    let fruits = fruit_entities(&mut world);
    assert_eq!(fruits.len(), 1);
    assert_ne!(fruits[0], fruit);
    let tail_len = world.get::<Player>(head).unwrap().tail.len();
    assert_eq!(tail_len, 1);

    // Tick 3: the grown segment starts trailing the head lag-one.
    schedule.run(&mut world);
    assert_eq!(grid_of(&world, head), Cell::new(6, 3));
    let first = world.get::<Player>(head).unwrap().tail[0];
    assert_eq!(grid_of(&world, first), Cell::new(5, 3));
}

#[test]
fn eating_at_sub_cell_speed_does_not_stop_the_snake() {
    // Default-config speed: the head needs four ticks per cell, so it is
    // still inside the fruit's cell on the tick after growing. The new
    // segment must land on the cell behind the head, not under it.
    let mut world = make_world(32, 24, 0.25);
    let head = spawn_player_at(&mut world, Cell::new(3, 3), 0.25);
    world.spawn(game::fruit_bundle(Cell::new(4, 3)));
    let mut schedule = full_schedule();

    for _ in 0..12 {
        schedule.run(&mut world);
    }

    let player = world.get::<Player>(head).unwrap();
    assert!(!player.is_stopped());
    assert!(!player.tail.is_empty());
    let first = player.tail[0];
    let pos = pos_of(&world, head);
    assert!(approx_eq(pos.x, 6.0));
    assert_eq!(grid_of(&world, first), Cell::new(5, 3));
}

#[test]
fn wall_contact_stops_the_snake_for_good() {
    let mut world = make_world(5, 5, 1.0);
    game::setup_map(&mut world, None);
    let head = {
        let mut players = world.query::<(Entity, &Player)>();
        players.single(&world).unwrap().0
    };
    let mut schedule = core_schedule();

    // Centre (2,2) heading right; reaches the border column, then stops.
    for _ in 0..3 {
        schedule.run(&mut world);
    }
    let player = world.get::<Player>(head).unwrap();
    assert!(player.is_stopped());
    let frozen = grid_of(&world, head);
    assert_eq!(frozen, Cell::new(4, 2));

    for _ in 0..5 {
        schedule.run(&mut world);
    }
    assert_eq!(grid_of(&world, head), frozen);
}

#[test]
fn body_contact_stops_the_snake() {
    let mut world = make_world(32, 24, 1.0);
    let head = spawn_player_at(&mut world, Cell::new(3, 3), 1.0);
    // A body segment ahead of the head, as in a tight loop.
    world.spawn((
        TailPiece,
        Segment::new(Cell::new(4, 3)),
        Sprite::cell("tail"),
        MapPosition::at_cell(Cell::new(4, 3)),
    ));
    let mut schedule = core_schedule();

    schedule.run(&mut world); // moves onto (4,3)
    schedule.run(&mut world); // overlap detected at start of tick
    assert!(world.get::<Player>(head).unwrap().is_stopped());
    assert_eq!(grid_of(&world, head), Cell::new(4, 3));
}

#[test]
fn render_pass_publishes_start_of_tick_geometry() {
    let mut world = make_world(32, 24, 0.5);
    let head = spawn_player_at(&mut world, Cell::new(5, 5), 0.5);
    let mut schedule = core_schedule();

    schedule.run(&mut world);

    // The context still holds the pre-movement box even though the head
    // has already advanced.
    let context = world.resource::<FrameContext>();
    let (entity, bounds) = context.renderables()[0];
    assert_eq!(entity, head);
    assert!(approx_eq(bounds.min.x, 5.0));
    assert!(approx_eq(pos_of(&world, head).x, 5.5));
}

#[test]
fn stale_entries_do_not_survive_a_frame() {
    let mut world = make_world(32, 24, 0.0);
    spawn_player_at(&mut world, Cell::new(5, 5), 0.0);
    let extra = world
        .spawn((Sprite::cell("fruit"), MapPosition::at_cell(Cell::new(2, 2))))
        .id();
    let mut schedule = core_schedule();

    schedule.run(&mut world);
    assert_eq!(world.resource::<FrameContext>().renderables().len(), 2);

    world.despawn(extra);
    schedule.run(&mut world);
    let context = world.resource::<FrameContext>();
    assert_eq!(context.renderables().len(), 1);
    assert!(context.renderables().iter().all(|(e, _)| *e != extra));
}

#[test]
fn lifecycle_keeps_exactly_one_fruit_on_walkable_ground() {
    let mut world = make_world(6, 6, 0.0);
    game::setup_map(&mut world, None);
    let mut schedule = full_schedule();

    schedule.run(&mut world);
    let fruits = fruit_entities(&mut world);
    assert_eq!(fruits.len(), 1);

    let cell = grid_of(&world, fruits[0]);
    assert!(cell.x >= 1 && cell.x <= 4 && cell.y >= 1 && cell.y <= 4);
    let mut walls = world.query_filtered::<&MapPosition, With<Wall>>();
    assert!(walls.iter(&world).all(|position| position.grid() != cell));

    // Stable across ticks while nothing eats it.
    for _ in 0..3 {
        schedule.run(&mut world);
    }
    assert_eq!(fruit_entities(&mut world), fruits);
}
