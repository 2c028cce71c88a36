//! Snake movement and collision system.
//!
//! Runs once per tick on the single [`Player`] entity, in a fixed order:
//!
//! 1. Direction intake: drain the tick's input events and validate each
//!    candidate direction against the current direction and the neck.
//! 2. Collision detection: scan the geometry the render pass published
//!    into the [`FrameContext`] and find the first entity overlapping the
//!    head.
//! 3. Collision resolution: fruit is consumed and grows the tail; wall or
//!    body contact stops the snake for good; an entity with neither marker
//!    was already removed this tick and is ignored.
//! 4. Head advance: continuous sub-cell motion plus a grid-crossing
//!    detector that records the cell the head just left.
//! 5. Tail propagation: each segment teleports to where its predecessor
//!    was one grid-crossing event ago, stopping early once the chain has
//!    caught up.
//!
//! Detection runs against start-of-tick positions because the render pass
//! publishes before any movement happens.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::fruit::Fruit;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::segment::Segment;
use crate::components::sprite::{Sprite, SpriteBox};
use crate::components::tailpiece::TailPiece;
use crate::components::wall::Wall;
use crate::events::input::{Direction, InputEvent};
use crate::game;
use crate::maths::Cell;
use crate::resources::framecontext::FrameContext;
use crate::resources::input::InputQueue;

type SegmentQuery<'w, 's> = Query<'w, 's, (&'static mut MapPosition, &'static mut Segment)>;

/// Per-tick snake update: input, collision, head advance, tail propagation.
#[allow(clippy::too_many_arguments)]
pub fn move_player_system(
    mut player_q: Query<&mut Player>,
    mut segment_q: SegmentQuery,
    sprite_q: Query<&Sprite>,
    fruit_q: Query<(), With<Fruit>>,
    wall_q: Query<(), With<Wall>>,
    tailpiece_q: Query<(), With<TailPiece>>,
    mut input: ResMut<InputQueue>,
    context: Res<FrameContext>,
    mut commands: Commands,
) {
    let Ok(mut player) = player_q.single_mut() else {
        return;
    };

    for event in input.drain() {
        if let InputEvent::Turn(candidate) = event {
            try_change_direction(&mut player, candidate, &segment_q);
        }
    }

    resolve_collision(
        &mut player,
        &context,
        &segment_q,
        &sprite_q,
        &fruit_q,
        &wall_q,
        &tailpiece_q,
        &mut commands,
    );
    move_head(&player, &mut segment_q);
    move_tail(&player, &mut segment_q);
}

/// Apply a candidate direction if it is legal.
///
/// A candidate equal to the exact reverse of the current direction is always
/// rejected. With at least one body segment, the candidate is additionally
/// checked against the neck: with `rel` the offset from head cell to first
/// segment cell, the turn is only accepted when `rel + candidate` is
/// non-zero on both axes, otherwise the head would retrace into its own
/// neck on the next crossing. A head-only snake turns freely.
fn try_change_direction(player: &mut Player, candidate: Direction, segment_q: &SegmentQuery) {
    if candidate == player.direction.opposite() {
        return;
    }

    let Some(&first) = player.tail.first() else {
        // No tail yet: free to turn.
        player.direction = candidate;
        return;
    };

    let Ok((head_pos, _)) = segment_q.get(player.head) else {
        return;
    };
    let Ok((first_pos, _)) = segment_q.get(first) else {
        return;
    };

    let adjusted = (first_pos.grid() - head_pos.grid()) + candidate.delta();
    if adjusted.x != 0 && adjusted.y != 0 {
        debug!("direction changed to {:?}", candidate);
        player.direction = candidate;
    }
}

/// First published entity other than the head whose box overlaps `head_box`.
///
/// Publish order is the iteration order of the render pass, which makes the
/// result deterministic for a given world.
fn collided_entity(head: Entity, head_box: &SpriteBox, context: &FrameContext) -> Option<Entity> {
    context
        .renderables()
        .iter()
        .find(|(entity, bounds)| *entity != head && bounds.intersects(head_box))
        .map(|(entity, _)| *entity)
}

#[allow(clippy::too_many_arguments)]
fn resolve_collision(
    player: &mut Player,
    context: &FrameContext,
    segment_q: &SegmentQuery,
    sprite_q: &Query<&Sprite>,
    fruit_q: &Query<(), With<Fruit>>,
    wall_q: &Query<(), With<Wall>>,
    tailpiece_q: &Query<(), With<TailPiece>>,
    commands: &mut Commands,
) {
    let head = player.head;
    let Ok((head_pos, _)) = segment_q.get(head) else {
        return;
    };
    let Ok(head_sprite) = sprite_q.get(head) else {
        return;
    };
    let head_box = head_sprite.bounding_box(head_pos.pos);

    let Some(hit) = collided_entity(head, &head_box, context) else {
        return;
    };

    if fruit_q.contains(hit) {
        commands.entity(hit).try_despawn();
        // Grow on the cell the tail end just vacated, not its current
        // cell: the spawn is deferred, so same-tick propagation cannot
        // move the new segment out from under a sub-cell head.
        let tail_end = player.tail.last().copied().unwrap_or(head);
        if let Ok((_, end_segment)) = segment_q.get(tail_end) {
            let segment = game::attach_tail(commands, end_segment.old_position);
            player.tail.push(segment);
            info!("fruit eaten, tail length {}", player.tail.len());
        }
    } else if wall_q.contains(hit) || tailpiece_q.contains(hit) {
        player.speed = 0.0;
        info!("snake stopped by {:?}", hit);
    }
    // Neither marker: the entity was already removed earlier this tick.
}

/// Advance the head continuously and detect grid crossings.
///
/// After moving by `direction * speed`, compare the head's cell to its
/// recorded `old_position`. When the per-axis distance exceeds one cell on
/// any axis, or changed on both axes at once, the head has fully crossed
/// into a new cell: record the cell it occupied just before the crossing.
/// Fires once per full-cell transition, not every sub-cell tick.
fn move_head(player: &Player, segment_q: &mut SegmentQuery) {
    let Ok((mut pos, mut segment)) = segment_q.get_mut(player.head) else {
        return;
    };

    pos.move_by(player.direction.as_vec2() * player.speed);

    let actual = pos.grid();
    if crossed_cell(actual - segment.old_position) {
        segment.old_position = actual - player.direction.delta();
    }
}

fn crossed_cell(diff: Cell) -> bool {
    diff.x.abs() > 1 || diff.y.abs() > 1 || (diff.x != 0 && diff.y != 0)
}

/// Lag-one follow-the-leader propagation along the tail chain.
///
/// Walks head-adjacent to tail-end. Each segment's target is its
/// predecessor's `old_position`; a segment already sitting on its target
/// means the chain has caught up (or the segment was just grown), so
/// propagation stops there. Otherwise the segment records its own cell and
/// teleports onto the target.
fn move_tail(player: &Player, segment_q: &mut SegmentQuery) {
    let mut target = match segment_q.get(player.head) {
        Ok((_, segment)) => segment.old_position,
        Err(_) => return,
    };

    for &entity in player.tail.iter() {
        let Ok((mut pos, mut segment)) = segment_q.get_mut(entity) else {
            break;
        };
        let current = pos.grid();
        if current == target {
            break;
        }
        segment.old_position = current;
        pos.snap_to(target);
        target = current;
    }
}
