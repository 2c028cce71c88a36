//! Render pass and frame-context publisher.
//!
//! For every entity with a [`Sprite`] and a [`MapPosition`], append a draw
//! command to the [`DrawBuffer`] and publish the entity's bounding box into
//! the [`FrameContext`]. Both are cleared first, so entries for entities
//! removed since the last tick never linger.
//!
//! This system runs before the movement system, so the published geometry
//! always reflects start-of-tick positions.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::drawbuffer::DrawBuffer;
use crate::resources::framecontext::FrameContext;

/// Draw all renderable entities and publish their geometry for collision.
pub fn render_system(
    query: Query<(Entity, &Sprite, &MapPosition)>,
    mut context: ResMut<FrameContext>,
    mut draw: ResMut<DrawBuffer>,
) {
    context.begin_frame();
    draw.begin_frame();

    for (entity, sprite, position) in query.iter() {
        draw.push(position.grid(), sprite.tex_key.clone());
        context.publish(entity, sprite.bounding_box(position.pos));
    }
}
