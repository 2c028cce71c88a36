//! Tick-scoped frame context resource.
//!
//! The render pass publishes every renderable entity's bounding geometry
//! here before any movement happens; the movement system reads it back in
//! the same tick to detect collisions against start-of-tick positions.
//! Single writer, single reader, no cross-tick retention: the publisher
//! clears the list at the start of every render pass, so entries for
//! entities removed last tick never linger.

use bevy_ecs::prelude::{Entity, Resource};

use crate::components::sprite::SpriteBox;

/// Per-tick blackboard carrying the published renderable geometry.
#[derive(Resource, Debug, Default)]
pub struct FrameContext {
    renderables: Vec<(Entity, SpriteBox)>,
}

impl FrameContext {
    /// Drop last tick's entries. Called once at the start of the render pass.
    pub fn begin_frame(&mut self) {
        self.renderables.clear();
    }

    /// Record one entity's bounding box for this tick.
    pub fn publish(&mut self, entity: Entity, bounds: SpriteBox) {
        self.renderables.push((entity, bounds));
    }

    /// Published entries in publish order.
    pub fn renderables(&self) -> &[(Entity, SpriteBox)] {
        &self.renderables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::Sprite;
    use crate::maths::Vec2;
    use bevy_ecs::prelude::World;

    #[test]
    fn begin_frame_discards_previous_entries() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let bounds = Sprite::cell("fruit").bounding_box(Vec2::new(2.0, 2.0));

        let mut context = FrameContext::default();
        context.publish(entity, bounds);
        assert_eq!(context.renderables().len(), 1);

        context.begin_frame();
        assert!(context.renderables().is_empty());
    }
}
