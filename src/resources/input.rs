//! Input queue and bridge resources.
//!
//! Raw key handling lives in the frontend; a dedicated input thread
//! translates key presses into [`InputEvent`]s and sends them over a
//! crossbeam channel. [`InputBridge`] holds the receiving end inside the
//! ECS world, and the pump system drains it into [`InputQueue`] once per
//! tick. The movement system then consumes the queue exactly once, which
//! makes each tick atomic with respect to input.

use bevy_ecs::prelude::Resource;
use crossbeam_channel::Receiver;

use crate::events::input::InputEvent;

/// Receiving end of the frontend input channel (input thread -> ECS).
#[derive(Resource)]
pub struct InputBridge {
    pub rx: Receiver<InputEvent>,
}

impl InputBridge {
    pub fn new(rx: Receiver<InputEvent>) -> Self {
        Self { rx }
    }
}

/// Ordered input events for the current tick.
///
/// Filled by the pump system, drained by the movement system. Events are
/// never retained across ticks.
#[derive(Resource, Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::input::Direction;

    #[test]
    fn drain_empties_the_queue_in_order() {
        let mut queue = InputQueue::default();
        queue.push(InputEvent::Turn(Direction::Up));
        queue.push(InputEvent::Turn(Direction::Left));

        let events = queue.drain();
        assert_eq!(
            events,
            vec![
                InputEvent::Turn(Direction::Up),
                InputEvent::Turn(Direction::Left)
            ]
        );
        assert!(queue.is_empty());
    }
}
