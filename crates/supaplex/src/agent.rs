//! Murphy, the player-controlled agent.

use crate::cell::ElementType;
use crate::coordinate::Coordinate;
use crate::input::Buttons;
use crate::Field;

/// Sub-pixel units per cell along each axis.
pub const CELL_UNITS: u16 = 16;

/// Idle counter ceiling while standing still.
pub const IDLE_FRAMES: u16 = 256;

/// Ticks needed to cross one cell.
pub const MOVE_FRAMES: u16 = 16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub fn step(self, c: Coordinate) -> Coordinate {
        match self {
            Self::Left => c.left(),
            Self::Right => c.right(),
            Self::Up => c.above(),
            Self::Down => c.below(),
        }
    }

    fn button(self) -> Buttons {
        match self {
            Self::Left => Buttons::LEFT,
            Self::Right => Buttons::RIGHT,
            Self::Up => Buttons::UP,
            Self::Down => Buttons::DOWN,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MurphyState {
    Facing,
    Moving(Direction),
}

/// Position is in sub-pixel units: the top bits are the cell, the low four
/// bits the offset within it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Murphy {
    pub x: u16,
    pub y: u16,
    pub facing: Facing,
    pub state: MurphyState,
    /// Idle counter while facing, move progress while moving.
    pub frame: u16,
}

impl Murphy {
    #[must_use]
    pub fn spawn(at: Coordinate) -> Self {
        Self {
            x: at.x() as u16 * CELL_UNITS,
            y: at.y() as u16 * CELL_UNITS,
            facing: Facing::Right,
            state: MurphyState::Facing,
            frame: 0,
        }
    }

    /// The cell containing Murphy's top-left corner.
    #[must_use]
    pub fn cell(&self) -> Coordinate {
        Coordinate::new(
            usize::from(self.x / CELL_UNITS),
            usize::from(self.y / CELL_UNITS),
        )
    }

    /// Per-tick animation and movement.
    pub fn advance(&mut self) {
        match self.state {
            MurphyState::Facing => {
                if self.frame < IDLE_FRAMES {
                    self.frame += 1;
                }
            }
            MurphyState::Moving(direction) => {
                self.frame += 1;
                match direction {
                    Direction::Left => self.x -= 1,
                    Direction::Right => self.x += 1,
                    Direction::Up => self.y -= 1,
                    Direction::Down => self.y += 1,
                }
                if self.frame == MOVE_FRAMES {
                    self.state = MurphyState::Facing;
                    self.frame = 0;
                }
            }
        }
    }

    /// Start a move if a direction is held and the way is edible. Only one
    /// direction is honoured per tick: right, then left, up, down.
    ///
    /// Returns `true` when a move began.
    pub fn steer(&mut self, field: &mut Field, buttons: Buttons) -> bool {
        if self.state != MurphyState::Facing {
            return false;
        }
        let Some(direction) = [
            Direction::Right,
            Direction::Left,
            Direction::Up,
            Direction::Down,
        ]
        .into_iter()
        .find(|d| buttons.contains(d.button())) else {
            return false;
        };

        match direction {
            Direction::Left => self.facing = Facing::Left,
            Direction::Right => self.facing = Facing::Right,
            Direction::Up | Direction::Down => {}
        }

        let here = self.cell();
        let target = direction.step(here);
        if !field.get(target).is_edible() {
            return false;
        }

        field.set(here, ElementType::MurphyMoving);
        field.set(target, ElementType::MurphyStanding);
        self.state = MurphyState::Moving(direction);
        self.frame = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::bordered_field;
    use proptest::prelude::*;

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Right),
            Just(Direction::Up),
            Just(Direction::Down),
        ]
    }

    #[test]
    fn spawn_scales_to_sub_pixels() {
        let murphy = Murphy::spawn(Coordinate::new(3, 5));
        assert_eq!((murphy.x, murphy.y), (48, 80));
        assert_eq!(murphy.cell(), Coordinate::new(3, 5));
        assert_eq!(murphy.state, MurphyState::Facing);
        assert_eq!(murphy.facing, Facing::Right);
    }

    #[test]
    fn idle_counter_saturates() {
        let mut murphy = Murphy::spawn(Coordinate::new(3, 5));
        for _ in 0..300 {
            murphy.advance();
        }
        assert_eq!(murphy.frame, IDLE_FRAMES);
        assert_eq!(murphy.state, MurphyState::Facing);
    }

    #[test]
    fn steer_into_edible_cell_claims_both_cells() {
        let mut field = bordered_field();
        let start = Coordinate::new(5, 5);
        field.set(start.right(), ElementType::Base);
        let mut murphy = Murphy::spawn(start);
        murphy.frame = 40;

        assert!(murphy.steer(&mut field, Buttons::RIGHT));
        assert_eq!(murphy.state, MurphyState::Moving(Direction::Right));
        assert_eq!(murphy.frame, 0);
        assert_eq!(field.get(start).kind, ElementType::MurphyMoving);
        assert_eq!(field.get(start.right()).kind, ElementType::MurphyStanding);
    }

    #[test]
    fn blocked_move_still_turns() {
        let mut field = bordered_field();
        let start = Coordinate::new(5, 5);
        field.set(start.left(), ElementType::Zonk);
        let mut murphy = Murphy::spawn(start);

        assert!(!murphy.steer(&mut field, Buttons::LEFT));
        assert_eq!(murphy.facing, Facing::Left);
        assert_eq!(murphy.state, MurphyState::Facing);
        assert_eq!(field.get(start).kind, ElementType::Space);
    }

    #[test]
    fn vertical_moves_keep_facing() {
        let mut field = bordered_field();
        let mut murphy = Murphy::spawn(Coordinate::new(5, 5));
        murphy.facing = Facing::Left;

        assert!(murphy.steer(&mut field, Buttons::DOWN));
        assert_eq!(murphy.facing, Facing::Left);
        assert_eq!(murphy.state, MurphyState::Moving(Direction::Down));
    }

    #[test]
    fn right_beats_other_directions() {
        let mut field = bordered_field();
        let mut murphy = Murphy::spawn(Coordinate::new(5, 5));
        assert!(murphy.steer(&mut field, Buttons::LEFT | Buttons::RIGHT | Buttons::UP));
        assert_eq!(murphy.state, MurphyState::Moving(Direction::Right));
    }

    #[test]
    fn no_steering_while_moving() {
        let mut field = bordered_field();
        let mut murphy = Murphy::spawn(Coordinate::new(5, 5));
        assert!(murphy.steer(&mut field, Buttons::RIGHT));
        murphy.advance();
        assert!(!murphy.steer(&mut field, Buttons::DOWN));
        assert_eq!(murphy.state, MurphyState::Moving(Direction::Right));
    }

    #[test]
    fn walls_are_not_edible() {
        let mut field = bordered_field();
        let mut murphy = Murphy::spawn(Coordinate::new(1, 1));
        assert!(!murphy.steer(&mut field, Buttons::UP));
        assert!(!murphy.steer(&mut field, Buttons::LEFT));
    }

    proptest! {
        #[test]
        fn prop_move_crosses_exactly_one_cell(
            x in 2usize..58,
            y in 2usize..22,
            direction in arb_direction(),
        ) {
            let mut field = bordered_field();
            let start = Coordinate::new(x, y);
            let mut murphy = Murphy::spawn(start);
            prop_assert!(murphy.steer(&mut field, direction.button()));

            for tick in 1..MOVE_FRAMES {
                murphy.advance();
                prop_assert_eq!(murphy.frame, tick);
                prop_assert_eq!(murphy.state, MurphyState::Moving(direction));
            }
            murphy.advance();

            prop_assert_eq!(murphy.state, MurphyState::Facing);
            prop_assert_eq!(murphy.frame, 0);
            prop_assert_eq!(murphy.cell(), direction.step(start));
            prop_assert_eq!(murphy.x % CELL_UNITS, 0);
            prop_assert_eq!(murphy.y % CELL_UNITS, 0);
        }
    }
}
