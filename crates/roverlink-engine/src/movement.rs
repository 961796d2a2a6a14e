//! Movement state machine
//!
//! The only state is the rover's (position, direction) pair. Commands are
//! consumed one character at a time, left to right. The engine performs no
//! validation of its own; it trusts the caller to have validated the
//! initial rover against the plateau.

use tracing::debug;

use roverlink_domain::{Plateau, Rover};

/// Replay a command string against a rover on the given plateau.
///
/// - `L`/`R` rotate the rover 90 degrees.
/// - `M` steps one unit in the current heading. A candidate cell outside
///   the plateau is silently absorbed: the rover stays put and no error is
///   raised.
/// - Any other character is skipped without error.
///
/// Deterministic: identical inputs always leave the rover in the same
/// state.
pub fn run_commands(rover: &mut Rover, plateau: &Plateau, commands: &str) {
    for command in commands.chars() {
        match command {
            'L' => rover.turn_left(),
            'R' => rover.turn_right(),
            'M' => {
                let candidate = rover.position().step(rover.direction());
                if plateau.contains(candidate) {
                    rover.move_to(candidate);
                } else {
                    debug!(
                        x = rover.position().x,
                        y = rover.position().y,
                        heading = %rover.direction(),
                        "move blocked at plateau boundary"
                    );
                }
            }
            other => {
                debug!(command = %other, "ignoring unknown command character");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roverlink_domain::{Direction, Position};

    fn rover_at(x: i32, y: i32, direction: Direction) -> Rover {
        Rover::new(Position::new(x, y), direction)
    }

    #[test]
    fn test_canonical_mission() {
        let plateau = Plateau::new(5, 5).unwrap();
        let mut rover = rover_at(1, 2, Direction::North);
        run_commands(&mut rover, &plateau, "LMLMLMLMM");
        assert_eq!(rover.to_string(), "1 3 N");
    }

    #[test]
    fn test_second_canonical_mission() {
        let plateau = Plateau::new(5, 5).unwrap();
        let mut rover = rover_at(3, 3, Direction::East);
        run_commands(&mut rover, &plateau, "MMRMMRMRRM");
        assert_eq!(rover.to_string(), "5 1 E");
    }

    #[test]
    fn test_move_blocked_at_every_outward_boundary() {
        let plateau = Plateau::new(5, 5).unwrap();
        let edges = [
            (5, 5, Direction::North),
            (5, 5, Direction::East),
            (0, 0, Direction::South),
            (0, 0, Direction::West),
        ];
        for (x, y, direction) in edges {
            let mut rover = rover_at(x, y, direction);
            run_commands(&mut rover, &plateau, "M");
            assert_eq!(rover.position(), Position::new(x, y), "{direction:?}");
            assert_eq!(rover.direction(), direction);
        }
    }

    #[test]
    fn test_never_leaves_plateau_under_move_spam() {
        let plateau = Plateau::new(2, 2).unwrap();
        for start_direction in Direction::ALL {
            let mut rover = rover_at(1, 1, start_direction);
            run_commands(&mut rover, &plateau, "MMMMMMMMRMMMMMMMM");
            assert!(plateau.contains(rover.position()));
        }
    }

    #[test]
    fn test_unknown_characters_are_no_ops() {
        let plateau = Plateau::new(5, 5).unwrap();
        let mut with_junk = rover_at(2, 2, Direction::North);
        let mut clean = rover_at(2, 2, Direction::North);
        run_commands(&mut with_junk, &plateau, "MXL1R@M");
        run_commands(&mut clean, &plateau, "MLRM");
        assert_eq!(with_junk, clean);
        assert_eq!(with_junk.to_string(), "2 4 N");
    }

    #[test]
    fn test_lowercase_characters_are_junk_too() {
        // Only uppercase L/R/M are commands; lowercase falls under the
        // unknown-character rule.
        let plateau = Plateau::new(5, 5).unwrap();
        let mut rover = rover_at(1, 2, Direction::North);
        run_commands(&mut rover, &plateau, "lmrx");
        assert_eq!(rover, rover_at(1, 2, Direction::North));
    }

    #[test]
    fn test_empty_command_string_is_identity() {
        let plateau = Plateau::new(5, 5).unwrap();
        let mut rover = rover_at(4, 4, Direction::West);
        run_commands(&mut rover, &plateau, "");
        assert_eq!(rover, rover_at(4, 4, Direction::West));
    }

    #[test]
    fn test_four_turns_are_identity() {
        let plateau = Plateau::new(5, 5).unwrap();
        for direction in Direction::ALL {
            for commands in ["LLLL", "RRRR"] {
                let mut rover = rover_at(2, 3, direction);
                run_commands(&mut rover, &plateau, commands);
                assert_eq!(rover.direction(), direction, "{commands} from {direction:?}");
                assert_eq!(rover.position(), Position::new(2, 3));
            }
        }
    }
}
