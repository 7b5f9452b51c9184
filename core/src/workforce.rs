//! Segregated worker roles.
//!
//! Each role is its own trait, so a type only implements what it can actually
//! do. A robot works; it is never asked to eat or sleep.

pub trait Worker {
    fn work(&self) -> String;
}

pub trait Eater {
    fn eat(&self) -> String;
}

pub trait Sleeper {
    fn sleep(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HumanWorker;

impl Worker for HumanWorker {
    fn work(&self) -> String {
        "Human is working".to_string()
    }
}

impl Eater for HumanWorker {
    fn eat(&self) -> String {
        "Human is eating".to_string()
    }
}

impl Sleeper for HumanWorker {
    fn sleep(&self) -> String {
        "Human is sleeping".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RobotWorker;

impl Worker for RobotWorker {
    fn work(&self) -> String {
        "Robot is working".to_string()
    }
}

/// Puts every worker through one shift. Only the [`Worker`] role is required.
pub fn run_shift(workers: &[&dyn Worker]) -> Vec<String> {
    workers.iter().map(|w| w.work()).collect()
}

/// A break only makes sense for those who both eat and sleep.
pub fn take_break<T: Eater + Sleeper>(member: &T) -> Vec<String> {
    vec![member.eat(), member.sleep()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_mixes_humans_and_robots() {
        let log = run_shift(&[&HumanWorker, &RobotWorker]);
        assert_eq!(log, vec!["Human is working", "Robot is working"]);
    }

    #[test]
    fn test_empty_shift() {
        assert!(run_shift(&[]).is_empty());
    }

    #[test]
    fn test_break_for_humans() {
        assert_eq!(take_break(&HumanWorker), vec!["Human is eating", "Human is sleeping"]);
    }
}
