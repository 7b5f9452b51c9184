use colored::*;

use crate::{mprint, terminal::{format::Detail, print}};
use solid_common::config::Config;
use solid_core::aviary::{self, Bird, FlyingBird, Penguin, Sparrow, SwimmingBird};
use solid_core::workforce::{self, HumanWorker, RobotWorker, Worker};

pub fn roles(cfg: &Config) -> anyhow::Result<()> {
    print::header("workforce", cfg.quiet);
    let workers: [&dyn Worker; 2] = [&HumanWorker, &RobotWorker];
    for line in workforce::run_shift(&workers) {
        print::print_status(line);
    }
    if cfg.quiet < 2 {
        for line in workforce::take_break(&HumanWorker) {
            print::print_status(line);
        }
    }

    mprint!();
    print::header("aviary", cfg.quiet);
    print_bird(0, &Sparrow, Sparrow.fly(), cfg);
    mprint!();
    print_bird(1, &Penguin, Penguin.swim(), cfg);
    Ok(())
}

fn print_bird(idx: usize, bird: &dyn Bird, special: String, cfg: &Config) {
    print::tree_head(idx, bird.name());
    if cfg.quiet >= 2 {
        return;
    }
    let mut details: Vec<Detail> = aviary::daily_routine(bird)
        .into_iter()
        .enumerate()
        .map(|(i, line)| (format!("Step {}", i + 1), line.normal()))
        .collect();
    details.push(("Special".to_string(), special.green()));
    print::as_tree_one_level(details);
}
