//! Bird hierarchy built so that every subtype can stand in for [`Bird`].
//!
//! Flight and swimming are separate extensions instead of a `fly` method every
//! bird is forced to fake.

pub trait Bird {
    fn name(&self) -> &'static str;
    fn move_about(&self) -> String;
    fn eat(&self) -> String;
}

pub trait FlyingBird: Bird {
    fn fly(&self) -> String;
}

pub trait SwimmingBird: Bird {
    fn swim(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn name(&self) -> &'static str {
        "Sparrow"
    }

    fn move_about(&self) -> String {
        "Sparrow is moving".to_string()
    }

    fn eat(&self) -> String {
        "Sparrow is eating".to_string()
    }
}

impl FlyingBird for Sparrow {
    fn fly(&self) -> String {
        "Sparrow is flying".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Penguin;

impl Bird for Penguin {
    fn name(&self) -> &'static str {
        "Penguin"
    }

    fn move_about(&self) -> String {
        "Penguin is moving".to_string()
    }

    fn eat(&self) -> String {
        "Penguin is eating".to_string()
    }
}

impl SwimmingBird for Penguin {
    fn swim(&self) -> String {
        "Penguin is swimming".to_string()
    }
}

/// What any bird does in a day, whatever its concrete kind.
pub fn daily_routine(bird: &dyn Bird) -> Vec<String> {
    vec![bird.move_about(), bird.eat()]
}
