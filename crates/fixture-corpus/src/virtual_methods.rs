//! # Virtual Methods
//!
//! Dynamic dispatch through `dyn Animal`:
//!
//! - `digest_food` is the hook; `eat` is the fixed algorithm that calls it.
//!   `eat` lives on `dyn Animal` itself, so no implementor can override it.
//! - `Animal -> Cat -> Kitten` is a three-level override chain: `Kitten`
//!   overrides sound and description and inherits the cat's digestion.
//! - `Frog` implements two unrelated traits, `Animal` and `Amphibian`.

use crate::error::FixtureError;
use std::io::{self, Write};

pub trait Animal {
    fn name(&self) -> &str;

    fn make_sound(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} makes a generic sound", self.name())
    }

    fn description(&self) -> String {
        format!("Animal: {}", self.name())
    }

    /// Hook called by `eat`. Not meant to be called directly.
    fn digest_food(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Processing food generally")
    }
}

impl dyn Animal + '_ {
    pub fn eat(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} is eating", self.name())?;
        self.digest_food(out)
    }
}

pub struct Dog {
    name: String,
    breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
        }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} barks loudly!", self.name)
    }

    fn description(&self) -> String {
        format!("Dog: {} ({})", self.name, self.breed)
    }

    fn digest_food(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Dog digesting food quickly")
    }
}

pub struct Cat {
    name: String,
    is_indoor: bool,
}

impl Cat {
    pub fn new(name: impl Into<String>, is_indoor: bool) -> Self {
        Self {
            name: name.into(),
            is_indoor,
        }
    }

    pub fn purr(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} is purring", self.name)
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} meows softly", self.name)
    }

    fn description(&self) -> String {
        let location = if self.is_indoor { "indoor" } else { "outdoor" };
        format!("Cat: {} ({location})", self.name)
    }

    fn digest_food(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Cat digesting food slowly")
    }
}

pub struct Kitten {
    cat: Cat,
    age_weeks: u32,
}

impl Kitten {
    pub fn new(name: impl Into<String>, is_indoor: bool, age_weeks: u32) -> Self {
        Self {
            cat: Cat::new(name, is_indoor),
            age_weeks,
        }
    }
}

impl Animal for Kitten {
    fn name(&self) -> &str {
        self.cat.name()
    }

    fn make_sound(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} makes tiny meows", self.name())
    }

    fn description(&self) -> String {
        format!("Kitten: {} ({} weeks old)", self.name(), self.age_weeks)
    }

    fn digest_food(&self, out: &mut dyn Write) -> io::Result<()> {
        self.cat.digest_food(out)
    }
}

pub trait Amphibian {
    fn can_swim(&self) -> bool;

    fn swim(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.can_swim() {
            writeln!(out, "Swimming in water")
        } else {
            writeln!(out, "Cannot swim")
        }
    }
}

pub struct Frog {
    name: String,
    can_swim: bool,
}

impl Frog {
    pub fn new(name: impl Into<String>, can_swim: bool) -> Self {
        Self {
            name: name.into(),
            can_swim,
        }
    }
}

impl Animal for Frog {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} croaks!", self.name)
    }
}

impl Amphibian for Frog {
    fn can_swim(&self) -> bool {
        self.can_swim
    }

    fn swim(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} swims with powerful legs", self.name)
    }
}

pub fn make_animal_sound(animal: &dyn Animal, out: &mut dyn Write) -> io::Result<()> {
    animal.make_sound(out)
}

pub fn describe_animal<T: Animal + ?Sized>(animal: &T, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Description: {}", animal.description())
}

pub fn run(out: &mut dyn Write) -> Result<(), FixtureError> {
    let dog = Dog::new("Rex", "German Shepherd");
    let cat = Cat::new("Whiskers", true);
    let kitten = Kitten::new("Mittens", true, 8);
    let frog = Frog::new("Kermit", true);

    let animals: Vec<Box<dyn Animal>> = vec![
        Box::new(Dog::new("Buddy", "Golden Retriever")),
        Box::new(Cat::new("Smokey", false)),
        Box::new(Kitten::new("Tiny", true, 6)),
        Box::new(Frog::new("Hoppy", true)),
    ];

    for animal in &animals {
        animal.make_sound(out)?;
        writeln!(out, "{}", animal.description())?;
        animal.eat(out)?;
        writeln!(out, "-------------------")?;
    }

    make_animal_sound(&dog, out)?;
    make_animal_sound(&cat, out)?;
    make_animal_sound(&frog, out)?;

    describe_animal(&dog, out)?;
    describe_animal(&cat, out)?;
    describe_animal(&kitten, out)?;

    frog.swim(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "\
Buddy barks loudly!
Dog: Buddy (Golden Retriever)
Buddy is eating
Dog digesting food quickly
-------------------
Smokey meows softly
Cat: Smokey (outdoor)
Smokey is eating
Cat digesting food slowly
-------------------
Tiny makes tiny meows
Kitten: Tiny (6 weeks old)
Tiny is eating
Cat digesting food slowly
-------------------
Hoppy croaks!
Animal: Hoppy
Hoppy is eating
Processing food generally
-------------------
Rex barks loudly!
Whiskers meows softly
Kermit croaks!
Description: Dog: Rex (German Shepherd)
Description: Cat: Whiskers (indoor)
Description: Kitten: Mittens (8 weeks old)
Kermit swims with powerful legs
";

    #[test]
    fn test_full_output() {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), EXPECTED);
    }

    #[test]
    fn test_default_swim_and_purr() {
        struct Newt;
        impl Amphibian for Newt {
            fn can_swim(&self) -> bool {
                false
            }
        }

        let mut buffer = Vec::new();
        Newt.swim(&mut buffer).unwrap();
        Cat::new("Tom", true).purr(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Cannot swim\nTom is purring\n"
        );
    }

    #[test]
    fn test_generic_animal_sound() {
        struct Rock;
        impl Animal for Rock {
            fn name(&self) -> &str {
                "Rock"
            }
        }

        let mut buffer = Vec::new();
        make_animal_sound(&Rock, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Rock makes a generic sound\n");
    }
}
