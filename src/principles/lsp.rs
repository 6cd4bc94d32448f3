//! Liskov Substitution.
//!
//! When every bird must fly, an ostrich can only break the contract. Splitting
//! flight into [`FlyingBird`] lets callers ask for exactly what they use.

use crate::domain::ports::{Bird, FlyingBird};
use crate::utils::error::Result;

pub mod violation {
    use crate::utils::error::{Result, SolidError};

    pub trait Bird {
        fn species(&self) -> &str;
        fn fly(&mut self) -> Result<()>;
        fn eat(&mut self);
    }

    #[derive(Debug, Default)]
    pub struct Crow {
        pub flights: u32,
        pub meals: u32,
    }

    impl Bird for Crow {
        fn species(&self) -> &str {
            "Crow"
        }

        fn fly(&mut self) -> Result<()> {
            self.flights += 1;
            Ok(())
        }

        fn eat(&mut self) {
            self.meals += 1;
        }
    }

    #[derive(Debug, Default)]
    pub struct Ostrich {
        pub meals: u32,
    }

    impl Bird for Ostrich {
        fn species(&self) -> &str {
            "Ostrich"
        }

        fn fly(&mut self) -> Result<()> {
            Err(SolidError::UnsupportedCapability {
                subject: self.species().to_string(),
                capability: "fly".to_string(),
            })
        }

        fn eat(&mut self) {
            self.meals += 1;
        }
    }

    /// Stops at the first bird that cannot fly; returns how many flew.
    pub fn let_the_birds_fly(birds: &mut [Box<dyn Bird>]) -> Result<usize> {
        for bird in birds.iter_mut() {
            bird.fly()?;
        }
        Ok(birds.len())
    }
}

#[derive(Debug, Default)]
pub struct Crow {
    pub flights: u32,
    pub meals: u32,
}

impl Bird for Crow {
    fn species(&self) -> &str {
        "Crow"
    }

    fn eat(&mut self) {
        self.meals += 1;
    }
}

impl FlyingBird for Crow {
    fn fly(&mut self) {
        self.flights += 1;
    }
}

#[derive(Debug, Default)]
pub struct Sparrow {
    pub flights: u32,
    pub meals: u32,
}

impl Bird for Sparrow {
    fn species(&self) -> &str {
        "Sparrow"
    }

    fn eat(&mut self) {
        self.meals += 1;
    }
}

impl FlyingBird for Sparrow {
    fn fly(&mut self) {
        self.flights += 1;
    }
}

#[derive(Debug, Default)]
pub struct Ostrich {
    pub meals: u32,
}

impl Bird for Ostrich {
    fn species(&self) -> &str {
        "Ostrich"
    }

    fn eat(&mut self) {
        self.meals += 1;
    }
}

pub fn let_the_birds_fly(birds: &mut [Box<dyn FlyingBird>]) -> usize {
    for bird in birds.iter_mut() {
        bird.fly();
        tracing::debug!("{} took off", bird.species());
    }
    birds.len()
}

pub fn feed_the_birds(birds: &mut [Box<dyn Bird>]) -> usize {
    for bird in birds.iter_mut() {
        bird.eat();
    }
    birds.len()
}

pub fn demo() -> Result<()> {
    let mut mixed: Vec<Box<dyn violation::Bird>> = vec![
        Box::new(violation::Crow::default()),
        Box::new(violation::Ostrich::default()),
    ];
    match violation::let_the_birds_fly(&mut mixed) {
        Ok(count) => tracing::info!("{} birds flew", count),
        Err(e) => tracing::warn!("Substitution broke: {}", e),
    }

    let mut flyers: Vec<Box<dyn FlyingBird>> =
        vec![Box::new(Crow::default()), Box::new(Sparrow::default())];
    tracing::info!("{} flying birds flew", let_the_birds_fly(&mut flyers));

    let mut all: Vec<Box<dyn Bird>> = vec![
        Box::new(Crow::default()),
        Box::new(Sparrow::default()),
        Box::new(Ostrich::default()),
    ];
    tracing::info!("{} birds fed", feed_the_birds(&mut all));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SolidError;

    #[test]
    fn test_violation_fails_on_ostrich() {
        let mut birds: Vec<Box<dyn violation::Bird>> = vec![
            Box::new(violation::Crow::default()),
            Box::new(violation::Ostrich::default()),
            Box::new(violation::Crow::default()),
        ];
        let err = violation::let_the_birds_fly(&mut birds).unwrap_err();
        assert!(matches!(
            err,
            SolidError::UnsupportedCapability { ref subject, .. } if subject == "Ostrich"
        ));
    }

    #[test]
    fn test_violation_without_ostrich_succeeds() {
        let mut birds: Vec<Box<dyn violation::Bird>> = vec![Box::new(violation::Crow::default())];
        assert_eq!(violation::let_the_birds_fly(&mut birds).unwrap(), 1);
    }

    #[test]
    fn test_flying_birds_all_fly() {
        let mut crow = Crow::default();
        crow.fly();
        crow.fly();
        assert_eq!(crow.flights, 2);

        let mut flyers: Vec<Box<dyn FlyingBird>> =
            vec![Box::new(Crow::default()), Box::new(Sparrow::default())];
        assert_eq!(let_the_birds_fly(&mut flyers), 2);
    }

    #[test]
    fn test_every_bird_can_eat() {
        let mut birds: Vec<Box<dyn Bird>> = vec![
            Box::new(Crow::default()),
            Box::new(Ostrich::default()),
        ];
        assert_eq!(feed_the_birds(&mut birds), 2);

        let mut ostrich = Ostrich::default();
        ostrich.eat();
        assert_eq!(ostrich.meals, 1);
    }
}
