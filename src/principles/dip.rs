//! Dependency Inversion.
//!
//! A driver that owns a concrete racing car can drive nothing else. Making
//! [`Driver`] generic over [`Car`] lets any implementation (or a test double)
//! stand in.

use crate::domain::ports::Car;
use crate::utils::error::Result;

pub mod violation {
    use super::RacingCar;
    use crate::domain::ports::Car;

    pub struct Driver {
        racing_car: RacingCar,
    }

    impl Driver {
        pub fn new(racing_car: RacingCar) -> Self {
            Self { racing_car }
        }

        pub fn increase_speed(&mut self) {
            self.racing_car.accelerate();
        }

        pub fn car(&self) -> &RacingCar {
            &self.racing_car
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RacingCar {
    remaining_fuel: u32,
    power: u32,
}

impl RacingCar {
    pub fn new(fuel: u32) -> Self {
        Self {
            remaining_fuel: fuel,
            power: 0,
        }
    }

    pub fn remaining_fuel(&self) -> u32 {
        self.remaining_fuel
    }

    pub fn power(&self) -> u32 {
        self.power
    }
}

impl Car for RacingCar {
    fn accelerate(&mut self) {
        if self.remaining_fuel == 0 {
            tracing::warn!("Racing car is out of fuel, cannot accelerate");
            return;
        }
        self.power += 1;
        self.remaining_fuel -= 1;
    }
}

pub struct Driver<C: Car> {
    car: C,
}

impl<C: Car> Driver<C> {
    pub fn new(car: C) -> Self {
        Self { car }
    }

    pub fn increase_speed(&mut self) {
        self.car.accelerate();
    }

    pub fn car(&self) -> &C {
        &self.car
    }

    pub fn into_car(self) -> C {
        self.car
    }
}

pub fn demo() -> Result<()> {
    let mut fixed = violation::Driver::new(RacingCar::new(2));
    fixed.increase_speed();
    tracing::info!("Hard-wired driver: {:?}", fixed.car());

    let mut driver = Driver::new(RacingCar::new(2));
    for _ in 0..3 {
        driver.increase_speed();
    }
    tracing::info!("Driver over the Car trait: {:?}", driver.car());
    Ok(())
}
