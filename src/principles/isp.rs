//! Interface Segregation.
//!
//! One fat switch trait forces a drone to implement radio controls and a car
//! to implement camera controls. The segregated traits in
//! [`crate::domain::ports`] give each device only the switches it has.

use crate::domain::ports::{CameraSwitch, EngineSwitch, RadioSwitch};
use crate::utils::error::Result;

pub mod violation {
    pub trait Switches {
        fn start_engine(&mut self);
        fn turn_camera_on(&mut self);
        fn turn_camera_off(&mut self);
        fn turn_radio_on(&mut self);
        fn turn_radio_off(&mut self);
    }

    #[derive(Debug, Default)]
    pub struct Drone {
        pub engine_running: bool,
        pub camera_on: bool,
    }

    impl Switches for Drone {
        fn start_engine(&mut self) {
            self.engine_running = true;
        }

        fn turn_camera_on(&mut self) {
            self.camera_on = true;
        }

        fn turn_camera_off(&mut self) {
            self.camera_on = false;
        }

        // A drone has no radio.
        fn turn_radio_on(&mut self) {}

        fn turn_radio_off(&mut self) {}
    }

    #[derive(Debug, Default)]
    pub struct Car {
        pub engine_running: bool,
        pub radio_on: bool,
    }

    impl Switches for Car {
        fn start_engine(&mut self) {
            self.engine_running = true;
        }

        // A car has no camera.
        fn turn_camera_on(&mut self) {}

        fn turn_camera_off(&mut self) {}

        fn turn_radio_on(&mut self) {
            self.radio_on = true;
        }

        fn turn_radio_off(&mut self) {
            self.radio_on = false;
        }
    }
}

#[derive(Debug, Default)]
pub struct Car {
    engine_running: bool,
    radio_on: bool,
}

impl EngineSwitch for Car {
    fn start_engine(&mut self) {
        self.engine_running = true;
    }

    fn engine_running(&self) -> bool {
        self.engine_running
    }
}

impl RadioSwitch for Car {
    fn turn_radio_on(&mut self) {
        self.radio_on = true;
    }

    fn turn_radio_off(&mut self) {
        self.radio_on = false;
    }

    fn radio_on(&self) -> bool {
        self.radio_on
    }
}

#[derive(Debug, Default)]
pub struct Drone {
    engine_running: bool,
    camera_on: bool,
}

impl EngineSwitch for Drone {
    fn start_engine(&mut self) {
        self.engine_running = true;
    }

    fn engine_running(&self) -> bool {
        self.engine_running
    }
}

impl CameraSwitch for Drone {
    fn turn_camera_on(&mut self) {
        self.camera_on = true;
    }

    fn turn_camera_off(&mut self) {
        self.camera_on = false;
    }

    fn camera_on(&self) -> bool {
        self.camera_on
    }
}

pub fn start_all(engines: &mut [&mut dyn EngineSwitch]) -> usize {
    for engine in engines.iter_mut() {
        engine.start_engine();
    }
    engines.iter().filter(|e| e.engine_running()).count()
}

pub fn demo() -> Result<()> {
    let mut fat_drone = violation::Drone::default();
    violation::Switches::turn_radio_on(&mut fat_drone);
    tracing::info!("Fat-interface drone after turn_radio_on: {:?}", fat_drone);

    let mut car = Car::default();
    let mut drone = Drone::default();
    let mut engines: [&mut dyn EngineSwitch; 2] = [&mut car, &mut drone];
    let started = start_all(&mut engines);
    car.turn_radio_on();
    drone.turn_camera_on();
    tracing::info!(
        "{} engines started, radio_on={}, camera_on={}",
        started,
        car.radio_on(),
        drone.camera_on()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::violation::Switches;

    #[test]
    fn test_fat_interface_drone_ignores_radio() {
        let mut drone = violation::Drone::default();
        drone.start_engine();
        drone.turn_radio_on();
        drone.turn_camera_on();
        assert!(drone.engine_running);
        assert!(drone.camera_on);

        let mut car = violation::Car::default();
        car.turn_camera_on();
        car.turn_radio_on();
        assert!(car.radio_on);
    }

    #[test]
    fn test_car_radio_switch() {
        let mut car = Car::default();
        assert!(!car.engine_running());
        car.start_engine();
        car.turn_radio_on();
        assert!(car.engine_running());
        assert!(car.radio_on());
        car.turn_radio_off();
        assert!(!car.radio_on());
    }

    #[test]
    fn test_drone_camera_switch() {
        let mut drone = Drone::default();
        drone.turn_camera_on();
        assert!(drone.camera_on());
        assert!(!drone.engine_running());
        drone.turn_camera_off();
        assert!(!drone.camera_on());
    }

    #[test]
    fn test_start_all_engines() {
        let mut car = Car::default();
        let mut drone = Drone::default();
        let mut engines: [&mut dyn EngineSwitch; 2] = [&mut car, &mut drone];
        assert_eq!(start_all(&mut engines), 2);
        assert!(car.engine_running());
        assert!(drone.engine_running());
        assert!(!car.radio_on());
        assert!(!drone.camera_on());
    }
}
