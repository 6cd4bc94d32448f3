use crate::domain::model::Vehicle;
use crate::utils::error::Result;

/// A named driving mode that knows how to configure a vehicle.
pub trait ModeProfile: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, vehicle: &mut Vehicle);
}

pub trait VehicleReporter: Send + Sync {
    fn render(&self, vehicle: &Vehicle) -> Result<String>;
}

pub trait Car {
    fn accelerate(&mut self);
}

impl<C: Car + ?Sized> Car for Box<C> {
    fn accelerate(&mut self) {
        (**self).accelerate();
    }
}

impl<C: Car + ?Sized> Car for &mut C {
    fn accelerate(&mut self) {
        (**self).accelerate();
    }
}

pub trait EngineSwitch {
    fn start_engine(&mut self);
    fn engine_running(&self) -> bool;
}

pub trait RadioSwitch: EngineSwitch {
    fn turn_radio_on(&mut self);
    fn turn_radio_off(&mut self);
    fn radio_on(&self) -> bool;
}

pub trait CameraSwitch: EngineSwitch {
    fn turn_camera_on(&mut self);
    fn turn_camera_off(&mut self);
    fn camera_on(&self) -> bool;
}

pub trait Bird {
    fn species(&self) -> &str;
    fn eat(&mut self);
}

pub trait FlyingBird: Bird {
    fn fly(&mut self);
}
