//! Session configuration.
//!
//! Every field defaults to the constant of the same name in the types crate.

use std::time::Duration;

use crate::physics::ShipPhysics;
use crate::types::{
    DEBRIS_POPULATION, DEBRIS_SPEED, PROJECTILE_COLUMN_SPEED, PROJECTILE_ROW_SPEED, SKY_FILLING,
    TICK_MS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub tick: Duration,
    /// Star density in percent (see [`crate::star::star_count`]).
    pub sky_filling: u32,
    pub debris_population: usize,
    pub debris_speed: f64,
    pub projectile_speed: (f64, f64),
    pub ship: ShipPhysics,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS as u64),
            sky_filling: SKY_FILLING,
            debris_population: DEBRIS_POPULATION,
            debris_speed: DEBRIS_SPEED,
            projectile_speed: (PROJECTILE_ROW_SPEED, PROJECTILE_COLUMN_SPEED),
            ship: ShipPhysics::default(),
        }
    }
}

impl GameConfig {
    pub fn with_sky_filling(mut self, sky_filling: u32) -> Self {
        self.sky_filling = sky_filling;
        self
    }

    pub fn with_debris_population(mut self, population: usize) -> Self {
        self.debris_population = population;
        self
    }

    pub fn with_debris_speed(mut self, speed: f64) -> Self {
        self.debris_speed = speed;
        self
    }

    pub fn with_projectile_speed(mut self, rows_speed: f64, columns_speed: f64) -> Self {
        self.projectile_speed = (rows_speed, columns_speed);
        self
    }

    pub fn with_ship_physics(mut self, ship: ShipPhysics) -> Self {
        self.ship = ship;
        self
    }
}
