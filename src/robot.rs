//! The robot: hardware map and competition lifecycle.
//!
//! | device      | ports      | gearset | direction |
//! |-------------|------------|---------|-----------|
//! | left drive  | 8, 9, 10   | blue    | reverse   |
//! | right drive | 1, 2, 3    | blue    | forward   |
//! | intake      | 11         | blue    | forward   |
//! | indexer     | 19         | green   | forward   |
//! | roller      | 20         | green   | forward   |
//!
//! The competition runtime calls into [`Robot`] through [`Compete`]:
//! `connected` is the pre-match hook, `disabled` and `autonomous` do nothing
//! yet, and `driver` runs the operator-control cycle until the period ends.

use log::{debug, info};
use vexide::prelude::*;

use crate::{
    config::RobotConfig,
    fs::logger,
    opcontrol::{driver::OpControl, rollers::Rollers},
    peripherals::drivetrain::Differential,
};

/// All robot hardware plus the configuration it was built from.
pub struct Robot {
    pub opcontrol: OpControl<Controller, Differential, Motor>,
    pub config:    RobotConfig,
}

impl Robot {
    /// Builds the robot with the competition configuration.
    pub fn default_config(peripherals: Peripherals) -> Self {
        Self::new(peripherals, RobotConfig::default())
    }

    pub fn new(peripherals: Peripherals, config: RobotConfig) -> Self {
        let drivetrain = Differential::new(
            [
                Motor::new(peripherals.port_8, Gearset::Blue, Direction::Reverse),
                Motor::new(peripherals.port_9, Gearset::Blue, Direction::Reverse),
                Motor::new(peripherals.port_10, Gearset::Blue, Direction::Reverse),
            ],
            [
                Motor::new(peripherals.port_1, Gearset::Blue, Direction::Forward),
                Motor::new(peripherals.port_2, Gearset::Blue, Direction::Forward),
                Motor::new(peripherals.port_3, Gearset::Blue, Direction::Forward),
            ],
        )
        .with_curves(config.throttle_curve, config.steer_curve);

        let rollers = Rollers::new(
            Motor::new(peripherals.port_11, Gearset::Blue, Direction::Forward),
            Motor::new(peripherals.port_19, Gearset::Green, Direction::Forward),
            Motor::new(peripherals.port_20, Gearset::Green, Direction::Forward),
        );

        let opcontrol = OpControl::new(peripherals.primary_controller, drivetrain, rollers)
            .with_period(config.loop_period);

        Robot { opcontrol, config }
    }
}

/// Startup work, run once before the competition lifecycle begins.
///
/// Installs the logger at the configured level and records the active
/// configuration. A logger that cannot be installed is reported on the
/// console and otherwise ignored.
pub fn initialize(config: &RobotConfig) {
    if let Err(e) = logger::init(config.log_level) {
        println!("Logger Init Error: {}", e);
    }
    info!("Talos initialized");
    debug!("Drivetrain: {:?}", config.drivetrain);
    debug!("Lateral: {:?}", config.lateral);
    debug!("Angular: {:?}", config.angular);
    debug!("Throttle Curve: {:?}", config.throttle_curve);
    debug!("Steer Curve: {:?}", config.steer_curve);
    debug!("Loop Period: {:?}", config.loop_period);
}

impl Compete for Robot {
    async fn connected(&mut self) { info!("Competition Connected"); }

    async fn disabled(&mut self) { info!("Disabled"); }

    async fn autonomous(&mut self) { info!("Autonomous Started"); }

    async fn driver(&mut self) { self.opcontrol.run().await; }
}
