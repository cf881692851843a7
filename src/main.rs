use talos::{
    config::RobotConfig,
    robot::{self, Robot},
};
use vexide::prelude::*;

#[vexide::main]
async fn main(peripherals: Peripherals) {
    let config = RobotConfig::default();
    robot::initialize(&config);

    Robot::new(peripherals, config).compete().await;
}
