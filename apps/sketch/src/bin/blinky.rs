#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    // matrix LEDs light with the row high and the column low
    let _row1 = Output::new(p.P0_21, Level::High, OutputDrive::Standard);
    let mut col1 = Output::new(p.P0_28, Level::High, OutputDrive::Standard);
    let mut col2 = Output::new(p.P0_11, Level::High, OutputDrive::Standard);

    let left_blinky = async {
        loop {
            col1.set_low();
            Timer::after_millis(250).await;
            col1.set_high();
            Timer::after_millis(250).await;
        }
    };

    let right_blinky = async {
        loop {
            col2.set_low();
            Timer::after_millis(150).await;
            col2.set_high();
            Timer::after_millis(150).await;
        }
    };

    join(left_blinky, right_blinky).await;
}
