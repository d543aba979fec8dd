#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    let button_a = Input::new(p.P0_14, Pull::None);
    let button_b = Input::new(p.P0_23, Pull::None);

    info!("button poll start");
    loop {
        // pressed reads low behind the external pull-ups
        let a = button_a.is_low();
        let b = button_b.is_low();
        info!("BTN> A={} B={}", a, b);
        Timer::after_millis(50).await;
    }
}
