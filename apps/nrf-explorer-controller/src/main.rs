#![no_std]
#![no_main]

use ce_core::controller;
use ce_core::input::{Line, Polarity, ReportMode};
use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_nrf::{
    bind_interrupts,
    buffered_uarte::{self, BufferedUarte},
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals, uarte,
};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    UARTE0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
});

// Button B: press pulses for stepping by default, held level for
// move-while-held when the hold-to-move feature is on.
const FORWARD_MODE: ReportMode = if cfg!(feature = "hold-to-move") {
    ReportMode::Level
} else {
    ReportMode::Edge
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    // micro:bit buttons have external pull-ups, pressed reads low
    let button_a = Input::new(p.P0_14, Pull::None);
    let button_b = Input::new(p.P0_23, Pull::None);

    let mut config = uarte::Config::default();
    config.parity = uarte::Parity::EXCLUDED;
    config.baudrate = uarte::Baudrate::BAUD115200;
    let mut tx_buffer = [0u8; 256];
    let mut rx_buffer = [0u8; 256];
    let uart = BufferedUarte::new(
        p.UARTE0,
        p.TIMER0,
        p.PPI_CH0,
        p.PPI_CH1,
        p.PPI_GROUP0,
        p.P1_08,
        p.P0_06,
        Irqs,
        config,
        &mut rx_buffer,
        &mut tx_buffer,
    );

    info!("explorer controller, forward mode {:?}", FORWARD_MODE);

    let lines = [
        Line::new(button_a, Polarity::ActiveLow, ReportMode::Level),
        Line::new(button_b, Polarity::ActiveLow, FORWARD_MODE),
    ];
    let runner = unwrap!(controller::new(lines, uart, controller::CYCLE_PERIOD));

    // no shutdown source on hardware, the loop runs until power-off
    let shutdown: Signal<NoopRawMutex, ()> = Signal::new();

    // heartbeat on the top-left matrix LED, column low lights it
    let _row1 = Output::new(p.P0_21, Level::High, OutputDrive::Standard);
    let mut col1 = Output::new(p.P0_28, Level::High, OutputDrive::Standard);
    let heartbeat = async {
        loop {
            col1.set_low();
            Timer::after_millis(50).await;
            col1.set_high();
            Timer::after_millis(950).await;
        }
    };

    join(runner.run(&shutdown), heartbeat).await;
}
