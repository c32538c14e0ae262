//! uLog demo firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Brings up clocks and the embassy time driver, builds the logger and
//! registers two destinations:
//! - RTT via defmt (everything from `RTT_THRESHOLD` up)
//! - Warning/error counters read by the heartbeat task
//!
//! Then logs the start-up message once and hands over to the heartbeat.
//!
//! Build with `--no-default-features` to compile every ulog call out.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use ulog::SharedLogger;
use ulog_pico2::config::{HEARTBEAT_PERIOD_MS, RTT_THRESHOLD, STARTUP_MESSAGE, STATS_THRESHOLD};
use ulog_pico2::heartbeat::{Beat, Heartbeat};
use ulog_pico2::stats::{self, STATS};
use {defmt_rtt as _, panic_probe as _};

/// The firmware's only logger. Created once in `main`, then passed by reference.
static LOGGER: StaticCell<SharedLogger> = StaticCell::new();

/// Periodic heartbeat - logs a tick count, or an error summary when the
/// statistics destination saw new errors.
#[embassy_executor::task]
async fn heartbeat_task(logger: &'static SharedLogger) {
    info!("Heartbeat task started");

    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_PERIOD_MS));
    let mut heartbeat = Heartbeat::new();

    loop {
        ticker.next().await;

        match heartbeat.beat(STATS.snapshot()) {
            Beat::Tick(ticks) => ulog::trace!(logger, "tick {}", ticks),
            Beat::Problems {
                ticks,
                warnings,
                errors,
            } => ulog::warning!(logger, "tick {}: {} warnings, {} errors since boot", ticks, warnings, errors),
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("uLog demo starting...");

    // Clocks + time driver (the tick source for the heartbeat)
    let _p = embassy_rp::init(Default::default());

    let logger: &'static SharedLogger = LOGGER.init(SharedLogger::new());
    logger.init();

    if let Err(e) = logger.subscribe(ulog::defmt_sink::forward, RTT_THRESHOLD) {
        defmt::warn!("RTT destination not registered: {}", e);
    }
    if let Err(e) = logger.subscribe(stats::record, STATS_THRESHOLD) {
        defmt::warn!("Stats destination not registered: {}", e);
    }

    ulog::info!(logger, "{}", STARTUP_MESSAGE);

    spawner.spawn(heartbeat_task(logger)).unwrap();
    info!("Heartbeat task spawned");
}
