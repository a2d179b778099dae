#![no_std]
#![no_main]

use defmt::{debug, info, unwrap};
use embassy_executor::Spawner;
use embassy_rp::watchdog::Watchdog;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

mod config;
mod config_resources;
mod tasks;

use crate::config_resources::{
    AssignedResources, AuxOutputResources, ButtonResources, LedResources, RelayResources,
};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let r = split_resources!(p);

    info!("CNC panel firmware v{} starting up...", config::FW_VERSION_STR);

    let mut watchdog = Watchdog::new(p.WATCHDOG);
    watchdog.start(Duration::from_millis(config::WATCHDOG_TIMEOUT_MS));

    unwrap!(spawner.spawn(tasks::panel_control::panel_control_task(
        r.buttons, r.relays, r.leds, r.aux_out,
    )));

    // Supervisor: feed the watchdog and report the panel state
    loop {
        Timer::after(Duration::from_millis(config::STATUS_LOG_INTERVAL_MS)).await;

        watchdog.feed();

        let status = *tasks::panel_control::PANEL_STATUS.lock().await;
        debug!(
            "relays: {} | mode: {} | leds: {=u16:#b}",
            status.relays,
            status.mode,
            status.led_field().bits()
        );
    }
}
