use defmt::*;
use embassy_executor::task;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, mutex::Mutex};
use embassy_time::{Duration, Instant, Ticker, Timer};
use panel_core::{
    ChaseFrames, DebouncedButton, DisplayMode, LedBank, NUM_CHANNELS, Panel, PanelStatus,
    PollReport, RelayBank,
};

use crate::config::{CHASE_STEP_MS, DEBOUNCE_MS, DEFAULT_RELAY_STATE, POLL_INTERVAL_MS};
use crate::config_resources::{
    AuxOutputResources, ButtonResources, LedResources, RelayResources,
};

pub type PanelType = Panel<Input<'static>, Output<'static>>;

const BUTTON_NAMES: [&str; NUM_CHANNELS] = ["X", "Y", "Z", "AUX4"];

/// Latest panel state, published by the control task for the supervisor.
pub static PANEL_STATUS: Mutex<CriticalSectionRawMutex, PanelStatus> = Mutex::new(PanelStatus {
    relays: DEFAULT_RELAY_STATE,
    mode: DisplayMode::Off,
});

fn new_panel(buttons: ButtonResources, relays: RelayResources, leds: LedResources) -> PanelType {
    let buttons = [
        Input::new(buttons.x, Pull::Up),
        Input::new(buttons.y, Pull::Up),
        Input::new(buttons.z, Pull::Up),
        Input::new(buttons.aux4, Pull::Up),
    ]
    .map(|pin| DebouncedButton::new(pin, DEBOUNCE_MS));

    // All relays start de-energized; the Z relay is driven active low.
    let relays = RelayBank::new(
        [
            Output::new(relays.x, Level::Low),
            Output::new(relays.y, Level::Low),
            Output::new(relays.z, Level::High),
            Output::new(relays.aux, Level::Low),
        ],
        DEFAULT_RELAY_STATE,
    );

    let leds = LedBank::new([
        Output::new(leds.x, Level::Low),
        Output::new(leds.y, Level::Low),
        Output::new(leds.z, Level::Low),
        Output::new(leds.aux, Level::Low),
        Output::new(leds.s0, Level::Low),
        Output::new(leds.s1, Level::Low),
        Output::new(leds.s2, Level::Low),
        Output::new(leds.s3, Level::Low),
        Output::new(leds.s4, Level::Low),
    ]);

    Panel::new(buttons, relays, leds)
}

async fn run_startup_chase(panel: &mut PanelType) {
    debug!("Running LED chase");
    for frame in ChaseFrames::new() {
        let Ok(()) = panel.show(frame);
        Timer::after(Duration::from_millis(CHASE_STEP_MS)).await;
    }
}

fn log_report(report: &PollReport, status: &PanelStatus) {
    for (i, name) in BUTTON_NAMES.iter().enumerate() {
        if report.toggled[i] {
            info!(
                "{} pressed, relay {}",
                name,
                if status.relays[i] { "on" } else { "off" }
            );
        }
    }
    if report.mode_changed {
        info!("Display mode: {}", status.mode);
    }
}

#[task]
pub async fn panel_control_task(
    buttons: ButtonResources,
    relays: RelayResources,
    leds: LedResources,
    aux_out: AuxOutputResources,
) {
    info!("Starting panel control task");

    let mut panel = new_panel(buttons, relays, leds);
    // Not used yet; keep it driven low so it does not float.
    let _aux_out = Output::new(aux_out.pin, Level::Low);

    run_startup_chase(&mut panel).await;

    let Ok(()) = panel.init();
    *PANEL_STATUS.lock().await = panel.status();

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    info!("Panel control task initialized");

    loop {
        ticker.next().await;

        let Ok(report) = panel.poll(Instant::now().as_millis());
        if report.is_empty() {
            continue;
        }

        let status = panel.status();
        log_report(&report, &status);
        *PANEL_STATUS.lock().await = status;
    }
}
