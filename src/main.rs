//! Demo entry point: drives the location store against the simulated service and
//! prints every section as it changes.

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;

use location_redux::domain::AuthorizationStatus;
use location_redux::infra::app_config::{self, AppConfig};
use location_redux::ui::app::{AppState, LifecycleAction, StoreHandle};
use location_redux::ui::views::authorization::AuthorizationViewAction;
use location_redux::ui::views::beacon_ranging::BeaconRangingViewAction;
use location_redux::ui::views::heading_updates::HeadingUpdatesViewAction;
use location_redux::ui::views::location_monitoring::LocationMonitoringViewAction;
use location_redux::ui::views::region_monitoring::RegionMonitoringViewAction;
use location_redux::ui::views::slc_monitoring::SlcMonitoringViewAction;
use location_redux::ui::views::visit_monitoring::VisitMonitoringViewAction;
use location_redux::ui::views::{Labeled, Sections};

#[derive(Parser, Debug)]
#[command(name = "location-redux")]
#[command(version)]
#[command(about = "Location services driven through a unidirectional store", long_about = None)]
struct Args {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long to run the scripted session
    #[arg(short, long, default_value_t = 5)]
    duration_secs: u64,

    /// Request "always" instead of "when in use" authorization
    #[arg(long)]
    always: bool,

    /// Print section states as JSON lines
    #[arg(long)]
    json: bool,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    save_config: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => Ok(app_config::load_config_from(path)?
            .with_context(|| format!("Config file {} does not exist", path.display()))?),
        None => Ok(app_config::load_config()),
    }
}

fn print_lines(lines: &[Labeled<String>]) {
    for line in lines {
        println!("  {}", line.text());
    }
}

fn render(sections: &Sections, json: bool) -> Result<()> {
    if json {
        let line = serde_json::json!({
            "authorization": sections.authorization.state(),
            "information": sections.information.state(),
            "location_monitoring": sections.location_monitoring.state(),
            "slc_monitoring": sections.slc_monitoring.state(),
            "heading_updates": sections.heading_updates.state(),
            "region_monitoring": sections.region_monitoring.state(),
            "beacon_ranging": sections.beacon_ranging.state(),
            "visit_monitoring": sections.visit_monitoring.state(),
            "device_capabilities": sections.device_capabilities.state(),
        });
        println!("{}", serde_json::to_string(&line).context("Failed to encode snapshot")?);
        return Ok(());
    }

    let authorization = sections.authorization.state();
    let information = sections.information.state();
    let heading = sections.heading_updates.state();
    let region = sections.region_monitoring.state();
    let beacons = sections.beacon_ranging.state();
    let visits = sections.visit_monitoring.state();
    println!("--");
    print_lines(&[
        authorization.authorization,
        authorization.accuracy,
        information.location,
        information.error,
        heading.heading,
        region.region,
        beacons.beacons,
        visits.visit,
    ]);
    Ok(())
}

async fn wait_until(store: &StoreHandle, predicate: impl Fn(&AppState) -> bool) {
    let mut updates = store.subscribe();
    if predicate(&store.state()) {
        return;
    }
    while let Ok(state) = updates.recv().await {
        if predicate(&state) {
            return;
        }
    }
}

async fn run_script(store: StoreHandle, sections: Sections, always: bool) {
    store.dispatch(LifecycleAction::DidBecomeActive);

    sections
        .authorization
        .dispatch(AuthorizationViewAction::ToggleAuthType(always));
    sections
        .authorization
        .dispatch(AuthorizationViewAction::RequestAuthorizationTapped);
    wait_until(&store, |state| {
        state.authorization.status != AuthorizationStatus::NotDetermined
    })
    .await;

    if !store.state().authorization.status.is_authorized() {
        log::warn!("location access was not granted, toggles will report errors");
    }

    sections
        .location_monitoring
        .dispatch(LocationMonitoringViewAction::ToggleLocationMonitoring(true));
    sections
        .heading_updates
        .dispatch(HeadingUpdatesViewAction::ToggleHeadingServices(true));
    sections
        .region_monitoring
        .dispatch(RegionMonitoringViewAction::ToggleRegionMonitoring(true));
    sections
        .beacon_ranging
        .dispatch(BeaconRangingViewAction::ToggleBeaconRanging(true));
    sections
        .visit_monitoring
        .dispatch(VisitMonitoringViewAction::ToggleVisitEventsService(true));
    sections
        .slc_monitoring
        .dispatch(SlcMonitoringViewAction::ToggleSlcServices(true));
    sections
        .region_monitoring
        .dispatch(RegionMonitoringViewAction::GetRegionStateTapped);
    sections
        .location_monitoring
        .dispatch(LocationMonitoringViewAction::GetPositionTapped);
}

fn stop_all(sections: &Sections) {
    sections
        .location_monitoring
        .dispatch(LocationMonitoringViewAction::ToggleLocationMonitoring(false));
    sections
        .heading_updates
        .dispatch(HeadingUpdatesViewAction::ToggleHeadingServices(false));
    sections
        .region_monitoring
        .dispatch(RegionMonitoringViewAction::ToggleRegionMonitoring(false));
    sections
        .beacon_ranging
        .dispatch(BeaconRangingViewAction::ToggleBeaconRanging(false));
    sections
        .visit_monitoring
        .dispatch(VisitMonitoringViewAction::ToggleVisitEventsService(false));
    sections
        .slc_monitoring
        .dispatch(SlcMonitoringViewAction::ToggleSlcServices(false));
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.save_config {
        let path = args.config.clone().unwrap_or_else(app_config::config_path);
        // Missing keys are filled with defaults on the way through.
        let config = app_config::load_config_from(&path)?.unwrap_or_default();
        app_config::save_config_to(&config, &path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let config = load_config(args.config.as_ref())?;
    log::info!(
        "monitoring region {} and beacon {}",
        config.region.id,
        config.beacon.id()
    );

    let store = location_redux::start_simulated_store(&config);
    let handle = store.handle();
    let sections = Sections::new(&handle, &config);

    let mut updates = Box::pin(sections.information.updates());
    tokio::spawn(run_script(handle.clone(), sections.clone(), args.always));

    let deadline = tokio::time::sleep(Duration::from_secs(args.duration_secs));
    tokio::pin!(deadline);

    let mut last = None;
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            update = updates.next() => {
                let Some(_) = update else { break };
                // Views compare derived states themselves; skip identical frames.
                let frame = (
                    sections.authorization.state(),
                    sections.information.state(),
                    sections.heading_updates.state(),
                    sections.region_monitoring.state(),
                    sections.beacon_ranging.state(),
                    sections.visit_monitoring.state(),
                );
                if last.as_ref() != Some(&frame) {
                    render(&sections, args.json)?;
                    last = Some(frame);
                }
            }
        }
    }

    stop_all(&sections);
    store.shutdown().await;

    if !args.json {
        let capabilities = sections.device_capabilities.state();
        println!("-- {}", capabilities.title);
        print_lines(&[
            capabilities.location_available,
            capabilities.slc_capable,
            capabilities.region_monitoring_capable,
            capabilities.ranging_capable,
            capabilities.heading_capable,
        ]);
    }
    Ok(())
}
