//! Match scheduler process.
//!
//! Bootstraps logging, installs the shutdown handler, and runs the fixed-
//! cadence tick loop against an empty registry. Wiring a transport layer
//! onto `Scheduler`'s five external operations is outside this workspace.

#[tokio::main]
async fn main() {
    hexwar_core::log();
    hexwar_core::install_shutdown_handler();

    let scheduler = hexwar_scheduler::Scheduler::new();
    scheduler.run_cadence().await;
}
