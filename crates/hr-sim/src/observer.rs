//! Simulation observer trait for progress reporting and telemetry.

use hr_core::Tick;

/// Per-tick train counts handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickReport {
    /// Trains in the `Moving` state after this tick.
    pub moving: usize,
    /// Trains in the `Broken` state after this tick.
    pub broken: usize,
}

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: TickReport) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} moving, {} broken", report.moving, report.broken);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the post-tick train counts.
    fn on_tick_end(&mut self, _tick: Tick, _report: TickReport) {}

    /// Called once after the last tick of a `run_ticks` call completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
