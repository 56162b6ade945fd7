// Tick loop: sample every metric in a fixed order, publish the joined line,
// then sleep to the next wall-clock second.

use crate::clock::{Clock, next_tick_delay};
use crate::command::CommandRunner;
use crate::config::AppConfig;
use crate::error::SourceError;
use crate::models::{NetworkCounters, StatusLine};
use crate::publisher::Publisher;
use crate::samplers::{
    cpu, date, distro, keyboard, memory, network, power, power_time, volume, wifi,
};
use chrono::{DateTime, Local};
use tokio::sync::oneshot;
use tokio::time::{Duration, Instant};
use tracing::Instrument;

/// Rate limit for "publish failed" warning (avoid logging every second when the display is gone)
const PUBLISH_WARN_INTERVAL: Duration = Duration::from_secs(60);

/// External collaborators of the tick loop.
pub struct WorkerDeps<R, P, C> {
    pub runner: R,
    pub publisher: P,
    pub clock: C,
}

pub struct Worker<R, P, C> {
    config: AppConfig,
    runner: R,
    publisher: P,
    clock: C,
    /// Logical cores; scales the load average.
    cores: usize,
    /// Detected once at startup.
    distro: String,
    /// Interface totals seen on the previous tick.
    counters: NetworkCounters,
    last_publish_warn: Option<Instant>,
}

impl<R, P, C> Worker<R, P, C>
where
    R: CommandRunner,
    P: Publisher,
    C: Clock,
{
    /// Builds the worker, counting cores and detecting the distro once.
    pub async fn new(config: AppConfig, deps: WorkerDeps<R, P, C>) -> Self {
        let cores = cpu::core_count();
        Self::with_cores(config, deps, cores).await
    }

    pub async fn with_cores(config: AppConfig, deps: WorkerDeps<R, P, C>, cores: usize) -> Self {
        let WorkerDeps {
            runner,
            publisher,
            clock,
        } = deps;

        let distro = or_fallback(
            distro::sample(&runner, &config.commands.distro).await,
            "detect_distro",
            distro::fallback,
        );
        tracing::debug!(cores, distro = %distro, "worker initialized");

        Self {
            config,
            runner,
            publisher,
            clock,
            cores: cores.max(1),
            distro,
            counters: NetworkCounters::default(),
            last_publish_warn: None,
        }
    }

    /// Runs ticks until `shutdown_rx` fires (or its sender is dropped).
    pub async fn run(mut self, mut shutdown_rx: oneshot::Receiver<()>) {
        let span = tracing::span!(tracing::Level::DEBUG, "worker", cores = self.cores);
        async move {
            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Worker shutting down");
                        break;
                    }
                    _ = self.step() => {}
                }
            }
        }
        .instrument(span)
        .await
    }

    /// One full tick: compose, publish, sleep to the next second boundary.
    pub async fn step(&mut self) -> StatusLine {
        let tick_start = self.clock.now();
        let line = self.compose(tick_start).await;
        self.publish(&line).await;

        let delay = next_tick_delay(tick_start, self.clock.now());
        tracing::trace!(delay_ms = delay.as_millis() as u64, "tick done");
        self.clock.sleep(delay).await;
        line
    }

    /// Samples everything in display order. Never fails: a sampler error
    /// becomes that sampler's fallback fragment.
    pub async fn compose(&mut self, now: DateTime<Local>) -> StatusLine {
        let AppConfig {
            paths,
            network: net,
            commands,
            format,
        } = &self.config;

        let fields = vec![
            String::new(),
            or_fallback(
                volume::sample(&self.runner, &commands.volume).await,
                "volume",
                volume::fallback,
            ),
            or_fallback(
                wifi::sample(&self.runner, &commands.wifi).await,
                "wifi",
                wifi::fallback,
            ),
            or_fallback(
                network::sample(
                    &paths.net_dev,
                    &paths.avg_ping,
                    &net.devices,
                    &mut self.counters,
                    format.float_separator,
                ),
                "network",
                network::fallback,
            ),
            or_fallback(
                cpu::sample_load(&paths.loadavg, self.cores),
                "cpu_load",
                cpu::load_fallback,
            ),
            or_fallback(
                cpu::sample_temperature(&paths.thermal_zone),
                "cpu_temperature",
                cpu::temperature_fallback,
            ),
            or_fallback(memory::sample(&paths.meminfo), "memory", memory::fallback),
            or_fallback(power::sample(&paths.power_supply), "power", power::fallback),
            or_fallback(
                power_time::sample(&self.runner, &commands.power_time).await,
                "power_time",
                power_time::fallback,
            ),
            date::render(now, &format.date_format),
            or_fallback(
                keyboard::sample(&paths.keyboard_state),
                "keyboard",
                keyboard::fallback,
            ),
            self.distro.clone(),
        ];

        StatusLine::new(fields, format.field_separator.as_str())
    }

    async fn publish(&mut self, line: &StatusLine) {
        let Err(e) = self.publisher.publish(&line.to_string()).await else {
            return;
        };
        let should_warn = self
            .last_publish_warn
            .is_none_or(|t| t.elapsed() >= PUBLISH_WARN_INTERVAL);
        if should_warn {
            tracing::warn!(error = %e, operation = "publish", "Status line not published");
            self.last_publish_warn = Some(Instant::now());
        }
    }

    pub fn counters(&self) -> NetworkCounters {
        self.counters
    }
}

fn or_fallback(
    result: Result<String, SourceError>,
    operation: &'static str,
    fallback: fn() -> String,
) -> String {
    result.unwrap_or_else(|e| {
        tracing::debug!(error = %e, operation, "sample failed");
        fallback()
    })
}
