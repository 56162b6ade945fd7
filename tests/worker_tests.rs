// Tick loop tests: composition order, fallbacks, publishing and second alignment

mod common;

use common::{Host, MockClock, MockPublisher, MockRunner, at, net_dev};
use dwmstat::icons::*;
use dwmstat::worker::{Worker, WorkerDeps};
use std::time::Duration;

const PACMD: &str = "* index: 0\n\tvolume: front-left: 45875 /  70% / -9.29 dB,   front-right: 45875 /  70% / -9.29 dB\n\tmuted: no\n";

fn healthy_runner() -> MockRunner {
    MockRunner::default()
        .with_output("pacmd", PACMD)
        .with_output("awk", " 86")
        .with_output("acpi", "Battery 0: Discharging, 50%, 02:10:00 remaining\n")
        .with_output("uname", "Linux t 6.6.1-arch1-1 x86_64 GNU/Linux\n")
        .with_output("xsetroot", "")
}

async fn worker(
    host: &Host,
    runner: MockRunner,
    publisher: MockPublisher,
    clock: MockClock,
) -> Worker<MockRunner, MockPublisher, MockClock> {
    Worker::with_cores(
        host.config(),
        WorkerDeps {
            runner,
            publisher,
            clock,
        },
        4,
    )
    .await
}

#[tokio::test]
async fn composes_fields_in_display_order() {
    let host = Host::new();
    host.populate();
    let publisher = MockPublisher::default();
    let mut worker = worker(&host, healthy_runner(), publisher.clone(), MockClock::default()).await;

    let line = worker.compose(at(0)).await;
    let fields = line.fields();
    assert_eq!(fields.len(), 12);
    assert_eq!(fields[0], "");
    assert_eq!(fields[1], format!("{VOLUME} 70%"));
    assert_eq!(fields[2], format!("{WIFI_FULL} 86%"));
    assert!(fields[3].starts_with(NET_RECEIVED));
    assert!(fields[3].ends_with(&format!("{PING} 23ms")));
    assert_eq!(fields[4], format!("{CPU} 50%"));
    assert_eq!(fields[5], format!("{CPU_TEMP} 48°C"));
    assert_eq!(fields[6], format!("{MEMORY} 4.77/15.26GB"));
    assert_eq!(fields[7], format!("{BATTERY_50}{BATTERY_ALERT} 50%"));
    assert_eq!(fields[8], "02:10");
    assert!(fields[9].starts_with(CLOCK));
    assert_eq!(fields[10], format!("{KEYBOARD} us"));
    assert_eq!(fields[11], DISTRO_ARCH);

    assert_eq!(line.to_string(), fields.join(" "));
    assert!(line.to_string().starts_with(' '));
}

#[tokio::test]
async fn every_sampler_failing_still_composes_a_line() {
    let host = Host::new();
    let publisher = MockPublisher::default();
    let clock = MockClock::scripted(&[0, 10]);
    let mut worker = worker(&host, MockRunner::default(), publisher.clone(), clock).await;

    let line = worker.step().await;
    let fields = line.fields();
    assert_eq!(fields[1], format!("{MUTED} ERR"));
    assert_eq!(fields[2], format!("{WIFI_OFF} ERR"));
    assert_eq!(fields[3], format!("{NET_RECEIVED} ERR {NET_TRANSMITTED} ERR"));
    assert_eq!(fields[4], format!("{CPU}ERR"));
    assert_eq!(fields[5], format!("{CPU_TEMP} ERR"));
    assert_eq!(fields[6], format!("{MEMORY}ERR"));
    assert_eq!(fields[7], "|ERR");
    assert_eq!(fields[8], "unknown");
    assert_eq!(fields[10], format!("{KEYBOARD} default"));
    assert_eq!(fields[11], DISTRO_LINUX);

    assert_eq!(publisher.lines.borrow().len(), 1);
}

#[tokio::test]
async fn publishes_rendered_line_with_publish_command() {
    let host = Host::new();
    host.populate();
    let publisher = MockPublisher::default();
    let clock = MockClock::scripted(&[0, 100]);
    let mut worker = worker(&host, healthy_runner(), publisher.clone(), clock).await;

    let line = worker.step().await;
    assert_eq!(*publisher.lines.borrow(), vec![line.to_string()]);
}

#[tokio::test]
async fn ticks_align_to_second_boundaries() {
    let host = Host::new();
    host.populate();
    // tick start, then "now" after sampling, for three ticks
    let clock = MockClock::scripted(&[0, 300, 1_000, 1_950, 2_000, 2_001]);
    let mut worker = worker(&host, healthy_runner(), MockPublisher::default(), clock.clone()).await;

    for _ in 0..3 {
        worker.step().await;
    }
    assert_eq!(
        *clock.sleeps.borrow(),
        vec![
            Duration::from_millis(700),
            Duration::from_millis(50),
            Duration::from_millis(999),
        ]
    );
}

#[tokio::test]
async fn overlong_tick_starts_next_immediately() {
    let host = Host::new();
    let clock = MockClock::scripted(&[0, 1_400]);
    let mut worker = worker(&host, MockRunner::default(), MockPublisher::default(), clock.clone()).await;

    worker.step().await;
    assert_eq!(*clock.sleeps.borrow(), vec![Duration::ZERO]);
}

#[tokio::test]
async fn idle_network_reads_zero_on_second_tick() {
    let host = Host::new();
    host.populate();
    host.write("proc/net/dev", &net_dev(5_000_000, 7_000_000));
    let clock = MockClock::scripted(&[0, 1, 1_000, 1_001]);
    let mut worker = worker(&host, healthy_runner(), MockPublisher::default(), clock).await;

    worker.step().await;
    assert_eq!(worker.counters().received, 5_000_000);
    let second = worker.step().await;
    assert!(
        second.fields()[3].starts_with(&format!("{NET_RECEIVED}   0b {NET_TRANSMITTED}   0b")),
        "{:?}",
        second.fields()[3]
    );
}

#[tokio::test]
async fn publish_failure_does_not_stop_ticking() {
    let host = Host::new();
    host.populate();
    let publisher = MockPublisher {
        fail: true,
        ..Default::default()
    };
    let clock = MockClock::scripted(&[0, 1, 1_000, 1_001]);
    let mut worker = worker(&host, healthy_runner(), publisher.clone(), clock).await;

    worker.step().await;
    worker.step().await;
    assert_eq!(publisher.lines.borrow().len(), 2);
}

#[tokio::test]
async fn distro_detected_once_at_startup() {
    let host = Host::new();
    host.populate();
    let runner = healthy_runner();
    let clock = MockClock::scripted(&[0, 1, 1_000, 1_001]);
    let mut worker = worker(&host, runner.clone(), MockPublisher::default(), clock).await;

    worker.step().await;
    worker.step().await;
    let line = worker.compose(at(2_000)).await;
    assert_eq!(line.fields()[11], DISTRO_ARCH);
    assert_eq!(runner.calls_to("uname"), 1);
    assert_eq!(runner.calls_to("pacmd"), 3);
}

#[tokio::test]
async fn run_stops_on_shutdown() {
    let host = Host::new();
    let clock = MockClock::scripted(&[0, 1]);
    let worker = worker(&host, MockRunner::default(), MockPublisher::default(), clock).await;

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), worker.run(shutdown_rx))
        .await
        .expect("worker should stop after shutdown");
}
