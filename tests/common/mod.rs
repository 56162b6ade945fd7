// Shared test helpers: a fake host filesystem and mock collaborators

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use dwmstat::clock::Clock;
use dwmstat::command::CommandRunner;
use dwmstat::config::AppConfig;
use dwmstat::error::SourceError;
use dwmstat::publisher::Publisher;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;

pub const MEMINFO: &str = "\
MemTotal:       16000000 kB
MemFree:         8000000 kB
MemAvailable:   12000000 kB
Buffers:         1000000 kB
Cached:          2000000 kB
";

/// Minimal /proc/net/dev with one allowed device.
pub fn net_dev(rx: u64, tx: u64) -> String {
    format!(
        "Inter-|   Receive                                                |  Transmit\n \
         face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed\n    \
         lo: 100 1 0 0 0 0 0 0 100 1 0 0 0 0 0 0\n  \
         eth0: {rx} 10 0 0 0 0 0 0 {tx} 20 0 0 0 0 0 0\n"
    )
}

/// A temp directory laid out like the parts of / that the samplers read.
pub struct Host {
    pub dir: TempDir,
}

impl Host {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Battery with `energy_*` files and the AC plug state.
    pub fn battery(&self, name: &str, full: u64, now: u64, plugged: bool) {
        self.write(
            "sys/class/power_supply/AC/online",
            if plugged { "1\n" } else { "0\n" },
        );
        self.write(
            &format!("sys/class/power_supply/{name}/energy_full"),
            &format!("{full}\n"),
        );
        self.write(
            &format!("sys/class/power_supply/{name}/energy_now"),
            &format!("{now}\n"),
        );
    }

    /// Default config with every path pointing into this host.
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.paths.net_dev = self.path("proc/net/dev");
        config.paths.loadavg = self.path("proc/loadavg");
        config.paths.meminfo = self.path("proc/meminfo");
        config.paths.thermal_zone = self.path("sys/class/thermal/thermal_zone1/temp");
        config.paths.power_supply = self.path("sys/class/power_supply");
        config.paths.avg_ping = self.path("home/tmp/avgping");
        config.paths.keyboard_state = self.path("home/.config/xmodmap_switcher/state");
        config.network.devices = vec!["eth0".into()];
        config
    }

    /// Populates every file source with plausible content.
    pub fn populate(&self) {
        self.write("proc/net/dev", &net_dev(0, 0));
        self.write("proc/loadavg", "2.00 1.00 0.50 1/200 1234\n");
        self.write("proc/meminfo", MEMINFO);
        self.write("sys/class/thermal/thermal_zone1/temp", "48000\n");
        self.battery("BAT0", 5000, 2500, false);
        self.write("home/tmp/avgping", "23.7\n");
        self.write("home/.config/xmodmap_switcher/state", "us\n");
    }
}

/// Answers commands by program name; unknown programs fail to spawn.
#[derive(Default, Clone)]
pub struct MockRunner {
    outputs: HashMap<String, Result<String, Option<i32>>>,
    pub calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockRunner {
    pub fn with_output(mut self, program: &str, output: &str) -> Self {
        self.outputs
            .insert(program.to_string(), Ok(output.to_string()));
        self
    }

    pub fn with_exit_code(mut self, program: &str, code: i32) -> Self {
        self.outputs.insert(program.to_string(), Err(Some(code)));
        self
    }
}

impl MockRunner {
    pub fn calls_to(&self, program: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|argv| argv.first().is_some_and(|p| p == program))
            .count()
    }
}

impl CommandRunner for MockRunner {
    async fn run(&self, argv: &[String]) -> Result<String, SourceError> {
        self.calls.borrow_mut().push(argv.to_vec());
        let program = argv.first().ok_or(SourceError::EmptyCommand)?;
        match self.outputs.get(program) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(code)) => Err(SourceError::ExitStatus {
                command: program.clone(),
                code: *code,
            }),
            None => Err(SourceError::Spawn {
                command: program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

/// Records published lines; optionally fails every publish.
#[derive(Default, Clone)]
pub struct MockPublisher {
    pub lines: Rc<RefCell<Vec<String>>>,
    pub fail: bool,
}

impl Publisher for MockPublisher {
    async fn publish(&self, line: &str) -> Result<(), SourceError> {
        self.lines.borrow_mut().push(line.to_string());
        if self.fail {
            return Err(SourceError::ExitStatus {
                command: "xsetroot".into(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

/// Hands out scripted times in order and records requested sleeps.
#[derive(Default, Clone)]
pub struct MockClock {
    times: Rc<RefCell<VecDeque<DateTime<Local>>>>,
    pub sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl MockClock {
    /// Times as milliseconds after a whole-second epoch instant.
    pub fn scripted(offsets_ms: &[i64]) -> Self {
        let clock = Self::default();
        clock
            .times
            .borrow_mut()
            .extend(offsets_ms.iter().map(|ms| at(*ms)));
        clock
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Local> {
        self.times
            .borrow_mut()
            .pop_front()
            .expect("mock times should not be empty")
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

pub fn at(offset_ms: i64) -> DateTime<Local> {
    Local
        .timestamp_millis_opt(1_700_000_000_000 + offset_ms)
        .unwrap()
}
