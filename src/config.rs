use anyhow::Context;
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Everything tunable. `AppConfig::default()` is the complete built-in setup;
/// a TOML file only overrides the fields it names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub network: NetworkConfig,
    pub commands: CommandsConfig,
    pub format: FormatConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub net_dev: PathBuf,
    pub loadavg: PathBuf,
    pub meminfo: PathBuf,
    pub thermal_zone: PathBuf,
    pub power_supply: PathBuf,
    /// Average ping in milliseconds, refreshed by an external cron job.
    pub avg_ping: PathBuf,
    /// Current keyboard layout name, written by the layout switcher.
    pub keyboard_state: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Interfaces whose traffic is summed into the rate fragment.
    pub devices: Vec<String>,
}

/// External commands as argv. The publish command gets the status line appended.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    pub timeout_ms: u64,
    pub volume: Vec<String>,
    pub power_time: Vec<String>,
    pub wifi: Vec<String>,
    pub distro: Vec<String>,
    pub publish: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub field_separator: String,
    pub float_separator: char,
    /// strftime pattern for the date fragment (after the clock icon).
    pub date_format: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            net_dev: "/proc/net/dev".into(),
            loadavg: "/proc/loadavg".into(),
            meminfo: "/proc/meminfo".into(),
            thermal_zone: "/sys/class/thermal/thermal_zone1/temp".into(),
            power_supply: "/sys/class/power_supply".into(),
            avg_ping: home_path("tmp/avgping"),
            keyboard_state: home_path(".config/xmodmap_switcher/state"),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            devices: ["eth0", "eth1", "wlan0", "ppp0", "wlp4s0"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 2000,
            volume: argv(&["pacmd", "list-sinks"]),
            power_time: argv(&["acpi", "-b"]),
            wifi: argv(&[
                "awk",
                "NR==3 {printf \"%3.0f\" ,($3/70)*100}",
                "/proc/net/wireless",
            ]),
            distro: argv(&["uname", "-a"]),
            publish: argv(&["xsetroot", "-name"]),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            field_separator: " ".into(),
            float_separator: '.',
            date_format: "%a %b %d %H:%M".into(),
        }
    }
}

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

fn home_path(relative: &str) -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(relative)
}

impl AppConfig {
    /// Loads `CONFIG_FILE` when set, otherwise returns the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => {
                let s = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                Self::load_from_str(&s)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let paths = [
            ("paths.net_dev", &self.paths.net_dev),
            ("paths.loadavg", &self.paths.loadavg),
            ("paths.meminfo", &self.paths.meminfo),
            ("paths.thermal_zone", &self.paths.thermal_zone),
            ("paths.power_supply", &self.paths.power_supply),
            ("paths.avg_ping", &self.paths.avg_ping),
            ("paths.keyboard_state", &self.paths.keyboard_state),
        ];
        for (name, path) in paths {
            anyhow::ensure!(!is_empty(path), "{} must be non-empty", name);
        }

        anyhow::ensure!(
            self.commands.timeout_ms > 0,
            "commands.timeout_ms must be > 0, got {}",
            self.commands.timeout_ms
        );
        let commands = [
            ("commands.volume", &self.commands.volume),
            ("commands.power_time", &self.commands.power_time),
            ("commands.wifi", &self.commands.wifi),
            ("commands.distro", &self.commands.distro),
            ("commands.publish", &self.commands.publish),
        ];
        for (name, argv) in commands {
            anyhow::ensure!(
                argv.first().is_some_and(|program| !program.is_empty()),
                "{} must name a program",
                name
            );
        }

        anyhow::ensure!(
            !StrftimeItems::new(&self.format.date_format).any(|item| matches!(item, Item::Error)),
            "format.date_format is not a valid strftime pattern: {:?}",
            self.format.date_format
        );
        Ok(())
    }

    pub fn command_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.commands.timeout_ms)
    }
}

fn is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
