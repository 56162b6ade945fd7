// Glyphs for the status line (Font Awesome / Nerd Font code points).

pub const BYTES: &str = "b";
pub const KIBIBYTES: &str = "K";
pub const MEBIBYTES: &str = "M";

pub const BATTERY_100: &str = "\u{f240}";
pub const BATTERY_75: &str = "\u{f241}";
pub const BATTERY_50: &str = "\u{f242}";
pub const BATTERY_25: &str = "\u{f243}";
pub const BATTERY_10: &str = "\u{f244}";
pub const PLUGGED: &str = "\u{f492}";
/// Shown next to the battery icon when it needs attention (low, or full on AC).
pub const BATTERY_ALERT: &str = "\u{f12a}";

pub const CPU: &str = "\u{e234}";
pub const CPU_TEMP: &str = "\u{f2c9}";
pub const MEMORY: &str = "\u{f2db}";

pub const NET_RECEIVED: &str = "\u{2bae}";
pub const NET_TRANSMITTED: &str = "\u{2bad}";
pub const PING: &str = "\u{2b7f}";

pub const VOLUME: &str = "\u{f028}";
pub const MUTED: &str = "\u{f466}";

pub const WIFI_FULL: &str = "\u{f1eb}\u{2846}";
pub const WIFI_HALF: &str = "\u{f1eb}\u{2844}";
pub const WIFI_LOW: &str = "\u{f1eb}\u{2840}";
pub const WIFI_OFF: &str = "\u{f1eb}\u{2a2f}";

pub const KEYBOARD: &str = "\u{f11c}";
pub const CLOCK: &str = "\u{f017}";

pub const DISTRO_LINUX: &str = "\u{e712}";
pub const DISTRO_ARCH: &str = "\u{f300}";
pub const DISTRO_SLACKWARE: &str = "\u{f30a}";
