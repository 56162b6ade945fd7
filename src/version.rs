// Build-time version from Cargo.toml, logged once at startup

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");
