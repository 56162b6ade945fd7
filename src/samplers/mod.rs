// Per-metric samplers. Each returns its fragment or the reason it has none;
// the worker swaps a failure for the sampler's `fallback()` fragment.

mod linux;

pub mod cpu;
pub mod date;
pub mod distro;
pub mod keyboard;
pub mod memory;
pub mod network;
pub mod power;
pub mod power_time;
pub mod volume;
pub mod wifi;
