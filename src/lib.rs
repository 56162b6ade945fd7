// Library for tests to access modules

pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod icons;
pub mod models;
pub mod publisher;
pub mod rate;
pub mod samplers;
pub mod version;
pub mod worker;
