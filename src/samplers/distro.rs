// Distribution icon, detected once from `uname -a`.

use crate::command::CommandRunner;
use crate::error::SourceError;
use crate::icons::{DISTRO_ARCH, DISTRO_LINUX, DISTRO_SLACKWARE};
use regex::Regex;
use std::sync::LazyLock;

static DISTRO_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"arch|slack").expect("distro keyword pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distro {
    Arch,
    Slackware,
    Other,
}

impl Distro {
    pub fn icon(self) -> &'static str {
        match self {
            Distro::Arch => DISTRO_ARCH,
            Distro::Slackware => DISTRO_SLACKWARE,
            Distro::Other => DISTRO_LINUX,
        }
    }
}

pub async fn sample(runner: &impl CommandRunner, argv: &[String]) -> Result<String, SourceError> {
    let output = runner.run(argv).await?;
    Ok(detect(&output).icon().to_string())
}

pub fn fallback() -> String {
    Distro::Other.icon().to_string()
}

/// Last distro keyword on the first line that has one.
pub fn detect(uname: &str) -> Distro {
    let keyword = uname
        .lines()
        .find_map(|line| DISTRO_KEYWORD.find_iter(line).last());
    match keyword.map(|m| m.as_str()) {
        Some("arch") => Distro::Arch,
        Some("slack") => Distro::Slackware,
        _ => Distro::Other,
    }
}
