// Volume and mute state of the PulseAudio default sink (`pacmd list-sinks`).

use crate::command::CommandRunner;
use crate::error::SourceError;
use crate::icons::{MUTED, VOLUME};

/// Volume state of one sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkVolume {
    pub left: u32,
    pub right: u32,
    pub muted: bool,
}

pub async fn sample(runner: &impl CommandRunner, argv: &[String]) -> Result<String, SourceError> {
    let output = runner.run(argv).await?;
    let sink = parse(&output)?;
    let icon = if sink.muted { MUTED } else { VOLUME };
    Ok(format!("{icon} {}%", sink.left))
}

pub fn fallback() -> String {
    format!("{MUTED} ERR")
}

/// Parses the default sink (marked `* index:`), or the first sink listed.
///
/// ```text
/// * index: 0
///     volume: front-left: 45875 /  70% / -9.29 dB,   front-right: 45875 /  70% / -9.29 dB
///     muted: no
/// ```
pub fn parse(output: &str) -> Result<SinkVolume, SourceError> {
    let blocks = sink_blocks(output);
    let block = blocks
        .iter()
        .find(|b| b.default)
        .or_else(|| blocks.first())
        .ok_or(no_match("sink"))?;

    let volume = block
        .lines
        .iter()
        .map(|l| l.trim_start())
        .find(|l| l.starts_with("volume:"))
        .ok_or(no_match("volume"))?;
    let left = channel_percent(volume, "front-left:").ok_or(no_match("front-left volume"))?;
    let right = channel_percent(volume, "front-right:").ok_or(no_match("front-right volume"))?;

    let muted = block
        .lines
        .iter()
        .find_map(|l| l.trim_start().strip_prefix("muted:"))
        .map(str::trim)
        .ok_or(no_match("mute flag"))?;
    let muted = match muted {
        "yes" => true,
        "no" => false,
        other => return Err(SourceError::parse("pacmd mute flag", other)),
    };

    Ok(SinkVolume { left, right, muted })
}

fn no_match(what: &'static str) -> SourceError {
    SourceError::NoMatch {
        command: "pacmd",
        what,
    }
}

struct SinkBlock<'a> {
    default: bool,
    lines: Vec<&'a str>,
}

fn sink_blocks(output: &str) -> Vec<SinkBlock<'_>> {
    let mut blocks: Vec<SinkBlock<'_>> = Vec::new();
    for line in output.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("index:") || trimmed.starts_with("* index:") {
            blocks.push(SinkBlock {
                default: trimmed.starts_with('*'),
                lines: Vec::new(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.lines.push(line);
        }
    }
    blocks
}

/// `front-left: 45875 /  70% / -9.29 dB` -> 70
fn channel_percent(line: &str, channel: &str) -> Option<u32> {
    let (_, rest) = line.split_once(channel)?;
    rest.split('/')
        .nth(1)?
        .trim()
        .strip_suffix('%')?
        .parse()
        .ok()
}
