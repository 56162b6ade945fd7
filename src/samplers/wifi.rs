// Wifi link quality as a percentage, computed by a helper over /proc/net/wireless.

use crate::command::CommandRunner;
use crate::error::SourceError;
use crate::icons::{WIFI_FULL, WIFI_HALF, WIFI_LOW, WIFI_OFF};

pub async fn sample(runner: &impl CommandRunner, argv: &[String]) -> Result<String, SourceError> {
    let output = runner.run(argv).await?;
    Ok(match parse(&output)? {
        Some(strength) => render(strength),
        None => format!("{WIFI_OFF} 0%"),
    })
}

pub fn fallback() -> String {
    format!("{WIFI_OFF} ERR")
}

/// The helper prints nothing when there is no wireless interface.
pub fn parse(output: &str) -> Result<Option<i64>, SourceError> {
    let strength = output.trim();
    if strength.is_empty() {
        return Ok(None);
    }
    strength
        .parse()
        .map(Some)
        .map_err(|e| SourceError::parse("wifi strength", format!("{strength:?}: {e}")))
}

/// Icon by strength; two spaces of padding below 10, one below 100.
/// Negative readings take the below-10 padding.
pub fn render(strength: i64) -> String {
    let icon = match strength {
        s if s > 70 => WIFI_FULL,
        s if s > 50 => WIFI_HALF,
        s if s > 20 => WIFI_LOW,
        _ => WIFI_OFF,
    };
    let pad = match strength {
        s if s >= 100 => "",
        s if s >= 10 => " ",
        _ => "  ",
    };
    format!("{icon}{pad}{strength}%")
}
