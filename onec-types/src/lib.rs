#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod product;
pub mod session;
pub mod settings;

/// Parses durations written either the `duration-str` way (`30m`, `1h 30m`)
/// or with the short russian units 1C operators tend to type (`30мин`, `24ч`).
pub fn parse_duration(duration: &str) -> Result<std::time::Duration, anyhow::Error> {
    let duration = duration
        .trim()
        .to_lowercase()
        .replace('.', "")
        .replace("сек", "s")
        .replace("мин", "m")
        .replace("час", "h")
        .replace('с', "s")
        .replace('м', "m")
        .replace('ч', "h")
        .replace('д', "d");
    duration_str::parse(duration).map_err(|err| anyhow::anyhow!("Unable to parse duration: {err}"))
}
