//! `wayline validate` - load the config and report every problem at once.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::AppConfig;
use crate::log;

pub fn run(config: &AppConfig) -> Result<()> {
    // Loading already ran validate(); getting here means the table builds too.
    let table = config.route_table()?;
    log!(
        "validate";
        "{} - {} route(s), default `{}`",
        "ok".green().bold(),
        table.len(),
        table.default_route().path
    );
    Ok(())
}
