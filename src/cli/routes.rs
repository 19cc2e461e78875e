//! `wayline routes` - print the resolved route table.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::AppConfig;

pub fn print_routes(config: &AppConfig) -> Result<()> {
    let table = config.route_table()?;
    let default = table.default_route().path.clone();

    for route in table.iter() {
        let marker = if route.path == default {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<24} {:<20} {}{}",
            route.path.cyan(),
            route.page_id,
            route.container_id.dimmed(),
            marker
        );
    }
    Ok(())
}
