use anyhow::Result;
use owo_colors::OwoColorize;
use showbill_core::GlobalConfig;

pub fn run(config: &GlobalConfig) -> Result<()> {
    let path = GlobalConfig::config_path()?;

    println!("{} {}", "config:".dimmed(), path.display());
    println!("feed_url = {}", config.feed_url);
    println!("show_past = {}", config.show_past);
    println!("date_label = {}", config.date_label);
    println!("theme = {}", config.theme);

    Ok(())
}
