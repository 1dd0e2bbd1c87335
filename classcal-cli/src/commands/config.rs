use anyhow::Result;
use classcal_core::config::ClasscalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &ClasscalConfig) -> Result<()> {
    let config_path = ClasscalConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", config.data_path().display());

    if let Some(group) = &config.default_group {
        println!();
        println!("{}", "Defaults".bold());
        println!("  Group:   {}", group);
    }

    Ok(())
}
