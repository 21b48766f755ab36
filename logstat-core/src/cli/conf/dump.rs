use crate::conf::AnalyzerConfig;
use serde::Serialize;
use std::path::PathBuf;

pub fn dump(path: PathBuf, toml: bool) -> anyhow::Result<()> {
    let cfg = AnalyzerConfig::from_file(&path)?;

    if toml {
        dump_toml(&cfg)?;
    } else {
        dump_json(&cfg)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_toml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = toml::to_string_pretty(value)?;
    print!("{s}");
    Ok(())
}
