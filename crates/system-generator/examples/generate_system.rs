//! Generate star systems and print their overlay records as JSON
//!
//! Usage: cargo run -p system-generator --example generate_system [records.json]
//!
//! The optional file holds a JSON array of world records. Without it a few
//! Spinward Marches worlds are generated. Set `RUST_LOG=system_generator=debug`
//! to follow placement.

use std::{env, fs, process};

use system_generator::{GeneratorConfig, WorldRecord, enrich_planets};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn sample_records() -> Vec<WorldRecord> {
    let world = |hex: &str, name: &str, uwp: &str, pbg: &str, stars: &str| WorldRecord {
        sector: "Spinward Marches".to_string(),
        hex: hex.to_string(),
        name: name.to_string(),
        uwp: uwp.to_string(),
        pbg: Some(pbg.to_string()),
        stars: Some(stars.to_string()),
        ..WorldRecord::default()
    };
    vec![
        world("1910", "Regina", "A788899-C", "703", "F7 V BD M3 V"),
        world("2118", "Efate", "A646930-D", "603", "M0 V"),
        world("1717", "Rhylanor", "A434934-F", "810", "K3 V M8 V"),
        world("0812", "Ruie", "B000769-9", "514", "M2 V"),
    ]
}

fn load_records(path: &str) -> Result<Vec<WorldRecord>, String> {
    let text = fs::read_to_string(path).map_err(|err| format!("{}: {}", path, err))?;
    serde_json::from_str(&text).map_err(|err| format!("{}: {}", path, err))
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let records = match env::args().nth(1) {
        Some(path) => load_records(&path).unwrap_or_else(|err| {
            error!(%err, "could not read world records");
            process::exit(1);
        }),
        None => sample_records(),
    };

    let config = GeneratorConfig::default();
    let mut overlay = Vec::new();
    for record in &records {
        let worlds = enrich_planets(record, &config);
        info!(hex = %record.hex, name = %record.name, bodies = worlds.len() - 1, "generated");
        overlay.extend(worlds);
    }

    match serde_json::to_string_pretty(&overlay) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            error!(%err, "could not encode overlay");
            process::exit(1);
        }
    }
}
