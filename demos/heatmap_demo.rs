// demos/heatmap_demo.rs
//! End-to-end demo: build every heatmap the engine offers for one
//! parameter set and print the call surfaces.

use bs_heatmap::engine::{compute, Greek, HeatmapConfig, PnlMode, Selection};
use bs_heatmap::output::{write_heatmap_to_csv, write_summary_to_csv};

fn print_surface(title: &str, heatmap: &bs_heatmap::Heatmap) {
    println!("\n=== {} (call) ===", title);
    print!("{:>10}", "spot");
    for d in &heatmap.expiry_days {
        print!("{:>10}", format!("{}d", d));
    }
    println!();
    for (i, label) in heatmap.spot_labels.iter().enumerate() {
        print!("{:>10.2}", label);
        for j in 0..heatmap.expiry_days.len() {
            print!("{:>10.3}", heatmap.call[[i, j]]);
        }
        println!();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = HeatmapConfig {
        spot: 100.0,
        strike: 100.0,
        days_to_expiry: 30,
        rate: 0.05,
        volatility: 0.5,
        range_pct: 20,
    };

    let value = compute(&config, Selection::Value)?;
    print_surface("Option value", &value);

    let pnl = compute(
        &config,
        Selection::Pnl {
            mode: PnlMode::Dollars,
            amount_paid: 5.0,
        },
    )?;
    print_surface("P/L $ against 5.00 premium", &pnl);

    for greek in Greek::ALL {
        let surface = compute(&config, Selection::Greek(greek))?;
        print_surface(greek.name(), &surface);
    }

    write_heatmap_to_csv("value_call.csv", "value_put.csv", &value)?;
    write_summary_to_csv(
        "value_summary.csv",
        &[
            ("metric", "Value".to_string()),
            ("spot", config.spot.to_string()),
            ("strike", config.strike.to_string()),
            ("days_to_expiry", config.days_to_expiry.to_string()),
            ("rate", config.rate.to_string()),
            ("volatility", config.volatility.to_string()),
            ("range_pct", config.range_pct.to_string()),
        ],
    )?;
    println!("\nWrote value_call.csv, value_put.csv and value_summary.csv");

    Ok(())
}
