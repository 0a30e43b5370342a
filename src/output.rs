// src/output.rs
use crate::engine::Heatmap;
use ndarray::Array2;
use std::fs::File;
use std::io::{self, Write};

/// Write one surface as CSV: header row of day-counts, then one row per
/// spot price with its label in the first column
pub fn write_surface_to_csv(
    filename: &str,
    spot_labels: &[f64],
    expiry_days: &[u32],
    surface: &Array2<f64>,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    write!(file, "spot")?;
    for d in expiry_days {
        write!(file, ",{}", d)?;
    }
    writeln!(file)?;

    for (i, label) in spot_labels.iter().enumerate() {
        write!(file, "{}", label)?;
        for j in 0..expiry_days.len() {
            write!(file, ",{}", surface[[i, j]])?;
        }
        writeln!(file)?;
    }
    Ok(())
}

/// Write the call and put surfaces of a heatmap to a pair of CSV files
pub fn write_heatmap_to_csv(
    call_filename: &str,
    put_filename: &str,
    heatmap: &Heatmap,
) -> io::Result<()> {
    write_surface_to_csv(
        call_filename,
        &heatmap.spot_labels,
        &heatmap.expiry_days,
        &heatmap.call,
    )?;
    write_surface_to_csv(
        put_filename,
        &heatmap.spot_labels,
        &heatmap.expiry_days,
        &heatmap.put,
    )
}

/// Write key/value summary data (market parameters, metric name) as CSV
pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, String)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
