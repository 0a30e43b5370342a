// src/engine.rs
//! Heatmap pricing engine
//!
//! Evaluates the closed-form Black-Scholes formulas from [`crate::analytics`]
//! over the cross product of the spot and expiry axes built by
//! [`crate::grid`], producing one call matrix and one put matrix per
//! requested metric. Matrices are indexed `[spot][expiry]`: row `i`
//! corresponds to `grid.spots[i]`, column `j` to `grid.expiry_days[j]`.
//!
//! Each request is a pure function of its configuration; nothing is cached
//! between requests. Rows are evaluated in parallel with Rayon: cells are
//! independent, only the final row/column ordering matters.

use crate::analytics::{self, DAYS_PER_YEAR};
use crate::error::{validation::*, HeatmapError, HeatmapResult};
use crate::grid::Grid;
use crate::math_utils::round3;
use bitflags::bitflags;
use ndarray::Array2;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Market parameters for one heatmap evaluation
///
/// # Conventions
///
/// - `rate` is an annualized fraction (0.05 = 5%).
/// - `volatility` is an annualized fraction (0.5 = 50%), **not** a
///   percentage.
/// - `range_pct` is the half-width of the displayed spot window in
///   percent, 1 to 455.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapConfig {
    pub spot: f64,
    pub strike: f64,
    pub days_to_expiry: u32,
    pub rate: f64,
    pub volatility: f64,
    pub range_pct: u32,
}

impl HeatmapConfig {
    /// Validate the configuration before any formula evaluation
    ///
    /// Zero volatility or zero days-to-expiry would put a zero in the
    /// denominator of d1, so both are rejected here rather than left to
    /// surface as NaN in the output.
    pub fn validate(&self) -> HeatmapResult<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_days(self.days_to_expiry)?;
        validate_finite("rate", self.rate)?;
        validate_finite("volatility", self.volatility)?;
        validate_positive("volatility", self.volatility)?;
        validate_range_u32("range_pct", self.range_pct, 1, 455)?;
        Ok(())
    }

    /// Build the evaluation grid for this configuration
    pub fn grid(&self) -> HeatmapResult<Grid> {
        self.validate()?;
        Ok(Grid::build(self.spot, self.days_to_expiry, self.range_pct))
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        HeatmapConfig {
            spot: 100.0,
            strike: 100.0,
            days_to_expiry: 30,
            rate: 0.05,
            volatility: 0.5,
            range_pct: 20,
        }
    }
}

/// The five first-order sensitivities the engine can map over the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greek {
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

type PricingFn = fn(f64, f64, f64, f64, f64) -> f64;

impl Greek {
    pub const ALL: [Greek; 5] = [
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
        Greek::Rho,
    ];

    /// Formula pair (call, put) for this Greek
    ///
    /// Gamma and Vega are strike-symmetric, so the same function serves
    /// both sides.
    fn formulas(self) -> (PricingFn, PricingFn) {
        match self {
            Greek::Delta => (analytics::call_delta, analytics::put_delta),
            Greek::Gamma => (analytics::gamma, analytics::gamma),
            Greek::Vega => (analytics::vega, analytics::vega),
            Greek::Theta => (analytics::call_theta, analytics::put_theta),
            Greek::Rho => (analytics::call_rho, analytics::put_rho),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Vega => "Vega",
            Greek::Theta => "Theta",
            Greek::Rho => "Rho",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Greek {
    type Err = HeatmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delta" => Ok(Greek::Delta),
            "gamma" => Ok(Greek::Gamma),
            "vega" => Ok(Greek::Vega),
            "theta" => Ok(Greek::Theta),
            "rho" => Ok(Greek::Rho),
            _ => Err(HeatmapError::InvalidArgument {
                argument: "greek".to_string(),
                value: s.to_string(),
                expected: "Delta, Gamma, Vega, Theta, Rho".to_string(),
            }),
        }
    }
}

bitflags! {
    /// Batch selection of Greek surfaces, for callers that render several
    /// sensitivities from one parameter set
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreekSet: u32 {
        const DELTA = 1 << 0;
        const GAMMA = 1 << 1;
        const VEGA  = 1 << 2;
        const THETA = 1 << 3;
        const RHO   = 1 << 4;
    }
}

impl From<Greek> for GreekSet {
    fn from(greek: Greek) -> Self {
        match greek {
            Greek::Delta => GreekSet::DELTA,
            Greek::Gamma => GreekSet::GAMMA,
            Greek::Vega => GreekSet::VEGA,
            Greek::Theta => GreekSet::THETA,
            Greek::Rho => GreekSet::RHO,
        }
    }
}

/// Denomination for profit/loss transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnlMode {
    /// Absolute: `value - amount_paid`
    Dollars,
    /// Relative: `(value - amount_paid) / amount_paid * 100`
    Percent,
}

impl FromStr for PnlMode {
    type Err = HeatmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "$" => Ok(PnlMode::Dollars),
            "%" => Ok(PnlMode::Percent),
            _ => Err(HeatmapError::InvalidArgument {
                argument: "pnl mode".to_string(),
                value: s.to_string(),
                expected: "$, %".to_string(),
            }),
        }
    }
}

/// Which metric the heatmap shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// Theoretical option value
    Value,
    /// Profit/loss of the value surface against a premium paid
    Pnl { mode: PnlMode, amount_paid: f64 },
    /// One of the five sensitivities
    Greek(Greek),
}

/// Call and put matrices of the same shape, indexed `[spot][expiry]`
#[derive(Debug, Clone, PartialEq)]
pub struct SurfacePair {
    pub call: Array2<f64>,
    pub put: Array2<f64>,
}

/// A fully evaluated heatmap: the two surfaces plus axis labels for
/// rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub call: Array2<f64>,
    pub put: Array2<f64>,
    /// Spot prices rounded to 2 decimals, one per matrix row
    pub spot_labels: Vec<f64>,
    /// Day-counts, one per matrix column
    pub expiry_days: Vec<u32>,
}

/// Evaluate a (call, put) scalar formula pair over the whole grid
///
/// Rows (spot prices) are mapped in parallel; every cell is rounded to 3
/// decimals. Fails if any cell comes out non-finite, which with validated
/// inputs indicates a formula-domain problem rather than user error.
fn eval_surfaces(
    cfg: &HeatmapConfig,
    grid: &Grid,
    operation: &str,
    call_fn: PricingFn,
    put_fn: PricingFn,
) -> HeatmapResult<SurfacePair> {
    let (rows, cols) = grid.shape();

    let cells: Vec<(Vec<f64>, Vec<f64>)> = grid
        .spots
        .par_iter()
        .map(|&s| {
            let mut call_row = Vec::with_capacity(cols);
            let mut put_row = Vec::with_capacity(cols);
            for &d in &grid.expiry_days {
                let t = d as f64 / DAYS_PER_YEAR;
                call_row.push(round3(call_fn(s, cfg.strike, cfg.rate, cfg.volatility, t)));
                put_row.push(round3(put_fn(s, cfg.strike, cfg.rate, cfg.volatility, t)));
            }
            (call_row, put_row)
        })
        .collect();

    let mut call_flat = Vec::with_capacity(rows * cols);
    let mut put_flat = Vec::with_capacity(rows * cols);
    for (call_row, put_row) in cells {
        call_flat.extend(call_row);
        put_flat.extend(put_row);
    }

    if call_flat.iter().chain(put_flat.iter()).any(|v| !v.is_finite()) {
        return Err(HeatmapError::Numerical {
            operation: operation.to_string(),
            reason: "surface contains non-finite cells".to_string(),
        });
    }

    let call = Array2::from_shape_vec((rows, cols), call_flat).map_err(|e| {
        HeatmapError::Numerical {
            operation: operation.to_string(),
            reason: e.to_string(),
        }
    })?;
    let put = Array2::from_shape_vec((rows, cols), put_flat).map_err(|e| {
        HeatmapError::Numerical {
            operation: operation.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(SurfacePair { call, put })
}

/// Theoretical call and put value surfaces
pub fn price_surfaces(cfg: &HeatmapConfig, grid: &Grid) -> HeatmapResult<SurfacePair> {
    cfg.validate()?;
    eval_surfaces(
        cfg,
        grid,
        "price",
        analytics::call_price,
        analytics::put_price,
    )
}

/// Surfaces for one Greek
pub fn greek_surfaces(greek: Greek, cfg: &HeatmapConfig, grid: &Grid) -> HeatmapResult<SurfacePair> {
    cfg.validate()?;
    let (call_fn, put_fn) = greek.formulas();
    eval_surfaces(cfg, grid, greek.name(), call_fn, put_fn)
}

/// Surfaces for every Greek named in `set`, in [`Greek::ALL`] order
pub fn greek_surfaces_batch(
    set: GreekSet,
    cfg: &HeatmapConfig,
    grid: &Grid,
) -> HeatmapResult<Vec<(Greek, SurfacePair)>> {
    let mut out = Vec::new();
    for greek in Greek::ALL {
        if set.contains(GreekSet::from(greek)) {
            out.push((greek, greek_surfaces(greek, cfg, grid)?));
        }
    }
    Ok(out)
}

/// Transform a value surface into profit/loss against a premium paid
///
/// Dollars: `cell - amount_paid`. Percent: `(cell - amount_paid) /
/// amount_paid * 100`, where a zero premium is a domain error. Cells are
/// rounded to 3 decimals.
pub fn pnl_surface(
    values: &Array2<f64>,
    amount_paid: f64,
    mode: PnlMode,
) -> HeatmapResult<Array2<f64>> {
    validate_finite("amount_paid", amount_paid)?;
    match mode {
        PnlMode::Dollars => Ok(values.mapv(|v| round3(v - amount_paid))),
        PnlMode::Percent => {
            if amount_paid == 0.0 {
                return Err(HeatmapError::Domain {
                    parameter: "amount_paid".to_string(),
                    value: amount_paid,
                    constraint: "must be non-zero for percent P/L".to_string(),
                });
            }
            Ok(values.mapv(|v| round3((v - amount_paid) / amount_paid * 100.0)))
        }
    }
}

/// Evaluate one full heatmap request: validate, build the grid, route the
/// selection, and attach axis labels for rendering
pub fn compute(cfg: &HeatmapConfig, selection: Selection) -> HeatmapResult<Heatmap> {
    let grid = cfg.grid()?;

    let SurfacePair { call, put } = match selection {
        Selection::Value => price_surfaces(cfg, &grid)?,
        Selection::Greek(greek) => greek_surfaces(greek, cfg, &grid)?,
        Selection::Pnl { mode, amount_paid } => {
            let values = price_surfaces(cfg, &grid)?;
            SurfacePair {
                call: pnl_surface(&values.call, amount_paid, mode)?,
                put: pnl_surface(&values.put, amount_paid, mode)?,
            }
        }
    };

    Ok(Heatmap {
        call,
        put,
        spot_labels: grid.spot_labels(),
        expiry_days: grid.expiry_days,
    })
}
