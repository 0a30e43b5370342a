//! # bs-heatmap: Black-Scholes Surfaces for Heatmap Visualization
//!
//! A Rust library that computes theoretical European option prices and
//! Greeks under the Black-Scholes model across a two-dimensional grid of
//! underlying spot prices and days-to-expiry, ready to render as a
//! heatmap.
//!
//! ## Key Features
//!
//! - **Grid construction**: spot axis (up to 19 prices around the current
//!   spot) and expiry axis (up to 7 day-counts) derived deterministically
//!   from the market parameters
//! - **Closed-form pricing**: call/put values plus Delta, Gamma, Vega,
//!   Theta, and Rho over every grid cell
//! - **P/L transforms**: dollar and percent profit/loss against a premium
//!   paid
//! - **Typed errors**: out-of-domain inputs fail fast instead of leaking
//!   NaN into the output
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_heatmap::engine::{compute, HeatmapConfig, Selection};
//!
//! let config = HeatmapConfig {
//!     spot: 100.0,            // Current underlying price
//!     strike: 100.0,          // Strike price
//!     days_to_expiry: 30,     // Calendar days until expiry
//!     rate: 0.05,             // Annualized risk-free rate
//!     volatility: 0.5,        // Annualized volatility, 0.5 = 50%
//!     range_pct: 20,          // Spot window half-width in percent
//! };
//!
//! let heatmap = compute(&config, Selection::Value).expect("valid parameters");
//! assert_eq!(heatmap.call.dim(), (heatmap.spot_labels.len(), heatmap.expiry_days.len()));
//! ```
//!
//! ## Conventions
//!
//! - `volatility` and `rate` are annualized fractions (0.5 = 50%).
//! - Day-counts convert to year fractions with a 365-day year.
//! - Matrix cells are rounded to 3 decimals, spot labels to 2 decimals.
//! - Matrices are indexed `[spot][expiry]`, both axes ascending.

// Module declarations
pub mod analytics;
pub mod engine;
pub mod error;
pub mod grid;
pub mod math_utils;
pub mod output;

// Re-export commonly used types for convenience
pub use engine::{compute, Greek, Heatmap, HeatmapConfig, PnlMode, Selection};
pub use error::{HeatmapError, HeatmapResult};
pub use grid::Grid;
