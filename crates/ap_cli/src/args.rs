// crates/ap_cli/src/args.rs
//
// Deterministic, offline CLI argument surface.
//
// Rules:
// - --votes and --regions are required local JSON tables.
// - --method must be one of the registry names (validated by the engine, the
//   single validation point for formula names).
// - Seat source is either explicit `seats` in the regions file, or
//   --total-seats which triggers region seat pre-distribution with
//   --region-method / --min-seats.

use std::path::PathBuf;

use clap::Parser;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "apportion",
    disable_help_subcommand = true,
    about = "Offline, deterministic seat apportionment over vote tables"
)]
pub struct Args {
    /// Votes table JSON path ([{party, region, votes}]).
    #[arg(long)]
    pub votes: PathBuf,

    /// Regions table JSON path ([{region_id, type, size, seats?}]).
    #[arg(long)]
    pub regions: PathBuf,

    /// Apportionment formula: dhondt, sainte_lague, sainte_lague_modificado,
    /// hare, droop, hagenbach, imperiali.
    #[arg(long)]
    pub method: String,

    /// Electoral barrier as a fraction in [0, 1).
    #[arg(long, default_value_t = 0.0)]
    pub barrier: f64,

    /// National seat total; when present, region seat pre-distribution runs
    /// first and any `seats` column in the regions file is ignored.
    #[arg(long)]
    pub total_seats: Option<u32>,

    /// Minimum seats per ordinary region (pre-distribution floor).
    #[arg(long, default_value_t = 2)]
    pub min_seats: u32,

    /// Region pre-distribution method: loreg, dhondt, hare.
    #[arg(long, default_value = "loreg")]
    pub region_method: String,

    /// Write the national seat table to this file (stdout is always printed).
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Write the per-region seat table to this file (pre-distribution mode).
    #[arg(long)]
    pub regions_out: Option<PathBuf>,

    /// Also compute and print the proportionality score.
    #[arg(long)]
    pub score: bool,
}
