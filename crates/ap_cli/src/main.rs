// crates/ap_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, and the run path
// (load → optional region pre-distribution → national apportionment →
// optional score → artifacts).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad arguments, unknown method names, malformed tables.
    pub const VALIDATION: i32 = 2;
    /// Filesystem / JSON read-write failures.
    pub const IO: i32 = 4;
    /// Computation rejected the configuration (barrier, seat budget, score).
    pub const COMPUTE: i32 = 5;
}

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;

use ap_algo::{distribute_region_seats, score_proportionality, RegionMethod, RegionSeatsError};
use ap_core::entities::Region;
use ap_io::writer::{NationalRow, RegionSeatRow};
use ap_io::{loader, writer, IoError};
use ap_pipeline::{apportion_nationally, NationalSeats, PipelineError};

use args::Args;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Io(String),
    Compute(String),
}

impl MainError {
    fn exit_code(&self) -> i32 {
        match self {
            MainError::Validation(_) => exitcodes::VALIDATION,
            MainError::Io(_) => exitcodes::IO,
            MainError::Compute(_) => exitcodes::COMPUTE,
        }
    }
}

impl From<IoError> for MainError {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Path(m) => MainError::Io(m),
            IoError::Json(m) | IoError::Invalid(m) => MainError::Validation(m),
        }
    }
}

impl From<PipelineError> for MainError {
    fn from(e: PipelineError) -> Self {
        match &e {
            PipelineError::UnknownMethod(_) => MainError::Validation(e.to_string()),
            PipelineError::Barrier { source, .. } => match source {
                ap_algo::BarrierError::InvalidThreshold { .. } => {
                    MainError::Validation(e.to_string())
                }
                ap_algo::BarrierError::NoPartyClearsBarrier { .. } => {
                    MainError::Compute(e.to_string())
                }
            },
            PipelineError::RegionSeats(_) | PipelineError::Score(_) => {
                MainError::Compute(e.to_string())
            }
        }
    }
}

impl From<RegionSeatsError> for MainError {
    fn from(e: RegionSeatsError) -> Self {
        match e {
            RegionSeatsError::UnknownMethod { .. } => MainError::Validation(e.to_string()),
            _ => MainError::Compute(e.to_string()),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run_once(&args) {
        Ok(()) => ExitCode::from(exitcodes::OK as u8),
        Err(e) => {
            let msg = match &e {
                MainError::Validation(m) | MainError::Io(m) | MainError::Compute(m) => m,
            };
            eprintln!("apportion: error: {msg}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let loaded = loader::load_regions(&args.regions)?;

    let regions: Vec<Region> = if let Some(total) = args.total_seats {
        let method = RegionMethod::from_str(&args.region_method)?;
        let distributed =
            distribute_region_seats(&loaded.regions, total, args.min_seats, method)?;
        if let Some(path) = &args.regions_out {
            let rows: Vec<RegionSeatRow> = distributed
                .iter()
                .map(|r| RegionSeatRow {
                    region_id: r.id.as_u32(),
                    seats: r.seats,
                })
                .collect();
            writer::write_region_seats(path, &rows)?;
        }
        distributed
    } else {
        if !loaded.seats_present {
            return Err(MainError::Validation(
                "regions table carries no `seats`; pass --total-seats to \
                 run region seat pre-distribution"
                    .to_string(),
            ));
        }
        loaded.regions
    };

    let votes = loader::load_votes(&args.votes, &regions)?;
    let result = apportion_nationally(&args.method, &votes, &regions, args.barrier)?;

    let rows = national_rows(&result);
    println!("{}", writer::national_seats_json(&rows)?);
    if let Some(path) = &args.out {
        writer::write_national_seats(path, &rows)?;
    }

    if args.score {
        let score = score_proportionality(&result.seats_by_party(), &result.votes_by_party())
            .map_err(|e| MainError::Compute(e.to_string()))?;
        println!("proportionality score: {score:.6}");
    }

    Ok(())
}

fn national_rows(result: &NationalSeats) -> Vec<NationalRow> {
    result
        .rows
        .iter()
        .map(|r| NationalRow {
            party: r.party.to_string(),
            votes: r.votes,
            seats: r.seats,
        })
        .collect()
}
