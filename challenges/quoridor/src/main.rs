use std::io::Write;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;

use quoridor::report::{write_row_table, write_summary};
use quoridor::row::enumerate_rows;
use quoridor::{BoardConfig, ReportFormat, Solver, Summary, Writer};

#[derive(Parser)]
#[command(name = "quoridor")]
#[command(about = "Count Quoridor fence placements exactly", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Board {
    /// Fence intersections per row
    #[arg(short, long, default_value_t = 8)]
    columns: u32,
    /// Rows of fence intersections
    #[arg(short, long, default_value_t = 8)]
    rows: u32,
    /// Most fences placed on the board
    #[arg(short = 'f', long, default_value_t = 20)]
    max_fences: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Number of placements for every fence count up to the maximum
    Count {
        #[command(flatten)]
        board: Board,
        #[arg(long, value_enum, default_value_t = ReportFormat::Spreadsheet)]
        format: ReportFormat,
        /// Worker threads, 0 for one per core
        #[arg(short = 'j', long, default_value_t = 1)]
        threads: usize,
    },
    /// Ways to fill a single row, by vertical signature and fence count
    RowTable {
        #[arg(short, long, default_value_t = 8)]
        columns: u32,
    },
}

fn main() -> Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut out = Writer::new();

    match cli.command {
        Commands::Count {
            board,
            format,
            threads,
        } => {
            let config = BoardConfig::new(board.columns, board.rows, board.max_fences)?;
            let solver = Solver::new(config).with_threads(threads);
            info!("counting {:?} on {} thread(s)", config, solver.threads());
            let table = solver.compute_final_table()?;
            write_summary(&config, &Summary::from_table(&table), format, &mut out);
        }
        Commands::RowTable { columns } => {
            // Only the column count matters for a single row.
            BoardConfig::new(columns, 1, 0)?;
            write_row_table(&enumerate_rows(columns), &mut out);
        }
    }

    std::io::stdout().write_all(out.into_string()?.as_bytes())?;
    Ok(())
}
