use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spel2sim::parse_seed;

#[derive(Parser, Debug)]
#[clap(name="spel2sim", author, version, about = "Spelunky 2 level gen simulator", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Commands,

    #[clap(
        global = true,
        default_value_t = 0,
        short = 'v',
        help = VERBOSE_HELP,
    )]
    pub verbosity: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Simulate one seed and report its Cosmic Ocean room count.
    #[clap(arg_required_else_help = true)]
    Analyze {
        #[clap(
            value_parser = |s: &str| parse_seed(s).map_err(|e| e.to_string()),
            help = SEED_HELP,
        )]
        seed: u32,

        #[clap(
            short = 'l',
            long = "levels",
            help = "Print every CO level's subtheme and dimensions"
        )]
        levels: bool,
    },

    /// Scan a contiguous seed range for the seed with the fewest CO rooms.
    #[clap(arg_required_else_help = true)]
    Search {
        #[clap(
            value_parser = |s: &str| parse_seed(s).map_err(|e| e.to_string()),
            help = "First seed of the range to scan.",
        )]
        start_seed: u32,

        #[clap(
            default_value_t = 65536,
            short = 'n',
            long = "num",
            help = "Number of seeds to scan, starting from START_SEED."
        )]
        num_seeds: u32,

        #[clap(
            short = 'o',
            long = "output",
            help = "Write per-seed results to this file as SEED,TOTAL lines."
        )]
        output: Option<PathBuf>,

        #[clap(
            long = "below",
            help = "Only write seeds whose total is at or below this many CO rooms."
        )]
        below: Option<u64>,

        #[clap(
            long = "above",
            help = "Only write seeds whose total is at or above this many CO rooms."
        )]
        above: Option<u64>,
    },

    /// Print a frequency table of room totals from a recorded results file.
    #[clap(arg_required_else_help = true)]
    Hist {
        #[clap(help = "CSV file of SEED,TOTAL lines, as written by 'search -o'.")]
        file: PathBuf,
    },
}

const SEED_HELP: &'static str = r##"
The seed to check. Must be an 8-digit hexadecimal number, optionally prefixed with "0x". Not case sensitive.
Examples: "0x1234ABCD", "baba2233".
"##;
const VERBOSE_HELP: &'static str = "Log level. 0 = warnings only, 1 = info, 2 = debug.";
