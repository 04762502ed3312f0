mod cli;

use std::{
    fs::{read_to_string, File},
    io::{BufWriter, Write},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use simple_logger::SimpleLogger;
use spel2sim::{
    levelgen::{Run, Subtheme},
    parse_seed,
    search::{evaluate_range, find_fewest_co_rooms, room_count_histogram, RunResult},
};

fn main() -> Result<()> {
    let args = Cli::parse();
    match args.verbosity {
        0 => SimpleLogger::new().with_level(log::LevelFilter::Warn).init()?,
        1 => SimpleLogger::new().with_level(log::LevelFilter::Info).init()?,
        _ => SimpleLogger::new().with_level(log::LevelFilter::max()).init()?,
    }

    match args.subcommand {
        Commands::Analyze { seed, levels } => {
            let run = Run::simulate(seed);
            if levels {
                for record in &run.levels {
                    println!(
                        "{}-{:0>2}: {:>11} {}x{}{}",
                        record.world,
                        record.level,
                        record.subtheme,
                        record.width,
                        record.height,
                        if record.dark_level { " (dark)" } else { "" }
                    );
                }
                let frequencies = Subtheme::ALL
                    .iter()
                    .map(|&subtheme| {
                        let count =
                            run.levels.iter().filter(|r| r.subtheme == subtheme).count();
                        format!("{subtheme}: {count}")
                    })
                    .join(", ");
                println!("{frequencies}");
            }
            println!("{:08X} has {} CO rooms", run.seed, run.total_co_rooms);
        },
        Commands::Search { start_seed, num_seeds, output, below, above } => {
            let start_time = Instant::now();
            let progress_bar = ProgressBar::new(num_seeds as u64).with_style(
                ProgressStyle::default_bar()
                    .template("{bar:40} {pos}/{len} [{per_sec}, {elapsed_precise}]")?,
            );

            // Only retain the full result list when it's going to be
            // written out; the minimum scan alone doesn't need it.
            let best = if let Some(path) = &output {
                let results = evaluate_range(start_seed, num_seeds, Some(&progress_bar))?;
                progress_bar.finish_and_clear();

                let keep = |result: &&RunResult| match (below, above) {
                    (None, None) => true,
                    _ => {
                        below.map_or(false, |limit| result.total_co_rooms <= limit)
                            || above.map_or(false, |limit| result.total_co_rooms >= limit)
                    },
                };
                let mut file = BufWriter::new(File::create(path).with_context(|| {
                    format!("Couldn't create results file '{}'", path.display())
                })?);
                let mut num_written = 0;
                for result in results.iter().filter(keep) {
                    writeln!(file, "{:08X},{}", result.seed, result.total_co_rooms)?;
                    num_written += 1;
                }
                println!("Wrote {} results to \"{}\"", num_written, path.display());

                results
                    .into_iter()
                    .min_by_key(|result| (result.total_co_rooms, result.seed))
                    .context("Seed range is empty")?
            }
            else {
                let best = find_fewest_co_rooms(start_seed, num_seeds, Some(&progress_bar))?;
                progress_bar.finish_and_clear();
                best
            };

            println!(
                "Best result after searching seeds {:08X}-{:08X} ({} seeds):",
                start_seed,
                start_seed as u64 + num_seeds as u64 - 1,
                num_seeds
            );
            println!("{:08X}: {}", best.seed, best.total_co_rooms);
            println!("Searched in {}s.", start_time.elapsed().as_secs());
        },
        Commands::Hist { file } => {
            let contents = read_to_string(&file)
                .with_context(|| format!("Couldn't read results file '{}'", file.display()))?;
            let mut totals = Vec::new();
            for line in contents.lines().filter(|line| !line.trim().is_empty()) {
                let (seed, total) = line
                    .split_once(',')
                    .with_context(|| format!("Malformed results line '{line}'"))?;
                parse_seed(seed.trim())?;
                totals.push(
                    total.trim().parse::<u64>().with_context(|| {
                        format!("Malformed room total in line '{line}'")
                    })?,
                );
            }
            for (total, count) in room_count_histogram(totals) {
                println!("{total}: {count}");
            }
        },
    }

    Ok(())
}
