use buoy_tracker::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    if let Err(error) = runtime.block_on(commands::run(command)) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Buoy Tracker - Drifting Buoy Position and Time-Series Server");
    println!("============================================================");
    println!();
    println!("Parse drifting-buoy position exports (CSV) and serve positions and");
    println!("the pressure/temperature/submergence series as JSON over HTTP.");
    println!();
    println!("USAGE:");
    println!("    buoy-tracker <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Serve the JSON API (and optionally a static frontend)");
    println!("    inspect     Parse a source and report row, series and day statistics");
    println!("    series      Print the environmental time series as JSON");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Serve positions.csv on the default address:");
    println!("    buoy-tracker serve --source positions.csv");
    println!();
    println!("    # Serve a built frontend next to the API:");
    println!("    buoy-tracker serve --source positions.csv --static-dir frontend/dist");
    println!();
    println!("    # Check how many rows survive parsing:");
    println!("    buoy-tracker inspect --source positions.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    buoy-tracker <COMMAND> --help");
}
