use clap::Parser;
use roster_ingest::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_report) => {
            // Success - the summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Roster Ingest - CSV to PostgreSQL Loader");
    println!("========================================");
    println!();
    println!("Stream roster CSV files of person records into PostgreSQL, with");
    println!("multi-line quoted fields, nested JSON expansion of dotted columns,");
    println!("and an age distribution report.");
    println!();
    println!("USAGE:");
    println!("    roster-ingest <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Ingest a roster CSV file into PostgreSQL");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ingest the default file (./data/users.csv or CSV_PATH):");
    println!("    roster-ingest process");
    println!();
    println!("    # Ingest a specific file with a custom batch size:");
    println!("    roster-ingest process people.csv --batch-size 500");
    println!();
    println!("    # Validate a file without touching the database:");
    println!("    roster-ingest process people.csv --dry-run");
    println!();
    println!("For detailed help on any command, use:");
    println!("    roster-ingest <COMMAND> --help");
}
