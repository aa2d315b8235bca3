use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use tracing_subscriber::EnvFilter;

use leetcode::dynamic_programming;
use leetcode::testing;

#[derive(Parser)]
#[command(name = "leetcode")]
#[command(about = "LeetCode and SPOJ Problem Solutions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dynamic Programming Problems
    DynamicProgramming {
        /// Problem name to run
        problem: String,

        /// Run the stored test cases under data/ instead of reading stdin
        #[arg(long)]
        check: bool,
    },
    /// List the available problems
    List,
}

fn main() -> ExitCode {
    // install global collector configured based on RUST_LOG env var.
    // Answers go to stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DynamicProgramming { problem, check } => {
            let tasks = dynamic_programming::tasks();
            let solve = match tasks.get(&problem) {
                Ok(solve) => solve,
                Err(err) => {
                    error!("{}", err);
                    return ExitCode::FAILURE;
                }
            };

            if check {
                let failed = testing::run_all_tests(tasks.category(), &problem, solve);
                return if failed > 0 {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                };
            }

            if let Err(err) = tasks.run(&problem) {
                error!("{}/{} failed: {}", tasks.category(), problem, err);
                return ExitCode::FAILURE;
            }
        }
        Commands::List => {
            let tasks = dynamic_programming::tasks();
            for name in tasks.names() {
                println!("{}/{}", tasks.category(), name);
            }
        }
    }

    ExitCode::SUCCESS
}
