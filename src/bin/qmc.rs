use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use qmc_rs::reduce::{ReduceConfig, Reduction};

#[derive(Parser, Debug)]
#[command(author, version, about = "Quine-McCluskey boolean expression reducer")]
struct Cli {
    /// Expression to reduce, e.g. "AB+AB'+BC". Read from stdin if omitted.
    expression: Option<String>,

    /// Write '*' between factors of the result.
    #[arg(long)]
    explicit_and: bool,

    /// Also print the expanded sum of products.
    #[arg(long)]
    dnf: bool,

    /// Also print the prime implicants and their minterms.
    #[arg(long)]
    primes: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let expression = match cli.expression {
        Some(expression) => expression,
        None => read_expression()?,
    };

    let time_total = std::time::Instant::now();

    let config = ReduceConfig::new().with_explicit_and(cli.explicit_and);
    let reduction = match Reduction::with_config(expression.trim(), config) {
        Ok(reduction) => reduction,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.dnf {
        println!("Expanded expression:\n\t{}", reduction.expanded());
    }
    if cli.primes {
        println!("Prime implicants:");
        for prime in reduction.prime_implicants() {
            let marker = if reduction.is_essential(prime) { "*" } else { " " };
            println!("\t{} {} {:<12} {:?}", marker, prime.to_bit_string(), prime.to_string(), prime.minterms());
        }
    }
    println!("Reduced expression:\n\t{}", reduction);

    let time_total = time_total.elapsed();
    log::info!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}

fn read_expression() -> color_eyre::Result<String> {
    println!("Quine McCluskey's Algorithm\n");
    println!("Type input boolean expression:");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .wrap_err("failed to read expression from stdin")?;
    Ok(line)
}
