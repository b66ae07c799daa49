use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use std::error::Error;
use subnets::config::Config;
use subnets::output::{csv_header, csv_row, format_verdict, Report};
use subnets::{includes_any, parse, summarize, Ip4, Ip6, Member, Net4, Net6, Value};

#[derive(Parser, Debug)]
#[command(author, version, about = "IPv4/IPv6 address and CIDR network tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse each argument as a network or an address and describe it.
    Parse {
        #[arg(required = true)]
        text: Vec<String>,
        /// Print JSON instead of CSV.
        #[arg(long)]
        json: bool,
    },
    /// Check whether VALUE is included in any MEMBER. Members that are not
    /// networks are regular expressions.
    Include {
        value: String,
        #[arg(required = true)]
        members: Vec<String>,
    },
    /// Smallest network covering every argument.
    Summarize {
        #[arg(required = true)]
        nets: Vec<String>,
    },
    /// Generate random addresses or networks.
    Random {
        #[arg(value_enum)]
        kind: RandomKind,
        #[arg(long, short, default_value_t = 1)]
        count: usize,
        /// Put a run of zero hextets in IPv6 output.
        #[arg(long)]
        zeros: bool,
        /// Overrides SUBNETS_SEED.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RandomKind {
    Ip4,
    Ip6,
    Net4,
    Net6,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env();
    config.init_logging()?;
    let cli = Cli::parse();
    log::info!("#Start main() {:?}", cli.command);

    match cli.command {
        Commands::Parse { text, json } => run_parse(&text, json),
        Commands::Include { value, members } => {
            let included = run_include(&value, &members)?;
            println!("{}", format_verdict(included));
            if !included {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Summarize { nets } => run_summarize(&nets),
        Commands::Random {
            kind,
            count,
            zeros,
            seed,
        } => {
            let mut rng = match seed.or(config.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            for _ in 0..count {
                println!("{}", random_value(&mut rng, kind, zeros));
            }
            Ok(())
        }
    }
}

fn run_parse(text: &[String], json: bool) -> Result<(), Box<dyn Error>> {
    let reports = text
        .iter()
        .map(|t| parse(t).map(|value| Report::new(t, value)))
        .collect::<Result<Vec<_>, _>>()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    println!("{}", csv_header());
    for (i, report) in reports.iter().enumerate() {
        println!("{}", csv_row(i + 1, report));
    }
    Ok(())
}

fn run_include(value: &str, members: &[String]) -> Result<bool, Box<dyn Error>> {
    let mut list = Vec::with_capacity(members.len());
    for m in members {
        let member = match parse(m) {
            Ok(v @ (Value::Net4(_) | Value::Net6(_))) => Member::from(v),
            _ => Member::from(Regex::new(m)?),
        };
        list.push(member);
    }
    log::debug!("members: {list:?}");
    Ok(includes_any(&list, value))
}

fn run_summarize(nets: &[String]) -> Result<(), Box<dyn Error>> {
    let values = nets.iter().map(parse).collect::<Result<Vec<_>, _>>()?;
    let summary = summarize(&values)?;
    println!("{}", summary.to_string().bold());
    log::info!(
        "summarized {} into {summary}",
        values.iter().map(Value::to_string).join(", ")
    );
    Ok(())
}

fn random_value(rng: &mut StdRng, kind: RandomKind, zeros: bool) -> Value {
    match kind {
        RandomKind::Ip4 => Ip4::random(rng).into(),
        RandomKind::Ip6 => Ip6::random(rng, zeros).into(),
        RandomKind::Net4 => Net4::random(rng).into(),
        RandomKind::Net6 => Net6::random(rng, zeros).into(),
    }
}
