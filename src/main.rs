#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{init_logging, ui, Fleet, Session};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Naval battle on a 10x10 board", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Read commands from stdin: build a fleet, then fire salvos at it.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible random fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the final statistics as JSON")]
        json: bool,
    },
    /// Place a random standard fleet and show it.
    Demo {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        json: false,
    }) {
        Commands::Play { seed, json } => {
            if let Some(s) = seed {
                log::info!("using fixed seed {}", s);
            }
            let stdin = std::io::stdin();
            let session = Session::new(stdin.lock(), std::io::stdout(), make_rng(seed));
            let stats = session.run()?;
            if json {
                println!("{}", serde_json::to_string(&stats)?);
            }
        }
        Commands::Demo { seed } => {
            let mut rng = make_rng(seed);
            let fleet = Fleet::random(&mut rng)
                .ok_or_else(|| anyhow::anyhow!("could not place a random fleet"))?;
            print!("{}", ui::render_fleet(&fleet));
            print!("{}", ui::render_status(&fleet));
        }
    }
    Ok(())
}
