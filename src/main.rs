use anyhow::{Error, Result};
use clap::Parser;
use isd::cli::{command, init_tracing, Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = cli.archive_config();

    let result = match &cli.command {
        Commands::Stations { icao, year } => command::stations(&config, icao, *year)
            .await
            .map(|candidates| {
                if candidates.is_empty() {
                    println!("No station files for {} in {}", icao.to_uppercase(), year);
                } else {
                    println!("{}", command::stations::format_candidates(&candidates));
                }
            }),
        Commands::Records { icao, year, output } => {
            command::records(&config, icao, *year, output.clone())
                .await
                .map(|filename| println!("File saved to `{}`", filename))
        }
        Commands::Decode { file } => command::decode_file(file).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
