use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use torn_api::{config, endpoints, Category, Client, Identifier, Params};

#[derive(Parser)]
#[clap(version = "0.1")]
struct Opts {
    #[clap(short, long, default_value = "config.toml")]
    config: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available operations
    List {
        /// Only show one category (user, faction, market, racing, forum, torn)
        category: Option<String>,
    },
    /// Call an operation and print the response
    Call {
        /// Operation name, e.g. faction_members
        operation: String,
        /// Identifier for the route; repeat for list identifiers
        #[clap(short, long)]
        id: Vec<u64>,
        #[clap(short, long)]
        selections: Option<String>,
    },
    /// Call a path that is not in the operation table, e.g. /user/bounties
    Raw {
        path: String,
        /// Extra query parameter as KEY=VALUE
        #[clap(short, long = "param")]
        params: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli_opts: Opts = Opts::parse();

    match cli_opts.command {
        Command::List { category } => list(category.as_deref()),
        Command::Call {
            operation,
            id,
            selections,
        } => {
            let client = client(&cli_opts.config)?;
            let endpoint = endpoints::find(&operation)
                .ok_or_else(|| anyhow!("unknown operation {:?}, see `torn list`", operation))?;

            let id = match id.as_slice() {
                [] => None,
                ids => Some(
                    ids.iter()
                        .map(|i| i.to_string())
                        .collect::<Vec<_>>()
                        .join(","),
                ),
            };
            if endpoint.identifier == Identifier::Required && id.is_none() {
                bail!("operation {} requires --id", endpoint.name);
            }
            if endpoint.identifier == Identifier::None && id.is_some() {
                log::warn!("operation {} takes no identifier, ignoring --id", endpoint.name);
            }

            let response = client.fetch(endpoint, id.as_deref(), selections.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Command::Raw { path, params } => {
            let client = client(&cli_opts.config)?;
            let params = parse_params(&params)?;

            let response = client.get(&path, Some(params))?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}

fn client(config_file: &str) -> Result<Client> {
    let conf = config::Config::from_file(config_file)
        .with_context(|| format!("loading config from {} and TORN_* env", config_file))?;
    log::debug!("{:?}", conf);

    Ok(Client::with_config(conf.into())?)
}

fn list(category: Option<&str>) -> Result<()> {
    let category = category
        .map(|c| Category::from_name(c).ok_or_else(|| anyhow!("unknown category {:?}", c)))
        .transpose()?;

    for endpoint in endpoints::ENDPOINTS
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
    {
        let selections = if endpoint.selections { "" } else { " (no selections)" };
        println!(
            "{:<32} {:<36} {}{}",
            endpoint.name,
            endpoint.template(),
            endpoint.summary.trim(),
            selections
        );
    }

    Ok(())
}

fn parse_params(raw: &[String]) -> Result<Params> {
    raw.iter()
        .map(|p| {
            p.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| anyhow!("parameter {:?} is not KEY=VALUE", p))
        })
        .collect()
}
