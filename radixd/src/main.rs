use clap::Parser;
use radix_core::constants::RADIX_API_DEFAULT_PORT;
use radix_server::config::{init_radix_server_config, RadixServerConfig};
use tokio_util::sync::CancellationToken;
use tracing::{error, level_filters::LevelFilter};

mod api;
mod config;

#[derive(Parser)]
#[command(name = "radixd")]
#[command(bin_name = "radixd")]
#[command(author, version, about = "run the radix convert server", long_about = None)]
struct RadixdArgs {
    #[arg(short, long, default_value_t = RADIX_API_DEFAULT_PORT)]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(LevelFilter::INFO)
        .with_thread_ids(true)
        .with_thread_names(true)
        .init();

    let args = RadixdArgs::parse();

    init_radix_server_config(RadixServerConfig {
        api_port: args.port,
    });
    config::init_radix_config(config::RadixConfig {
        api_port: args.port,
    });

    run_main()
}

#[tokio::main]
async fn run_main() -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    macro_rules! start_spawn {
        ($run: expr) => {
            let cancel_clone = cancel.clone();
            tokio::spawn(async move {
                let ccc = cancel_clone.clone();
                if let Err(e) = $run(cancel_clone).await {
                    error!("{} error: {}", stringify!($run), e);
                    ccc.cancel();
                }
            });
        };
    }

    start_spawn!(api::start);
    start_spawn!(radix_server::init);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                cancel.cancel();
                break;
            }
            _ = cancel.cancelled() => {
                break;
            }
        }
    }

    Ok(())
}
