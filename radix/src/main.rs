use clap::Parser;

mod config;
mod convert;

#[derive(Parser)]
#[command(name = "radix")]
#[command(bin_name = "radix")]
enum RadixArgs {
    Convert(convert::ConvertArgs),
    Show(convert::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = RadixArgs::parse();

    let host = match &cli {
        RadixArgs::Convert(args) => args.host.clone(),
        RadixArgs::Show(_) => None,
    };
    config::init_radix_cli_config(config::RadixCliConfig { host });

    run_main(cli)
}

#[tokio::main]
async fn run_main(cli: RadixArgs) -> anyhow::Result<()> {
    match cli {
        RadixArgs::Convert(args) => convert::run_convert(args).await,
        RadixArgs::Show(args) => convert::run_show(args).await,
    }
}
