use clap::Args;
use radix_core::{
    api::{req::ConvertRequest, resp::ConvertResponse},
    client::get_client,
    convert::{convert, format_number, parse_number, Format},
};
use tabled::{settings::Style, Table, Tabled};

use crate::config::radix_cli_config;

#[derive(Debug, Args)]
#[command(author, version, about = "convert a value between formats, alias: cv", alias = "cv", long_about = None)]
pub struct ConvertArgs {
    /// the value to convert, written in the input format
    pub input: String,

    /// input format: text, binary, octal, decimal, hexadecimal, base64
    #[arg(short, long, default_value = "decimal")]
    pub from: String,

    /// output format: text, binary, octal, decimal, hexadecimal, base64
    #[arg(short, long, default_value = "base64")]
    pub to: String,

    /// convert through a running radixd, e.g. 127.0.0.1:6746
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Debug, Args)]
#[command(author, version, about = "show a value in every format", long_about = None)]
pub struct ShowArgs {
    /// the value to show, written in the input format
    pub input: String,

    /// input format: text, binary, octal, decimal, hexadecimal, base64
    #[arg(short, long, default_value = "decimal")]
    pub from: String,
}

fn parse_format(s: &str, direction: &str) -> anyhow::Result<Format> {
    Format::parse(s).ok_or_else(|| anyhow::anyhow!("unknown {} format: {}", direction, s))
}

pub(crate) async fn run_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let config = radix_cli_config();

    let result = if let Some(server) = config.http_server_host() {
        let req = ConvertRequest {
            input: args.input,
            input_type: args.from,
            output_type: args.to,
        };
        let resp = get_client()?
            .post(format!("{}/convert", server))
            .json(&req)
            .send()
            .await?
            .json::<ConvertResponse>()
            .await?;

        if let Some(error) = resp.error {
            return Err(anyhow::anyhow!("{}", error));
        }
        resp.result
            .ok_or_else(|| anyhow::anyhow!("server answered with neither result nor error"))?
    } else {
        let from = parse_format(&args.from, "input")?;
        let to = parse_format(&args.to, "output")?;
        convert(&args.input, from, to)?
    };

    println!("{}", result);
    Ok(())
}

#[derive(Tabled)]
struct FormatRow {
    format: &'static str,
    value: String,
}

pub(crate) async fn run_show(args: ShowArgs) -> anyhow::Result<()> {
    let from = parse_format(&args.from, "input")?;
    let n = parse_number(&args.input, from)?;

    // formats that cannot carry the value (base64 for negatives,
    // text past the scale table) are left out of the table
    let rows = Format::ALL
        .iter()
        .filter_map(|format| {
            format_number(&n, *format).ok().map(|value| FormatRow {
                format: format.as_str(),
                value,
            })
        })
        .collect::<Vec<_>>();

    let mut table = Table::new(rows);
    table.with(Style::blank());

    println!("{}", table);
    Ok(())
}
