use once_cell::sync::OnceCell;
use radix_core::constants::RADIX_SERVER_PREFIX_PATH;

static RADIX_CLI_CONFIG: OnceCell<RadixCliConfig> = OnceCell::new();

pub(crate) fn radix_cli_config() -> &'static RadixCliConfig {
    RADIX_CLI_CONFIG
        .get()
        .expect("pls init radix cli config first")
}

pub(crate) fn init_radix_cli_config(config: RadixCliConfig) {
    RADIX_CLI_CONFIG
        .set(config)
        .expect("config can only be set once");
}

#[derive(Debug)]
pub struct RadixCliConfig {
    /// address of a running radixd, conversions run locally when unset
    pub host: Option<String>,
}

impl RadixCliConfig {
    pub fn http_server_host(&self) -> Option<String> {
        self.host
            .as_ref()
            .map(|host| format!("http://{}{}", host, RADIX_SERVER_PREFIX_PATH))
    }
}
