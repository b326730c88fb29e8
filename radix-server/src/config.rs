use once_cell::sync::OnceCell;

#[derive(Debug)]
pub struct RadixServerConfig {
    pub api_port: u16,
}

static RADIX_CONFIG: OnceCell<RadixServerConfig> = OnceCell::new();

pub(crate) fn radix_server_config() -> &'static RadixServerConfig {
    RADIX_CONFIG
        .get()
        .expect("pls init radix server config first")
}

pub fn init_radix_server_config(config: RadixServerConfig) {
    RADIX_CONFIG
        .set(config)
        .expect("config can only be set once");
}
