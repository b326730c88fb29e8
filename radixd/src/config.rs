use once_cell::sync::OnceCell;

static RADIX_CONFIG: OnceCell<RadixConfig> = OnceCell::new();

#[derive(Debug)]
pub struct RadixConfig {
    pub api_port: u16,
}

pub(crate) fn radix_config() -> &'static RadixConfig {
    RADIX_CONFIG.get().expect("pls init radix config first")
}

pub(crate) fn init_radix_config(config: RadixConfig) {
    RADIX_CONFIG
        .set(config)
        .expect("config can only be set once");
}
