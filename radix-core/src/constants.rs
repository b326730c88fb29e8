pub const RADIX_SERVER_PREFIX_PATH: &'static str = "/radix.server";

pub const RADIX_API_DEFAULT_PORT: u16 = 6746;
