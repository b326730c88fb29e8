pub mod api;
pub mod b64;
pub mod client;
pub mod constants;
pub mod convert;
pub mod error;
pub mod http;
pub mod radix;
pub mod words;
