pub mod embedded;
pub mod http;

pub use embedded::{EmbeddedLoader, builtin_views};
pub use http::HttpLoader;
