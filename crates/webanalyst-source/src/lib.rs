//! Page retrieval and HTML extraction

mod extract;
mod file;
mod http;

pub use extract::HtmlExtractor;
pub use file::FileSource;
pub use http::HttpSource;
