pub mod client;
pub mod error;
pub mod extract;
pub mod filter;
pub mod parse;

mod retry;

pub use client::MissionsClient;
pub use error::ScrapeError;
pub use extract::{extract_fragments, parse_missions};
pub use filter::is_skipped;
pub use parse::parse_fragment;
