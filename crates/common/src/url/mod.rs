//! URL helpers
//!
//! - **[`parse`]**: lenient parse/stringify for absolute, relative and
//!   protocol-relative URLs
//! - **[`query`]**: form-urlencoded query strings

pub mod parse;
pub mod query;

pub use parse::{
    decode, has_protocol, has_protocol_with, parse_path, parse_url, stringify_parsed_url,
    ParsedUrl, ProtocolOptions,
};
pub use query::{append_query, build_query, strip_query, to_query, QueryMap};
