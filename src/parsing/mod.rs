//! Building blocks of the chat log parser.
//!
//! - [`tokenizer`] - finds timestamp tokens and pairs them with their segment
//! - [`timestamp`] - strict date parsing of a token
//! - [`sender`] - splits a segment into sender and body
//!
//! [`ChatLogParser`](crate::parser::ChatLogParser) glues these together;
//! they are public for callers that need the intermediate steps.

pub mod sender;
pub mod timestamp;
pub mod tokenizer;

pub use sender::split_sender;
pub use timestamp::parse_timestamp;
pub use tokenizer::{TIMESTAMP_PATTERN, Token, Tokens, count_timestamps, tokenize, tokens};
