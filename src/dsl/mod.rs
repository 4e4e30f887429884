//! VPAL notation — sound table, token resolution and the line parser.
//!
//! Text → tokens → [`Hit`]s → [`Beat`]s → [`Score`].

pub mod ast;
pub mod error;
pub mod hit;
pub mod parser;
pub mod sound;

pub use ast::{Beat, Score};
pub use error::ParseError;
pub use hit::{resolve_token, Hit, Volume};
pub use parser::parse;
pub use sound::{resolve_name, SoundId, REST_TOKEN};
