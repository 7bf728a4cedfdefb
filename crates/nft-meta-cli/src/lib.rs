//! Library components of the NFT metadata generator CLI.

pub mod logging;
pub mod pipeline;
