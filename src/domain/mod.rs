//! Domain entities shared across generators and collaborator contracts.

mod board;

pub use board::{ArticleSummary, Board};
