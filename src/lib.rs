pub mod archive;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod diary;
pub mod errors;
pub mod git;
