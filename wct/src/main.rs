// src/main.rs

use anyhow::Result;
use clap::Parser;
use wct::{Args, run};

fn main() -> Result<()> {
    run(Args::parse())
}
