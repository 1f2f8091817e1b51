//! Basket Receipt Example
//!
//! Prices a fixture basket and prints an itemised receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-n` to limit the number of items
//! Use `-l` / `RUST_LOG` to see per-line pricing logs

use std::{io, io::Write, time::Instant};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::info;

use trolley::{
    fixtures::Fixture,
    receipt::Receipt,
    utils::{ExampleBasketArgs, init_tracing},
};

/// Basket Receipt Example
pub fn main() -> Result<()> {
    let args = ExampleBasketArgs::parse();

    init_tracing(&args.log_level, args.log_format)?;

    let fixture = Fixture::from_set(&args.fixture)?;
    let basket = fixture.basket(args.n)?;

    info!(fixture = %args.fixture, items = basket.len(), "pricing basket");

    let start = Instant::now();
    let total = basket.calculate_total()?;
    let elapsed = start.elapsed();

    info!(%total, "priced basket");

    let receipt = Receipt::from_basket(&basket)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    writeln!(
        handle,
        " {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
