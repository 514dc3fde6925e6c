use clap::Args;
use std::path::PathBuf;

use receipt_points::error::AppError;
use receipt_points::receipts::{breakdown, Receipt};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON file (transport format: retailer,
    /// purchaseDate, purchaseTime, items, total)
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the per-rule contributions alongside the total
    #[arg(long)]
    pub(crate) breakdown: bool,
    /// Emit the result as JSON instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        receipt,
        breakdown: show_breakdown,
        json,
    } = args;

    let raw = std::fs::read_to_string(&receipt)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;
    let result = breakdown(&receipt);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(payload) => println!("{payload}"),
            Err(err) => return Err(err.into()),
        }
        return Ok(());
    }

    println!("Receipt for {}", receipt.retailer);
    if show_breakdown {
        for contribution in &result.contributions {
            println!("  - {}: {}", contribution.rule.label(), contribution.points);
        }
    }
    println!("Total points: {}", result.total);

    Ok(())
}
