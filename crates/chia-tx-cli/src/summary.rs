use chia_tx::driver::BundleSummary;

/// A human readable description of what a bundle does.
pub fn format_summary(summary: &BundleSummary) -> String {
    let mut lines = Vec::new();

    for spend in &summary.spends {
        let amount = spend.coin.amount;
        lines.push(format!("spend {} ({amount} mojos)", spend.coin_id));

        if !spend.puzzle_hash_matches {
            lines.push(format!(
                "  puzzle hash mismatch: coin has {}, puzzle hashes to {}",
                spend.coin.puzzle_hash, spend.puzzle_hash
            ));
        }

        for condition in &spend.conditions {
            lines.push(format!("  {condition:?}"));
        }

        if spend.other_conditions > 0 {
            lines.push(format!("  and {} other conditions", spend.other_conditions));
        }
    }

    for coin in &summary.additions {
        lines.push(format!(
            "addition {} ({} mojos to {})",
            coin.coin_id(),
            coin.amount,
            coin.puzzle_hash
        ));
    }

    lines.push(format!("removed {} mojos", summary.removed_value));
    lines.push(format!("added {} mojos", summary.added_value));

    lines.push(match summary.implied_fee() {
        Some(fee) => format!("fee {fee} mojos (declared {})", summary.declared_fee),
        None => "creates more value than it spends".to_string(),
    });

    lines.join("\n")
}
