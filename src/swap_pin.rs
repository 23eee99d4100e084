use rand::Rng;

use crate::cfg_read::CfgError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    #[error(transparent)]
    Cfg(#[from] CfgError),

    #[error("no movable pin (4) in the CFG block")]
    MissingMovablePin,

    #[error("no target pins (1) in the CFG block")]
    NoTargetPins,
}

/// Result of one pin swap: the rewritten document plus where the movable pin
/// went. Positions are (row, col) into the CFG data rows, 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub text: String,
    pub from: (usize, usize),
    pub to: (usize, usize),
    pub target_count: usize,
}

/// Swap the movable `4` pin with a uniformly chosen `1` pin inside the CFG
/// block and reassemble the document.
///
/// The header line passes through unchanged; data rows are re-emitted with a
/// five-space indent and single-space separators. Everything outside the
/// block is preserved byte for byte. If the block holds several `4` cells the
/// last one scanned is the movable pin.
pub fn swap_random_pin<R: Rng + ?Sized>(
    original: &str,
    rng: &mut R,
) -> Result<SwapOutcome, SwapError> {
    let mut prefix = String::new();
    let mut suffix = String::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut in_cfg = false;
    let mut closed = false;

    for line in original.split_inclusive('\n') {
        if closed {
            suffix.push_str(line);
            continue;
        }
        if !in_cfg {
            prefix.push_str(line);
            if line.trim().starts_with("CFG") {
                in_cfg = true;
            }
            continue;
        }
        if line.trim().starts_with('%') {
            suffix.push_str(line);
            closed = true;
            continue;
        }
        if !line.trim().is_empty() {
            rows.push(line.split_whitespace().map(str::to_string).collect());
        }
    }

    if !in_cfg {
        return Err(CfgError::MissingHeader.into());
    }
    if !closed {
        return Err(CfgError::MissingTerminator.into());
    }

    let mut movable: Option<(usize, usize)> = None;
    let mut targets: Vec<(usize, usize)> = Vec::new();
    for (ri, row) in rows.iter().enumerate() {
        for (ci, cell) in row.iter().enumerate() {
            match cell.as_str() {
                "4" => movable = Some((ri, ci)),
                "1" => targets.push((ri, ci)),
                _ => {}
            }
        }
    }

    let from = movable.ok_or(SwapError::MissingMovablePin)?;
    if targets.is_empty() {
        return Err(SwapError::NoTargetPins);
    }
    let to = targets[rng.random_range(0..targets.len())];

    let target = rows[to.0][to.1].clone();
    let moved = std::mem::replace(&mut rows[from.0][from.1], target);
    rows[to.0][to.1] = moved;

    let mut text = prefix;
    for row in &rows {
        text.push_str("     ");
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    text.push_str(&suffix);

    Ok(SwapOutcome {
        text,
        from,
        to,
        target_count: targets.len(),
    })
}
