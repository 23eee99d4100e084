use crate::cfg_read::CfgError;
use crate::expand::FullMap;

/// Standalone dump of a full core map: title line, `=` frame lines, rows of
/// width-2 right-aligned cell ids.
pub fn format_full_cfg(full: &FullMap) -> String {
    let frame = "=".repeat(60);

    let mut out = String::new();
    out.push_str("Full Core Configuration\n");
    out.push_str(&frame);
    out.push('\n');
    for row in full.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:2}")).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out.push_str(&frame);
    out.push('\n');
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpliceState {
    Outside,
    InBlock,
}

/// Rewrite the CFG block of a KARMA document with a full core map.
///
/// The header is replaced by `   CFG  {size}` (the declared value becomes the
/// full dimension), the original eighth rows are dropped, and the full rows
/// are injected with a five-space indent right before the `%` terminator.
/// Every line outside the block passes through byte for byte.
pub fn splice_full_cfg(original: &str, full: &FullMap) -> Result<String, CfgError> {
    let mut out = String::with_capacity(original.len());
    let mut state = SpliceState::Outside;
    let mut seen_header = false;

    for line in original.split_inclusive('\n') {
        match state {
            SpliceState::Outside => {
                if line.trim().starts_with("CFG") {
                    out.push_str(&format!("   CFG  {}\n", full.size()));
                    seen_header = true;
                    state = SpliceState::InBlock;
                } else {
                    out.push_str(line);
                }
            }
            SpliceState::InBlock => {
                if line.trim().starts_with('%') {
                    for row in full.rows() {
                        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                        out.push_str("     ");
                        out.push_str(&cells.join(" "));
                        out.push('\n');
                    }
                    out.push_str(line);
                    state = SpliceState::Outside;
                }
                // original eighth rows are dropped
            }
        }
    }

    if !seen_header {
        return Err(CfgError::MissingHeader);
    }
    if state == SpliceState::InBlock {
        return Err(CfgError::MissingTerminator);
    }

    Ok(out)
}
