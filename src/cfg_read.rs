use crate::expand::EighthMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CfgError {
    #[error("no CFG header line in document")]
    MissingHeader,

    #[error("CFG header carries no center pin value")]
    MissingCenterPin,

    #[error("bad center pin value: {0}")]
    BadCenterPin(String),

    #[error("CFG block is not terminated by a '%' line")]
    MissingTerminator,

    #[error("bad cell value {value:?} in CFG row {row}")]
    BadCell { row: usize, value: String },
}

/// Extract the center pin and the 1/8 core map from a KARMA document.
///
/// The block starts at the first line whose trimmed form begins with `CFG`;
/// the integer next to the keyword is the center pin. Every following
/// non-blank line is a whitespace-separated row of cell ids until a line
/// starting with `%` closes the block. Content outside the block is ignored
/// here and preserved by the splicing side.
pub fn read_cfg(text: &str) -> Result<(i32, EighthMap), CfgError> {
    let mut center_pin: Option<i32> = None;
    let mut eighth: EighthMap = Vec::new();
    let mut in_cfg = false;
    let mut terminated = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if !in_cfg {
            if trimmed.starts_with("CFG") {
                let pin = trimmed
                    .split_whitespace()
                    .nth(1)
                    .ok_or(CfgError::MissingCenterPin)?;
                let pin = pin
                    .parse::<i32>()
                    .map_err(|_| CfgError::BadCenterPin(pin.to_string()))?;
                center_pin = Some(pin);
                in_cfg = true;
            }
            continue;
        }

        if trimmed.starts_with('%') {
            terminated = true;
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let row_idx = eighth.len();
        let row = trimmed
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| CfgError::BadCell {
                    row: row_idx,
                    value: tok.to_string(),
                })
            })
            .collect::<Result<Vec<i32>, CfgError>>()?;
        eighth.push(row);
    }

    let center_pin = center_pin.ok_or(CfgError::MissingHeader)?;
    if !terminated {
        return Err(CfgError::MissingTerminator);
    }

    Ok((center_pin, eighth))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
TITLE demo core
   CFG  7
     1 4
     5
% end of cfg
TAIL unchanged
";

    #[test]
    fn reads_center_pin_and_rows() {
        let (pin, eighth) = read_cfg(SAMPLE).expect("read_cfg");
        assert_eq!(pin, 7);
        assert_eq!(eighth, vec![vec![1, 4], vec![5]]);
    }

    #[test]
    fn header_without_pin_fails() {
        let err = read_cfg("   CFG\n 1 2\n%\n").unwrap_err();
        assert_eq!(err, CfgError::MissingCenterPin);
    }

    #[test]
    fn missing_header_fails() {
        let err = read_cfg("TITLE only\n 1 2\n%\n").unwrap_err();
        assert_eq!(err, CfgError::MissingHeader);
    }

    #[test]
    fn missing_terminator_fails() {
        let err = read_cfg("   CFG  7\n 1 2\n 3\n").unwrap_err();
        assert_eq!(err, CfgError::MissingTerminator);
    }

    #[test]
    fn non_integer_cell_fails() {
        let err = read_cfg("   CFG  7\n 1 x\n%\n").unwrap_err();
        assert_eq!(
            err,
            CfgError::BadCell {
                row: 0,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn blank_lines_inside_block_are_skipped() {
        let (_, eighth) = read_cfg("   CFG  7\n 1 2\n\n 3\n%\n").expect("read_cfg");
        assert_eq!(eighth, vec![vec![1, 2], vec![3]]);
    }
}
