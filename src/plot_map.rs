use plotters::prelude::*;

use crate::expand::FullMap;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlotError {
    #[error("nothing to plot")]
    EmptyMaps,

    #[error("image dimensions overflow")]
    DimensionOverflow,

    #[error("render failed: {0}")]
    Backend(String),
}

/// Fixed per-type color table; the neutral value renders light gray so
/// partially filled quadrants stay visible.
fn cell_color(value: i32) -> RGBColor {
    match value {
        0 => RGBColor(235, 235, 235),
        1 => RGBColor(66, 133, 244),
        2 => RGBColor(52, 168, 83),
        3 => RGBColor(244, 180, 0),
        4 => RGBColor(234, 67, 53),
        5 => RGBColor(171, 71, 188),
        _ => RGBColor(96, 96, 96),
    }
}

/// Render the 1/8 map and the full map side by side as filled cell squares.
///
/// Ragged eighth rows are padded to rectangular with neutral cells. Returns
/// the RGBA pixel buffer plus its dimensions so the caller can hand it to an
/// image encoder.
pub fn render_maps_rgba(
    eighth: &[Vec<i32>],
    full: &FullMap,
    cell_px: u32,
) -> Result<(Vec<u8>, u32, u32), PlotError> {
    if eighth.is_empty() || full.size() == 0 {
        return Err(PlotError::EmptyMaps);
    }

    let cell = cell_px.max(1) as usize;
    let eighth_w = eighth.iter().map(|r| r.len()).max().unwrap_or(0);
    let eighth_h = eighth.len();
    let full_s = full.size();

    // One cell of margin all around, two cells of gutter between the panels.
    let width = (1 + eighth_w + 2 + full_s + 1) * cell;
    let height = (1 + eighth_h.max(full_s) + 1) * cell;
    let (width, height) = (width as u32, height as u32);

    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(PlotError::DimensionOverflow)?;

    // Cell squares in pixel coordinates, inset by one pixel so the white
    // background reads as grid lines.
    let cell_rect = |col_cells: usize, row_cells: usize, value: i32| {
        let x0 = (col_cells * cell) as i32;
        let y0 = (row_cells * cell) as i32;
        let x1 = (col_cells * cell + cell) as i32 - 1;
        let y1 = (row_cells * cell + cell) as i32 - 1;
        Rectangle::new([(x0 + 1, y0 + 1), (x1, y1)], cell_color(value).filled())
    };

    let mut squares = Vec::with_capacity(eighth_h * eighth_w + full_s * full_s);

    // Left panel: the eighth map, neutral-padded to rectangular.
    for (ri, row) in eighth.iter().enumerate() {
        for ci in 0..eighth_w {
            let v = row.get(ci).copied().unwrap_or(0);
            squares.push(cell_rect(1 + ci, 1 + ri, v));
        }
    }

    // Right panel: the full map.
    let full_col0 = 1 + eighth_w + 2;
    for (ri, row) in full.rows().iter().enumerate() {
        for (ci, &v) in row.iter().enumerate() {
            squares.push(cell_rect(full_col0 + ci, 1 + ri, v));
        }
    }

    let mut rgb = vec![255u8; pixel_count * 3];

    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| PlotError::Backend(e.to_string()))?;
        for square in squares {
            root.draw(&square)
                .map_err(|e| PlotError::Backend(e.to_string()))?;
        }
        root.present().map_err(|e| PlotError::Backend(e.to_string()))?;
    }

    let mut rgba = vec![255u8; pixel_count * 4];
    for i in 0..pixel_count {
        rgba[i * 4] = rgb[i * 3];
        rgba[i * 4 + 1] = rgb[i * 3 + 1];
        rgba[i * 4 + 2] = rgb[i * 3 + 2];
        rgba[i * 4 + 3] = 255;
    }

    Ok((rgba, width, height))
}
