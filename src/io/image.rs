//! PNG export of tiled boards with one colour per tromino

use crate::io::configuration::{DAMAGED_COLOR, TILE_SATURATION, TILE_VALUE};
use crate::io::error::{Result, TilingError, inconsistent, invalid_argument};
use crate::spatial::board::{Board, Cell, TileId};
use image::{ImageBuffer, Rgba};
use std::path::Path;

// Golden-ratio hue stepping keeps neighbouring ids visually distinct
const HUE_STEP: f64 = 0.618_033_988_749_895;

/// Deterministic RGBA colour for a tile id
pub fn tile_color(id: TileId) -> [u8; 4] {
    let hue = (f64::from(id) * HUE_STEP).fract() * 6.0;
    let chroma = TILE_VALUE * TILE_SATURATION;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let m = TILE_VALUE - chroma;

    let (r, g, b) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round() as u8;
    [channel(r), channel(g), channel(b), 255]
}

/// Export a tiled board as a PNG image
///
/// Each cell becomes a `cell_pixels` square: trominoes in their
/// [`tile_color`], the damaged cell in [`DAMAGED_COLOR`].
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero or the image side would overflow `u32`
/// - some cell is still empty
/// - the parent directory cannot be created
/// - the image cannot be saved to `output_path`
pub fn export_board_as_png(board: &Board, cell_pixels: u32, output_path: &Path) -> Result<()> {
    if cell_pixels == 0 {
        return Err(invalid_argument(
            "cell_pixels",
            &cell_pixels,
            &"cells must be at least one pixel wide",
        ));
    }

    let side = u32::try_from(board.size())
        .ok()
        .and_then(|size| size.checked_mul(cell_pixels))
        .ok_or_else(|| {
            invalid_argument(
                "cell_pixels",
                &cell_pixels,
                &"image side exceeds the supported size",
            )
        })?;

    let mut img = ImageBuffer::new(side, side);

    for (pos, cell) in board.positions() {
        let rgba = match cell {
            Cell::Tile(id) => tile_color(id),
            Cell::Damaged => DAMAGED_COLOR,
            Cell::Empty => return Err(inconsistent(Some(pos), &"cannot export an empty cell")),
        };

        let x0 = pos.col as u32 * cell_pixels;
        let y0 = pos.row as u32 * cell_pixels;
        for dy in 0..cell_pixels {
            for dx in 0..cell_pixels {
                img.put_pixel(x0 + dx, y0 + dy, Rgba(rgba));
            }
        }
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::debug!("exported {side}x{side} board image to {}", output_path.display());
    Ok(())
}
