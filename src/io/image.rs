//! PNG preview of a composed grid

use crate::io::configuration::MAX_PREVIEW_SCALE;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Cell, Grid, TileType};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const fn ground_color(tile_type: TileType) -> [u8; 4] {
    match tile_type {
        TileType::Grass => [106, 168, 79, 255],
        TileType::Sidewalk => [190, 190, 184, 255],
        TileType::Road => [64, 64, 70, 255],
        TileType::Pavement => [214, 200, 168, 255],
        TileType::Snow => [240, 244, 250, 255],
        TileType::Building => [150, 96, 72, 255],
    }
}

// Props are coloured by family, keyed on the identifier prefix
fn prop_color(prop_id: &str) -> [u8; 4] {
    if prop_id.starts_with("tree") {
        [34, 110, 46, 255]
    } else if prop_id.starts_with("bench") {
        [120, 82, 44, 255]
    } else if prop_id.starts_with("flower") {
        [222, 92, 150, 255]
    } else {
        [230, 200, 60, 255]
    }
}

/// Colour a single cell is drawn with
///
/// Overlaid props take their family colour, building origins are darkened so individual
/// footprints stay distinguishable, everything else shows its ground.
pub fn cell_color(cell: &Cell) -> [u8; 4] {
    match (&cell.structure_id, cell.tile_type) {
        (Some(id), _) if cell.has_prop() => prop_color(id),
        (Some(_), TileType::Building) if cell.is_origin => {
            let [r, g, b, a] = ground_color(TileType::Building);
            [r / 2, g / 2, b / 2, a]
        }
        _ => ground_color(cell.tile_type),
    }
}

/// Render the grid with each cell as a `scale × scale` block
///
/// # Errors
///
/// Returns an error if `scale` is zero or exceeds [`MAX_PREVIEW_SCALE`]
pub fn render_preview(grid: &Grid, scale: u32) -> Result<RgbaImage> {
    if scale == 0 || scale > MAX_PREVIEW_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_PREVIEW_SCALE}"),
        ));
    }

    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;
    let mut img = ImageBuffer::new(width, height);

    for cell in grid.cells() {
        let color = Rgba(cell_color(cell));
        let left = cell.x as u32 * scale;
        let top = cell.y as u32 * scale;
        for py in top..top + scale {
            for px in left..left + scale {
                img.put_pixel(px, py, color);
            }
        }
    }

    Ok(img)
}

/// Render the grid and save it as a PNG at `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is out of range
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview_png(grid: &Grid, output_path: &Path, scale: u32) -> Result<()> {
    let img = render_preview(grid, scale)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
