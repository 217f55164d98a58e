use snake_engine::{Cell, Grid};

/// Maps logical board coordinates onto the actual screen surface. The window
/// is opened at the board's native 600x400, so the scale is normally 1.0 on
/// both axes.
pub struct BoardLayout {
    pub scale_x: f32,
    pub scale_y: f32,
    pub cell_w: f32,
    pub cell_h: f32,
}

impl BoardLayout {
    pub fn compute(screen_w: f32, screen_h: f32, grid: &Grid) -> Self {
        let scale_x = screen_w / grid.width as f32;
        let scale_y = screen_h / grid.height as f32;
        Self {
            scale_x,
            scale_y,
            cell_w: grid.segment as f32 * scale_x,
            cell_h: grid.segment as f32 * scale_y,
        }
    }

    pub fn cell_rect(&self, cell: Cell) -> (f32, f32, f32, f32) {
        let px = cell.x as f32 * self.scale_x;
        let py = cell.y as f32 * self.scale_y;
        (px, py, self.cell_w, self.cell_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_window_maps_one_to_one() {
        let grid = Grid::board();
        let layout = BoardLayout::compute(600.0, 400.0, &grid);
        let (px, py, w, h) = layout.cell_rect(Cell::new(300, 180));
        assert_eq!((px, py), (300.0, 180.0));
        assert_eq!((w, h), (20.0, 20.0));
    }
}
