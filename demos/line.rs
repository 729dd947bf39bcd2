extern crate bresenham_grid;
extern crate failure;
extern crate image;

use bresenham_grid::{draw, draw_path, Grid, LineSegment, Point};
use failure::Error;
use image::{ImageBuffer, Rgba, RgbaImage};

const WIDTH: usize = 24;
const HEIGHT: usize = 16;

fn black() -> Rgba<u8> {
    Rgba([0, 0, 0, 255])
}

fn red() -> Rgba<u8> {
    Rgba([255, 0, 0, 255])
}

fn to_image(grid: &Grid<u8>) -> RgbaImage {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let mut image = ImageBuffer::from_pixel(width, height, black());
    for point in grid.marked() {
        image.put_pixel(point.x as u32, point.y as u32, red());
    }
    image
}

fn main() -> Result<(), Error> {
    let mut grid: Grid<u8> = Grid::new(WIDTH, HEIGHT);

    draw(&LineSegment::from_coords(4, 2, 20, 14), &mut grid)?;
    draw(&LineSegment::from_coords(20, 14, 2, 11), &mut grid)?;
    draw(&LineSegment::from_coords(2, 11, 4, 2), &mut grid)?;

    let zigzag = [
        Point::new(10, 1),
        Point::new(13, 7),
        Point::new(16, 1),
        Point::new(23, 4),
    ];
    draw_path(&zigzag, &mut grid)?;

    print!("{}", grid);
    to_image(&grid).save("./line.png")?;

    Ok(())
}
