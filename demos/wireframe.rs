extern crate bresenham_grid;
extern crate failure;
extern crate image;
extern crate wavefront_obj;

use std::env;
use std::fs;

use bresenham_grid::{draw, Grid, LineSegment, Point};
use failure::{err_msg, Error};
use image::{imageops, ImageBuffer, Rgba};
use wavefront_obj::obj::{self, Object, Primitive, Vertex};

const WIDTH: i32 = 400;
const HEIGHT: i32 = 400;
const HALF_WIDTH: f64 = WIDTH as f64 / 2.0;
const HALF_HEIGHT: f64 = HEIGHT as f64 / 2.0;

/// Maps a vertex in normalized device coordinates onto the grid.
fn project(v: Vertex) -> Point {
    let x = ((v.x + 1.0) * HALF_WIDTH) as i32;
    let y = ((v.y + 1.0) * HALF_HEIGHT) as i32;
    Point::new(x.max(0).min(WIDTH - 1), y.max(0).min(HEIGHT - 1))
}

fn main() -> Result<(), Error> {
    let mut args = env::args().skip(1);
    let path = args.next().ok_or_else(|| err_msg("USAGE: prog path"))?;

    let mut grid: Grid<u8> = Grid::new(WIDTH as usize, HEIGHT as usize);

    let model_string = fs::read_to_string(&path)?;
    let model = obj::parse(model_string)
        .map_err(|e| err_msg(format!("failed to parse model: {:?}", e)))?;

    for object in model.objects {
        let Object {
            vertices, geometry, ..
        } = object;
        for geom in geometry {
            for shape in geom.shapes {
                match shape.primitive {
                    Primitive::Triangle(idx1, idx2, idx3) => {
                        let a = project(vertices[idx1.0]);
                        let b = project(vertices[idx2.0]);
                        let c = project(vertices[idx3.0]);

                        draw(&LineSegment::new(a, b), &mut grid)?;
                        draw(&LineSegment::new(b, c), &mut grid)?;
                        draw(&LineSegment::new(c, a), &mut grid)?;
                    }
                    _ => { /* NO OP */ }
                }
            }
        }
    }

    println!("{} cells marked", grid.count_marked());

    let black = Rgba([0, 0, 0, 255]);
    let mut image = ImageBuffer::from_pixel(WIDTH as u32, HEIGHT as u32, black);
    for point in grid.marked() {
        image.put_pixel(point.x as u32, point.y as u32, Rgba([255; 4]));
    }
    imageops::flip_vertical(&image).save("./wireframe.png")?;

    Ok(())
}
