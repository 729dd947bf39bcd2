use failure::Fail;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Fail)]
pub enum DrawError {
    #[fail(
        display = "point [{} {}] is outside of the {}x{} grid",
        x, y, width, height
    )]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}
