use pixel_grid::InvalidCoordinate as OutOfGrid;
use std::path::PathBuf;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        InvalidCoordinate(x: usize, y: usize, width: usize, height: usize) {
            description("coordinate outside of the pixel grid")
            display("coordinate ({}, {}) is outside of the {}×{} grid", x, y, width, height)
        }

        SourceUnavailable(path: PathBuf) {
            description("source image unavailable")
            display("could not load source image {}", path.display())
        }

        InvalidConfiguration(msg: String) {
            description("invalid configuration")
            display("invalid configuration: {}", msg)
        }
    }
}

impl From<OutOfGrid> for Error {
    fn from(e: OutOfGrid) -> Self {
        ErrorKind::InvalidCoordinate(e.x, e.y, e.width, e.height).into()
    }
}

pub fn invalid_config<S: Into<String>>(msg: S) -> Error {
    ErrorKind::InvalidConfiguration(msg.into()).into()
}
