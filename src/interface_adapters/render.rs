// Turns frame snapshots into PNG images for the screen endpoint.

use crate::domain::{FruitKind, Position};
use crate::use_cases::{FrameSnapshot, GameSession};
use axum::body::Bytes;
use image::{ImageFormat, Rgb, RgbImage};
use std::fmt;
use std::io::Cursor;
use tokio::sync::watch;
use tracing::{error, warn};

const BACKGROUND: Rgb<u8> = Rgb([128, 128, 128]);
const WORM: Rgb<u8> = Rgb([0, 0, 0]);
const WORM_HEAD: Rgb<u8> = Rgb([40, 40, 40]);

fn fruit_color(kind: FruitKind) -> Rgb<u8> {
    match kind {
        FruitKind::Growth => Rgb([200, 30, 30]),
        FruitKind::Shrink => Rgb([240, 150, 20]),
        FruitKind::Reverse => Rgb([130, 60, 170]),
    }
}

#[derive(Debug)]
pub enum RenderError {
    Encode(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Encode(e) => write!(f, "failed to encode frame: {e}"),
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Encode(e)
    }
}

/// Renders one frame as a PNG.
///
/// The image is one cell wider and taller than the board so a head resting on
/// the last in-play column or row past the edge is still visible.
pub fn render_png(frame: &FrameSnapshot, cell_size: u32) -> Result<Vec<u8>, RenderError> {
    let columns = (frame.board.width.max(0) as u32) + 1;
    let rows = (frame.board.height.max(0) as u32) + 1;
    let mut image = RgbImage::from_pixel(columns * cell_size, rows * cell_size, BACKGROUND);

    if let Some(fruit) = frame.fruit {
        fill_cell(&mut image, fruit.position, cell_size, fruit_color(fruit.kind));
    }

    let head = frame.worm.last().copied();
    for segment in &frame.worm {
        let color = if Some(*segment) == head { WORM_HEAD } else { WORM };
        fill_cell(&mut image, *segment, cell_size, color);
    }

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

// Cells that fall outside the image are skipped.
fn fill_cell(image: &mut RgbImage, cell: Position, cell_size: u32, color: Rgb<u8>) {
    if cell.x < 0 || cell.y < 0 {
        return;
    }
    let left = cell.x as u32 * cell_size;
    let top = cell.y as u32 * cell_size;
    if left >= image.width() || top >= image.height() {
        return;
    }

    for y in top..(top + cell_size).min(image.height()) {
        for x in left..(left + cell_size).min(image.width()) {
            image.put_pixel(x, y, color);
        }
    }
}

pub async fn frame_renderer(
    mut frames_rx: watch::Receiver<FrameSnapshot>,
    screen_tx: watch::Sender<Option<Bytes>>,
    cell_size: u32,
) {
    // Render each published frame once and keep only the latest image.
    loop {
        let frame = frames_rx.borrow_and_update().clone();
        match render_png(&frame, cell_size) {
            Ok(png) => {
                screen_tx.send_replace(Some(Bytes::from(png)));
            }
            Err(e) => {
                error!(error = %e, tick = frame.tick, "failed to render frame");
            }
        }

        if frames_rx.changed().await.is_err() {
            warn!("frame channel closed; renderer exiting");
            break;
        }
    }
}

pub fn spawn_frame_renderer(session: &GameSession, cell_size: u32) -> watch::Receiver<Option<Bytes>> {
    let (screen_tx, screen_rx) = watch::channel::<Option<Bytes>>(None);
    tokio::spawn(frame_renderer(session.subscribe_frames(), screen_tx, cell_size));
    screen_rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, Direction, Fruit};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn frame() -> FrameSnapshot {
        FrameSnapshot {
            tick: 3,
            board: Board::new(4, 3),
            heading: Direction::Right,
            worm: vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
            fruit: Some(Fruit {
                kind: FruitKind::Shrink,
                position: Position::new(3, 2),
            }),
            continues: true,
            reversed: false,
        }
    }

    fn decode(png: &[u8]) -> RgbImage {
        image::load_from_memory_with_format(png, ImageFormat::Png)
            .expect("rendered frame should decode")
            .to_rgb8()
    }

    #[test]
    fn renders_board_plus_margin_as_png() {
        let png = render_png(&frame(), 10).expect("render should succeed");
        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let image = decode(&png);
        assert_eq!(image.dimensions(), (50, 40));
    }

    #[test]
    fn paints_worm_fruit_and_background() {
        let image = decode(&render_png(&frame(), 10).expect("render should succeed"));
        assert_eq!(*image.get_pixel(5, 5), WORM);
        assert_eq!(*image.get_pixel(25, 5), WORM_HEAD);
        assert_eq!(*image.get_pixel(35, 25), fruit_color(FruitKind::Shrink));
        assert_eq!(*image.get_pixel(45, 35), BACKGROUND);
    }

    #[test]
    fn cells_off_the_image_are_skipped() {
        let mut frame = frame();
        frame.worm = vec![Position::new(-1, 0), Position::new(9, 9), Position::new(4, 0)];
        frame.fruit = None;
        let image = decode(&render_png(&frame, 4).expect("render should succeed"));
        // Only the margin cell at x == width is drawn.
        assert_eq!(*image.get_pixel(17, 1), WORM_HEAD);
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
    }
}
