//! Interactive driver: load a BMP, draw a black diagonal cross, preview it,
//! and save the result.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bmpedit::{BmpError, Pixel, ascii_preview, read_bmp_file, write_bmp_file};

/// Corners of the rectangle whose diagonals get drawn.
const CROSS: (i32, i32, i32, i32) = (40, 60, 160, 120);

fn prompt(stdin: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run() -> Result<(), BmpError> {
    let mut stdin = io::stdin().lock();

    let input = prompt(&mut stdin, "Enter input BMP filename: ")?;
    let mut image = read_bmp_file(&input)?;
    log::info!(
        "loaded {input}: {}x{} {}bpp",
        image.width(),
        image.height(),
        image.metadata().bit_depth.bits()
    );

    let (x1, y1, x2, y2) = CROSS;
    image
        .editor()
        .draw_diagonal_cross(x1, y1, x2, y2, Pixel::BLACK);

    print!("{}", ascii_preview(image.pixels()));

    let output = prompt(&mut stdin, "Enter output BMP filename: ")?;
    write_bmp_file(&output, &image)?;
    log::info!("wrote {output}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
