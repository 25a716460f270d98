use std::path::PathBuf;

use dotmatrix::dump::{self, DumpConfig, DumpView};

const USAGE: &str = "Usage: vram_dump <tiles|bg|frame> <memory_image> <out_rgb24_path>";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let view: DumpView = args
        .next()
        .unwrap_or_else(|| {
            eprintln!("{USAGE}");
            std::process::exit(2);
        })
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        });
    let image: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let output: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });

    let config = DumpConfig::builder()
        .image(image)
        .output(output)
        .view(view)
        .build();

    match dump::run(&config) {
        Ok(report) => println!(
            "Wrote {} bytes ({}x{} rgb24) to '{}'",
            report.bytes,
            report.width,
            report.height,
            config.output.display()
        ),
        Err(err) => {
            eprintln!("vram_dump: {err:#}");
            std::process::exit(1);
        }
    }
}
