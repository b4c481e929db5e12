use std::path::Path;
use std::process;

use favicon_preparer::favicon::process_image;

const INPUT_IMAGE: &str = "assets/source.png";
const OUTPUT_DIR: &str = "public";

fn main() {
    // Init logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = process_image(Path::new(INPUT_IMAGE), Path::new(OUTPUT_DIR)) {
        println!("Error processing image: {}", e);
        process::exit(1);
    }
}
