//! Fire mod generator binary - compiles the fire block definition to disk.
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --out <DIR>        Target mods directory (default: "mods")
//!   --texture <PATH>   Flame texture file (default: "assets/flame.png")
//!   --radius <R>       Spread neighborhood radius (default: 2)
//!
//! Output structure:
//!   <out>/fire/
//!     blocks/fire.json
//!     triggers/fire.json
//!     textures/blocks/flame.png

use embergen::generation::{FireConfig, FirePipeline};
use embergen::texture::Texture;
use embergen::trigger::NoDefaultEvents;
use embergen::writer::Writer;

fn main() {
    embergen::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let out = parse_str_arg(&args, "--out").unwrap_or_else(|| "mods".to_string());
    let texture_path =
        parse_str_arg(&args, "--texture").unwrap_or_else(|| "assets/flame.png".to_string());
    let radius = parse_i32_arg(&args, "--radius").unwrap_or(2);

    let config = FireConfig { spread_radius: radius, ..FireConfig::default() };

    println!("=== Embergen Fire Generator ===");
    println!("Block:   {}", config.block_id());
    println!("Radius:  {}", config.spread_radius);
    println!("Texture: {}", texture_path);
    println!("Output:  {}", out);
    println!();

    let texture = Texture::load_from_file("flame", &texture_path)
        .expect("Failed to load flame texture");

    let pipeline = FirePipeline::new(config);
    let artifact = pipeline.generate(texture, &NoDefaultEvents);

    let block = &artifact.blocks()[0];
    let sheet = &artifact.sheets()[0];
    let entries: usize = sheet.triggers().map(|t| t.entries.len()).sum();

    println!("States:   {}", block.states().len());
    println!("Triggers: {} ({} entries)", sheet.len(), entries);

    let root = Writer::new(out).write(&artifact).expect("Failed to write mod");

    println!();
    println!("=== Generation Complete ===");
    println!("Output: {}", root.display());
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.clone())
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}
