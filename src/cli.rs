use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::config::load_config;
use crate::placement::compute_placement;
use crate::placement_dump::{PlacementDump, SelectedDump, write_placement_dump};
use crate::reactor::find_scroll_container;
use crate::scene::{LoadedScene, parse_scene};

#[derive(Parser, Debug)]
#[command(name = "floatip", version, about = "Floating overlay placement engine")]
pub struct Args {
    /// Scene file (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the placement JSON. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (allowed sides, offset, debounce delay)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Emit the full pipeline dump (margins, candidate scores) instead of
    /// the selected placement only
    #[arg(long = "dump")]
    pub dump: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let loaded = read_scene(args.input.as_deref())?;

    let container = loaded.container.unwrap_or_else(|| {
        find_scroll_container(&loaded.scene, loaded.reference, loaded.root)
    });

    if args.dump {
        let reference_rect = rect_of(&loaded, loaded.reference, "reference")?;
        let container_rect = rect_of(&loaded, container, "container")?;
        let overlay_rect = rect_of(&loaded, loaded.overlay, "overlay")?;
        let dump = PlacementDump::compute(
            reference_rect,
            container_rect,
            overlay_rect.size(),
            &config.placement,
        );
        return match args.output.as_deref() {
            Some(path) => write_placement_dump(path, &dump),
            None => {
                println!("{}", serde_json::to_string_pretty(&dump)?);
                Ok(())
            }
        };
    }

    let placement = compute_placement(
        &loaded.scene,
        loaded.reference,
        container,
        loaded.overlay,
        &config.placement,
    )
    .ok_or_else(|| anyhow::anyhow!("reference or overlay element missing from scene"))?;

    let output = serde_json::to_string_pretty(&SelectedDump::from_placement(&placement))?;
    match args.output.as_deref() {
        Some(path) => std::fs::write(path, output)?,
        None => println!("{output}"),
    }
    Ok(())
}

fn read_scene(input: Option<&Path>) -> Result<LoadedScene> {
    let contents = match input {
        None => return Err(anyhow::anyhow!("No scene input provided (use -i or '-')")),
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    parse_scene(&contents)
}

fn rect_of(
    loaded: &LoadedScene,
    el: crate::element::ElementId,
    role: &str,
) -> Result<crate::geometry::Rect> {
    use crate::element::ElementProvider;
    loaded
        .scene
        .bounding_rect(el)
        .ok_or_else(|| anyhow::anyhow!("{role} element missing from scene"))
}
