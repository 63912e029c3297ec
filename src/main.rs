use anyhow::Result;
use clap::Parser;

use grid_tac_toe::{args::Args, headless, logging, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init(args.log_dir.as_deref(), &args.log_level)?;

    if let Some(moves) = &args.moves {
        let (game, notes) = headless::play(args.grid_size, moves);

        for note in &notes {
            eprintln!("{note}");
        }

        if args.json {
            println!("{}", headless::render_json(&game)?);
        } else {
            print!("{}", headless::render_text(&game));
        }

        return Ok(());
    }

    run_ui(args.grid_size)
}
