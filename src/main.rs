use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use humansize::{format_size, DECIMAL};
use std::io;
use tracing::debug;

use logo_promptgen::cli::{Args, Command};
use logo_promptgen::config::Config;
use logo_promptgen::model::{BrandState, Field};
use logo_promptgen::store::{DebouncedSaver, Store};
use logo_promptgen::wizard::{Outcome, Wizard};
use logo_promptgen::{color, log, prompt, transfer, ux};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = Config::load(args.config.as_deref()).context("loading config")?;
    if let Some(dir) = &args.data_dir {
        cfg.data_dir = dir.clone();
    }
    log::init(args.debug, &cfg.log_level);
    debug!(db = %cfg.db_path().display(), key = %cfg.storage_key, "using state store");

    let store = Store::open(&cfg.db_path())
        .with_context(|| format!("opening state store {}", cfg.db_path().display()))?;
    let key = cfg.storage_key.as_str();

    match args.command {
        Command::Wizard { step } => {
            let mut state = store.load_state(key)?;
            let saver = DebouncedSaver::new(&store, key, cfg.debounce());
            let stdin = io::stdin();
            let mut wizard = Wizard::new(stdin.lock(), io::stdout(), saver).starting_at(step);
            if wizard.run(&mut state)? == Outcome::Quit {
                ux::success("progress saved; resume with `wizard --step N`");
            }
        }

        Command::Prompt { out } => {
            let state = store.load_state(key)?;
            match out {
                Some(path) => {
                    prompt::write_to(&path, &state)
                        .with_context(|| format!("writing prompt to {}", path.display()))?;
                    ux::success(&format!("prompt written to {}", path.display()));
                }
                None => ux::print_prompt(&prompt::build_prompt(&state)).context("writing prompt to stdout")?,
            }
        }

        Command::Show => {
            let state = store.load_state(key)?;
            ux::show_state(&state);
        }

        Command::Set { field, value } => {
            let field: Field = field.parse()?;
            let mut state = store.load_state(key)?;
            if field.is_list() {
                state.set_list(field, &value)?;
            } else {
                let joined = value.join(" ");
                let stored = match field {
                    Field::Primary | Field::Secondary => color::normalize(&joined).unwrap_or(joined),
                    _ => joined,
                };
                state.set(field, &stored)?;
            }
            store.save_state(key, &state)?;
            ux::success(&format!("{} = {}", field, state.get(field)));
        }

        Command::Toggle { field, keyword } => {
            let field: Field = field.parse()?;
            let mut state = store.load_state(key)?;
            let selected = state.toggle(field, &keyword)?;
            store.save_state(key, &state)?;
            let verb = if selected { "selected" } else { "deselected" };
            ux::success(&format!("{keyword} {verb}; {} = {}", field, state.get(field)));
        }

        Command::Contrast { colors } => ux::print_contrast(&colors),

        Command::Export { out } => {
            let state = store.load_state(key)?;
            let (path, bytes) = match out {
                Some(path) => {
                    let bytes = transfer::export_to(&state, &path)
                        .with_context(|| format!("exporting to {}", path.display()))?;
                    (path, bytes)
                }
                None => transfer::export_into_dir(&state, &cfg.export_dir, Utc::now())
                    .with_context(|| format!("exporting into {}", cfg.export_dir.display()))?,
            };
            ux::success(&format!("exported {} ({})", path.display(), format_size(bytes, DECIMAL)));
        }

        Command::Import { file } => match transfer::import_from(&file) {
            Ok(state) => {
                store.save_state(key, &state)?;
                ux::success(&format!("imported {}", file.display()));
            }
            Err(e) => ux::warn(&format!("import ignored, state unchanged: {e}")),
        },

        Command::Reset { yes } => {
            if yes || ux::confirm("Reset the brand record to the starter values?") {
                store.save_state(key, &BrandState::starter())?;
                ux::success("record reset");
            } else {
                println!("Aborted by user.");
            }
        }

        Command::Clear => {
            let removed = store.remove(key)?;
            ux::success(if removed { "stored record deleted" } else { "nothing stored" });
        }

        Command::Options => ux::print_options(),
    }

    Ok(())
}
