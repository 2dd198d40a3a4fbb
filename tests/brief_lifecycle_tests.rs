use chrono::Utc;
use fs_err as fs;
use std::io::Cursor;
use std::time::Duration;
use tempfile::TempDir;

use logo_promptgen::config::Config;
use logo_promptgen::store::{DebouncedSaver, Store};
use logo_promptgen::wizard::{Outcome, Wizard};
use logo_promptgen::{build_prompt, transfer, BrandState, Field};

fn config_in(dir: &TempDir) -> Config {
    Config {
        data_dir: dir.path().join("data"),
        export_dir: dir.path().join("exports"),
        debounce_ms: 0,
        ..Config::default()
    }
}

#[test]
fn wizard_state_exports_and_reimports_unchanged() {
    let dir = TempDir::new().unwrap();
    let cfg = config_in(&dir);
    let store = Store::open(&cfg.db_path()).unwrap();

    let mut state = store.load_state(&cfg.storage_key).unwrap();
    assert_eq!(state, BrandState::starter());

    let input = "Mosaik\n13\nTeile, die passen\n\n:quit\n";
    let outcome = {
        let saver = DebouncedSaver::new(&store, cfg.storage_key.clone(), cfg.debounce());
        let mut out = Vec::new();
        let mut wizard = Wizard::new(Cursor::new(input), &mut out, saver);
        let outcome = wizard.run(&mut state).unwrap();
        outcome
    };
    assert_eq!(outcome, Outcome::Quit);

    let stored = store.load_state(&cfg.storage_key).unwrap();
    assert_eq!(stored, state);
    assert_eq!(stored.meta.industry, "Kreativ/Agentur");

    let (path, _) = transfer::export_into_dir(&stored, &cfg.export_dir, Utc::now()).unwrap();
    let imported = transfer::import_from(&path).unwrap();
    assert_eq!(imported, stored);
    assert_eq!(build_prompt(&imported), build_prompt(&stored));
}

#[test]
fn corrupt_import_leaves_store_alone() {
    let dir = TempDir::new().unwrap();
    let cfg = config_in(&dir);
    let store = Store::open(&cfg.db_path()).unwrap();

    let mut state = BrandState::default();
    state.set(Field::Name, "Acme").unwrap();
    store.save_state(&cfg.storage_key, &state).unwrap();

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{\"meta\": ").unwrap();
    if let Ok(s) = transfer::import_from(&bad) {
        store.save_state(&cfg.storage_key, &s).unwrap();
    }
    assert_eq!(store.load_state(&cfg.storage_key).unwrap(), state);
}

#[test]
fn legacy_export_imports_with_defaults_filled() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r##"{
  "meta": { "name": "Acme", "branche": "Software/Tech" },
  "werte": { "values": ["Innovation"] },
  "farben": { "primary": "#6f00ff" },
  "extra": true
}"##,
    )
    .unwrap();

    let s = transfer::import_from(&path).unwrap();
    assert_eq!(s.meta.name, "Acme");
    assert_eq!(s.style.adjectives, Vec::<String>::new());

    let prompt = build_prompt(&s);
    assert!(prompt.contains("Core Values Visualized: lightbulb abstraction"));
    assert!(prompt.contains("Color Palette: Primary: #6F00FF"));
    assert!(!prompt.contains("Logo Type:"));
}

#[test]
fn slow_debounce_still_persists_on_drop() {
    let dir = TempDir::new().unwrap();
    let cfg = Config { debounce_ms: 60_000, ..config_in(&dir) };
    let store = Store::open(&cfg.db_path()).unwrap();

    let mut state = BrandState::default();
    {
        let mut saver = DebouncedSaver::new(&store, cfg.storage_key.clone(), Duration::from_millis(cfg.debounce_ms));
        for name in ["A", "Ac", "Acm", "Acme"] {
            state.meta.name = name.into();
            saver.schedule(&state);
        }
        assert_eq!(saver.writes(), 1);
    }
    assert_eq!(store.load_state(&cfg.storage_key).unwrap().meta.name, "Acme");
}
