use std::{
    collections::BTreeMap,
    fmt::Write as _,
    path::{Path, PathBuf},
};

#[derive(Default)]
struct MigrationFiles {
    up: String,
    down: String,
}

fn main() {
    println!("cargo::rerun-if-changed=migrations");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());

    let migrations = collect_migrations(&manifest_dir.join("migrations"));
    let migrations_rs = out_dir.join("migrations.rs");
    std::fs::write(&migrations_rs, render_migrations(&migrations)).unwrap();

    println!("cargo::rustc-env=MIGRATIONS={}", migrations_rs.display());
}

fn render_migrations(migrations: &BTreeMap<String, MigrationFiles>) -> String {
    let mut out = String::from("&[");
    for (name, MigrationFiles { up, down }) in migrations {
        write!(&mut out, "Migration{{name:{name:?},up:{up:?},down:{down:?}}},").unwrap();
    }
    out.push(']');
    out
}

fn collect_migrations(dir: &Path) -> BTreeMap<String, MigrationFiles> {
    let mut out = BTreeMap::<String, MigrationFiles>::new();
    for entry in dir.read_dir().unwrap() {
        let entry = entry.unwrap();
        let file_name = entry.file_name().into_string().unwrap();

        let (name, is_up) = if let Some(name) = file_name.strip_suffix(".up.sql") {
            (name, true)
        } else if let Some(name) = file_name.strip_suffix(".down.sql") {
            (name, false)
        } else {
            continue;
        };

        let content = std::fs::read_to_string(entry.path()).unwrap();
        let files = out.entry(name.to_owned()).or_default();
        if is_up {
            files.up = content;
        } else {
            files.down = content;
        }
    }
    out
}
