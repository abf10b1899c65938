use std::collections::BTreeMap;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

// The runtime parser, compiled into the build script so the baseline table
// and `load_mappings` read the format identically.
#[allow(dead_code)]
#[path = "src/parse.rs"]
mod parse;

use parse::{ParsedLine, parse_line};

/// Applied in order; a later file overrides earlier entries for the same source.
const DATA_FILES: &[&str] = &["confusables.txt", "amendments.txt"];

/// Path to a complete upstream `confusables.txt` to build from instead of the
/// checked-in one. Amendments still apply on top.
const UPSTREAM_OVERRIDE: &str = "CONFUSABLES_TXT";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    // Data files live under the crate directory so they ship in the crate tarball.
    let data_dir = Path::new(&manifest_dir).join("assets").join("data");

    let mut tables = Tables::default();
    for file in DATA_FILES {
        let path = match (*file, env::var_os(UPSTREAM_OVERRIDE)) {
            ("confusables.txt", Some(path)) => PathBuf::from(path),
            _ => data_dir.join(file),
        };
        tables.ingest(&path);
        println!("cargo:rerun-if-changed={}", path.display());
    }
    println!("cargo:rerun-if-env-changed={UPSTREAM_OVERRIDE}");
    tables.write(&Path::new(&out_dir).join("tables_gen.rs"));

    println!("cargo:rerun-if-changed=src/parse.rs");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Default)]
struct Tables {
    confusables: BTreeMap<char, String>,
    descriptions: BTreeMap<String, String>,
}

impl Tables {
    fn ingest(&mut self, path: &Path) {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

        for (idx, line) in content.lines().enumerate() {
            match parse_line(line) {
                Ok(ParsedLine::Entry(entry)) => {
                    self.descriptions
                        .insert(entry.source.to_string(), entry.description.from);
                    self.descriptions
                        .insert(entry.target.clone(), entry.description.to);
                    self.confusables.insert(entry.source, entry.target);
                }
                Ok(ParsedLine::Skip) => {}
                Err(e) => panic!("{}:{}: {e}", path.display(), idx + 1),
            }
        }
    }

    fn write(&self, out_path: &Path) {
        let mut code = String::new();
        code.push_str("// Auto-generated from assets/data by build.rs.\n");
        code.push_str("// DO NOT EDIT: change the data files instead.\n\n");

        code.push_str("/// Source code point → confusable string.\n");
        code.push_str("pub(crate) const CONFUSABLES: &[(char, &str)] = &[\n");
        for (src, tgt) in &self.confusables {
            writeln!(code, "    ({src:?}, {tgt:?}),").unwrap();
        }
        code.push_str("];\n\n");

        code.push_str("/// Literal text → character name(s).\n");
        code.push_str("pub(crate) const DESCRIPTIONS: &[(&str, &str)] = &[\n");
        for (key, name) in &self.descriptions {
            writeln!(code, "    ({key:?}, {name:?}),").unwrap();
        }
        code.push_str("];\n");

        fs::write(out_path, code).unwrap();
    }
}
