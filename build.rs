use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};
use std::{env, fs};

const MD_CASES_DIR: &str = "tests/md_cases";
const GENERATED_FILE: &str = "tests/integ_test_cases.rs";

fn main() -> Result<(), String> {
    println!("cargo::rerun-if-changed={MD_CASES_DIR}");
    let out_dir = env::var("OUT_DIR").map_err(|e| format!("OUT_DIR: {e}"))?;

    let mut generated = String::new();
    for case_file in case_files()? {
        let contents = fs::read_to_string(&case_file).map_err(|e| format!("{}: {e}", case_file.display()))?;
        let parsed: CaseFile = toml::from_str(&contents).map_err(|e| format!("{}: {e}", case_file.display()))?;
        let mod_name = case_file
            .file_stem()
            .map(|stem| identifier(&stem.to_string_lossy()))
            .ok_or_else(|| format!("{}: no file stem", case_file.display()))?;
        parsed
            .write_mod(&mod_name, &mut generated)
            .map_err(|e| format!("{}: {e}", case_file.display()))?;
    }

    let out_path = Path::new(&out_dir).join(GENERATED_FILE);
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("{}: {e}", parent.display()))?;
    }
    fs::write(&out_path, generated).map_err(|e| format!("{}: {e}", out_path.display()))
}

/// The `*.toml` files under [MD_CASES_DIR], sorted so the generated file is stable.
fn case_files() -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for entry in fs::read_dir(MD_CASES_DIR).map_err(|e| format!("{MD_CASES_DIR}: {e}"))? {
        let path = entry.map_err(|e| format!("{MD_CASES_DIR}: {e}"))?.path();
        if !path.is_file() {
            return Err(format!("{}: not a regular file", path.display()));
        }
        if path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// One `tests/md_cases/*.toml` file: a single quake input, checked against any number of CLI invocations.
#[derive(Deserialize)]
struct CaseFile {
    given: Given,
    expect: BTreeMap<String, Expect>,
}

#[derive(Deserialize)]
struct Given {
    md: String,
    #[serde(default)]
    files: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct Expect {
    cli_args: Vec<String>,
    output: String,
    #[serde(default)]
    output_json: bool,
    #[serde(default)]
    output_err: String,
    #[serde(default = "default_success")]
    expect_success: bool,
}

fn default_success() -> bool {
    true
}

impl CaseFile {
    fn write_mod(&self, mod_name: &str, out: &mut String) -> fmt::Result {
        writeln!(out, "mod {mod_name} {{")?;
        writeln!(out, "    use super::*;\n")?;
        writeln!(out, "    const MD: &str = {};", raw_str(&self.given.md))?;
        writeln!(out, "    const FILES: [(&str, &str); {}] = [", self.given.files.len())?;
        for (name, content) in &self.given.files {
            writeln!(out, "        ({name:?}, {}),", raw_str(content))?;
        }
        writeln!(out, "    ];")?;

        for (case_name, expect) in &self.expect {
            writeln!(out)?;
            expect.write_test_fn(&identifier(case_name), out)?;
        }
        writeln!(out, "}}\n")
    }
}

impl Expect {
    fn write_test_fn(&self, fn_name: &str, out: &mut String) -> fmt::Result {
        writeln!(out, "    #[test]")?;
        writeln!(out, "    fn {fn_name}() {{")?;
        writeln!(out, "        Case {{")?;
        writeln!(out, "            cli_args: {:?},", self.cli_args)?;
        writeln!(out, "            expect_output_json: {},", self.output_json)?;
        writeln!(out, "            expect_output: {},", raw_str(&self.output))?;
        writeln!(out, "            expect_error: {},", raw_str(&self.output_err))?;
        writeln!(out, "            expect_success: {},", self.expect_success)?;
        writeln!(out, "            md: MD,")?;
        writeln!(out, "            files: &FILES,")?;
        writeln!(out, "        }}")?;
        writeln!(out, "        .check();")?;
        writeln!(out, "    }}")
    }
}

/// A raw string literal for `text`, with one more `#` than the longest `"#...` run inside it.
///
/// A fixed `r#"..."#` would end early on text like `"#tag"`.
fn raw_str(text: &str) -> String {
    let mut longest = 0;
    let mut run = None;
    for ch in text.chars() {
        run = match (ch, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            longest = longest.max(n);
        }
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

/// Turns a case or file name into a Rust identifier: spaces and dashes become `_`, other punctuation is dropped.
fn identifier(name: &str) -> String {
    name.chars()
        .filter_map(|ch| match ch {
            ' ' | '-' => Some('_'),
            ch if ch.is_ascii_alphanumeric() || ch == '_' => Some(ch.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}
