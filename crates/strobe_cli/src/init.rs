//! `strobe init` — project scaffolding command.
//!
//! Creates a demo project exercising the classic adder example: an `hdl/`
//! directory with the adder toplevel in the chosen language and a
//! `strobe.toml` pointing at it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::CliLanguage;

/// Runs the `strobe init` command.
///
/// If `name` is `Some`, creates a new subdirectory with that name.
/// Otherwise initializes in the current working directory.
/// Returns exit code 0 on success.
pub fn run(name: Option<String>, lang: CliLanguage) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = match &name {
        Some(n) => {
            let dir = PathBuf::from(n);
            if dir.exists() {
                return Err(format!("directory '{}' already exists", n).into());
            }
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };

    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("adder_demo");

    eprintln!("  Creating new Strobe project `{project_name}`");

    fs::create_dir_all(project_dir.join("hdl"))?;

    let ext = extension(lang);
    write_strobe_toml(&project_dir, project_name, ext)?;
    write_adder_file(&project_dir, lang, ext)?;

    eprintln!("     Created {}", project_dir.join("strobe.toml").display());
    eprintln!(
        "     Created {}",
        project_dir.join("hdl").join(format!("adder.{ext}")).display()
    );

    Ok(0)
}

/// Returns the source file extension for the chosen language.
fn extension(lang: CliLanguage) -> &'static str {
    match lang {
        CliLanguage::Verilog => "sv",
        CliLanguage::Vhdl => "vhdl",
    }
}

/// Writes the `strobe.toml` configuration file.
fn write_strobe_toml(root: &Path, name: &str, ext: &str) -> io::Result<()> {
    let source_key = if ext == "sv" { "verilog" } else { "vhdl" };
    let content = format!(
        r#"[project]
name = "{name}"
toplevel = "adder"

[sources]
{source_key} = ["hdl/adder.{ext}"]

[test]
settle = "2ns"
trials = 10
"#
    );
    fs::write(root.join("strobe.toml"), content)
}

/// Writes the adder toplevel in the chosen language.
fn write_adder_file(root: &Path, lang: CliLanguage, ext: &str) -> io::Result<()> {
    let content = match lang {
        CliLanguage::Verilog => r#"`timescale 1ns/1ps

module adder #(
    parameter integer DATA_WIDTH = 4
) (
    input  logic [DATA_WIDTH-1:0] A,
    input  logic [DATA_WIDTH-1:0] B,
    output logic [DATA_WIDTH:0]   X
);

    assign X = A + B;

endmodule
"#,
        CliLanguage::Vhdl => r#"library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;

entity adder is
    generic (
        DATA_WIDTH : positive := 4
    );
    port (
        A : in  unsigned(DATA_WIDTH - 1 downto 0);
        B : in  unsigned(DATA_WIDTH - 1 downto 0);
        X : out unsigned(DATA_WIDTH downto 0)
    );
end entity adder;

architecture rtl of adder is
begin
    X <= resize(A, X'length) + B;
end architecture rtl;
"#,
    };
    fs::write(root.join("hdl").join(format!("adder.{ext}")), content)
}
