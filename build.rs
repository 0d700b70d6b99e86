// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: recipe slug
fn slug_arg() -> Arg {
    Arg::new("slug")
        .required(true)
        .help("Recipe slug (file name without .xml)")
}

/// Common argument: output file
fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .help("Output file (default: stdout)")
}

fn build_cli() -> Command {
    Command::new("kettle")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Kettle Contributors")
        .about("BeerXML recipe store with label and fermentation tools")
        .arg(
            Arg::new("recipes_dir")
                .short('d')
                .long("recipes-dir")
                .value_name("DIR")
                .global(true)
                .help("Recipe directory (overrides storage.recipe_dir from the config file)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("Path to a TOML configuration file"),
        )
        .subcommand(
            Command::new("list")
                .about("List recipes in the recipe directory")
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue).help("Print JSON")),
        )
        .subcommand(
            Command::new("show")
                .about("Show one recipe")
                .arg(slug_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue).help("Print JSON")),
        )
        .subcommand(
            Command::new("save")
                .about("Validate a JSON recipe and save it to the recipe directory")
                .arg(Arg::new("input").required(true).help("JSON recipe file"))
                .arg(
                    Arg::new("slug")
                        .long("slug")
                        .help("Save under this slug instead of one derived from the name"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Validate a JSON recipe and write it as BeerXML without saving")
                .arg(Arg::new("input").required(true).help("JSON recipe file"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Copy .xml recipe files into the recipe directory")
                .arg(
                    Arg::new("files")
                        .required(true)
                        .num_args(1..)
                        .help("Files to import; anything not ending in .xml is skipped"),
                ),
        )
        .subcommand(
            Command::new("label")
                .about("Render a recipe's bottle label as SVG")
                .arg(slug_arg())
                .arg(
                    Arg::new("language")
                        .short('l')
                        .long("language")
                        .help("Caption language (en, de)"),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("ferment")
                .about("Simulate fermentation readings for a recipe")
                .arg(slug_arg())
                .arg(Arg::new("days").long("days").help("Length of the simulation in days"))
                .arg(
                    Arg::new("interval_hours")
                        .long("interval-hours")
                        .help("Hours between readings"),
                )
                .arg(Arg::new("seed").long("seed").help("Seed for reproducible readings"))
                .arg(Arg::new("csv").long("csv").action(ArgAction::SetTrue).help("Print CSV")),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP server")
                .arg(Arg::new("bind").long("bind").help("Public bind address"))
                .arg(Arg::new("admin_bind").long("admin-bind").help("Admin bind address")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("kettle.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
