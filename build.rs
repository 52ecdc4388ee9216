use anyhow::{Context, Result};
use mems_shell_config::{codegen::generate_configuration, Configuration};
use std::{
    env,
    fs::File,
    io::{BufReader, Read},
};

const DEFAULT_CONFIG_FILENAME: &str = "stm32f407_discovery.ron";

fn main() -> Result<()> {
    process_configuration_file()
}

fn process_configuration_file() -> Result<()> {
    println!("cargo:rerun-if-env-changed=MEMS_SHELL_CONFIG");
    println!(
        "cargo:rerun-if-changed=./mems_shell_config/sample_configurations/{}",
        DEFAULT_CONFIG_FILENAME
    );

    let filename = if let Ok(filename) = env::var("MEMS_SHELL_CONFIG") {
        println!("cargo:rerun-if-changed={}", filename);
        filename
    } else {
        format!("./mems_shell_config/sample_configurations/{}", DEFAULT_CONFIG_FILENAME)
    };

    let file = File::open(&filename).with_context(|| format!("Opening {}", filename))?;
    let mut buf_reader = BufReader::new(file);
    let mut contents = String::new();
    buf_reader.read_to_string(&mut contents)?;
    let configuration: Configuration = ron::from_str(&contents)?;
    generate_configuration(env::var("OUT_DIR")?, &configuration)?;

    Ok(())
}
