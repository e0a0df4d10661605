use cipher_core::command::Command;
use cipher_core::config::DecoderConfig;
use cipher_core::core::types::Value;
use cipher_core::host::{VariableStore, Variables};
use cipher_core::render::ConsoleSink;
use cipher_core::CipherEngine;
use clap::Parser;
use log::error;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cipher_engine", about = "Console host for the progressive-reveal cipher")]
struct Args {
    /// Plugin parameters as JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save slot to load at startup and write on `save` / `exit`.
    #[arg(long)]
    save: Option<PathBuf>,
}

fn default_save_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("progressive-cipher");
    path.push("save.bin");
    path
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match DecoderConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Invalid configuration '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DecoderConfig::default(),
    };

    let save_path = args.save.unwrap_or_else(default_save_path);
    let source_variable = config.source_variable;
    let (mut engine, mut variables) = CipherEngine::from_file_or_new(config, &save_path);
    let mut sink = ConsoleSink;

    println!("Progressive cipher console. Type 'help' for commands.");
    println!("---------------------------------------------------------------");
    prompt();

    for line in stdin().lock().lines() {
        let input = match line {
            Ok(input) => input,
            Err(e) => {
                error!("Could not read input: {}", e);
                break;
            }
        };
        let cmd = input.trim();
        let (head, rest) = cmd.split_once(' ').unwrap_or((cmd, ""));

        match head {
            "exit" => break,
            "help" => print_help(source_variable),
            "set" => set_variable(&mut variables, rest),
            "get" => match rest.trim().parse() {
                Ok(id) => match variables.value(id) {
                    Some(value) => println!("#{} = {}", id, value),
                    None => println!("#{} is not set", id),
                },
                Err(_) => println!("Usage: get <id>"),
            },
            "save" => {
                if let Err(e) = engine.save_game(&variables) {
                    error!("Could not save: {}", e);
                }
            }
            "load" => match engine.load_game() {
                Ok(loaded) => variables = loaded,
                Err(e) => error!("Could not load: {}", e),
            },
            "" => {}
            _ => match Command::parse_line(cmd) {
                Ok(Some(command)) => {
                    engine.execute(command, &mut variables, &mut sink);
                }
                Ok(None) => println!("Unknown command '{}'", head),
                Err(e) => println!("{}", e),
            },
        }
        prompt();
    }

    println!("\nSaving...");
    if let Err(e) = engine.save_game(&variables) {
        error!("Could not save: {}", e);
    } else {
        println!("Saved to '{}'", save_path.display());
    }
}

fn set_variable(variables: &mut Variables, rest: &str) {
    let Some((id, text)) = rest.split_once(' ') else {
        println!("Usage: set <id> <text>");
        return;
    };
    match id.parse() {
        Ok(id) => {
            let value = match text.parse::<i64>() {
                Ok(n) => Value::Number(n),
                Err(_) => Value::Text(text.to_string()),
            };
            variables.set_value(id, value);
        }
        Err(_) => println!("Variable id must be a number, got '{}'", id),
    }
}

fn print_help(source_variable: u32) {
    println!("  set <id> <text>        store text in a variable (source is #{})", source_variable);
    println!("  get <id>               show a variable");
    println!("  MooseLearn <c> <d>     teach that coded <c> reads as <d>");
    println!("  MooseDecode            decode the source variable");
    println!("  save | load | exit");
}

fn prompt() {
    print!("> ");
    let _ = stdout().flush();
}
