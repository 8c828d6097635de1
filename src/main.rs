//! RV32I Pipeline Simulator CLI.
//!
//! Loads an assembly source file into the pipeline engine and steps it to
//! quiescence (or a cycle limit), reporting the final state and run
//! statistics.
//!
//! # Usage
//!
//! ```text
//! rv32-pipeline program.s
//! rv32-pipeline program.s --registers '{"x1": 5}' --memory '{"0": 4}' --json
//! ```

use clap::Parser;
use std::{fs, process};

extern crate rv32_pipeline;

use rv32_pipeline::config::Config;
use rv32_pipeline::core::Cpu;
use rv32_pipeline::sim::loader::{self, MemoryInit, RegisterInit};

/// Command-line arguments for the pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "RV32I Five-Stage Pipeline Simulator")]
struct Args {
    /// Assembly source file.
    file: String,

    #[arg(short, long)]
    config: Option<String>,

    /// JSON map of initial register values, e.g. '{"x1": 5}'.
    #[arg(long)]
    registers: Option<String>,

    /// JSON map of initial memory words, e.g. '{"0": 4}'.
    #[arg(long)]
    memory: Option<String>,

    /// Maximum number of cycles to simulate.
    #[arg(long, default_value_t = 10_000)]
    max_cycles: u64,

    /// Print a state snapshot as JSON after every cycle.
    #[arg(long)]
    step_states: bool,

    /// Print the final state snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Trace every pipeline stage to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::from_path(path).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: {}", e);
            process::exit(1);
        }),
        None => Config::default(),
    };

    let source = fs::read_to_string(&args.file).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Could not read file '{}': {}", args.file, e);
        process::exit(1);
    });

    let initial_registers: Option<RegisterInit> = args.registers.as_deref().map(|text| {
        serde_json::from_str(text).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: Bad --registers JSON: {}", e);
            process::exit(1);
        })
    });
    let initial_memory: Option<MemoryInit> = args.memory.as_deref().map(|text| {
        serde_json::from_str(text).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: Bad --memory JSON: {}", e);
            process::exit(1);
        })
    });

    let mut cpu = Cpu::new(&config);
    cpu.trace = cpu.trace || args.trace;

    let loaded = loader::load_program(
        &mut cpu,
        &source,
        initial_registers.as_ref(),
        initial_memory.as_ref(),
    );
    if !loaded.success {
        eprintln!("[!] Assembly failed:");
        for err in &loaded.errors {
            eprintln!("    line {}: {}", err.line, err.message);
        }
        process::exit(1);
    }

    println!(
        "[*] Loaded {} instructions @ {:#06x}",
        loaded.instructions.len(),
        cpu.program_start()
    );
    for inst in &loaded.instructions {
        println!("    {}  {}  {}", inst.address, inst.hex, inst.raw);
    }

    while !cpu.quiescent() && cpu.stats.cycles < args.max_cycles {
        let state = cpu.step();
        if args.step_states {
            let line = serde_json::to_string(&state).expect("state serializes");
            println!("{}", line);
        }
    }

    if cpu.stats.cycles >= args.max_cycles && !cpu.quiescent() {
        eprintln!("[!] Cycle limit reached after {} cycles", cpu.stats.cycles);
    }

    if args.json {
        let state = serde_json::to_string_pretty(&cpu.state()).expect("state serializes");
        println!("{}", state);
    } else {
        cpu.dump_state();
    }
    cpu.stats.print();
}
