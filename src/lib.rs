//! RV32I Pipeline Simulator Library.
//!
//! This crate implements a cycle-accurate educational simulator for a subset
//! of the RV32I integer instruction set. Programs are assembled from source
//! text, encoded to 32-bit machine words, and executed on a classic 5-stage
//! in-order pipeline.
//!
//! # Architecture
//!
//! * **Core**: 5-stage in-order pipeline (Fetch, Decode, Execute, Memory,
//!   Writeback) with RAW hazard detection via stalls (no forwarding) and
//!   predict-not-taken branch handling with flush.
//! * **Assembler**: per-line validation of the supported mnemonics with
//!   collected diagnostics.
//! * **Encoder**: standard RV32I R/I/S/B field layouts.
//!
//! # Modules
//!
//! * `asm`: Assembler front end and diagnostics.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Program loading and load responses.
//! * `state`: Observable state snapshots.
//! * `stats`: Simulation statistics collection.

/// Assembler front end: tokenization, per-shape validation, and collected
/// per-line diagnostics.
pub mod asm;

/// Configuration system for program layout and tracing settings.
///
/// Loads and parses TOML configuration files to customize the memory size,
/// program start address, and execution tracing.
pub mod config;

/// CPU core implementation including pipeline stages and hazard logic.
///
/// Implements the 5-stage in-order pipeline (Fetch, Decode, Execute, Memory,
/// Writeback), the register file, the flat data memory, and the loaded
/// program image.
pub mod core;

/// Instruction Set Architecture definitions.
///
/// The typed instruction representation produced by the assembler, the
/// RV32I base encoding field constants, and the machine-word encoder.
pub mod isa;

/// Simulation harness: program loading and the load response schema.
///
/// Handles two-pass program layout, label collection, and initial register
/// and memory overrides.
pub mod sim;

/// Observable state snapshots in the wire schema exposed to front ends.
pub mod state;

/// Simulation statistics collection and reporting.
///
/// Tracks cycle counts, retired instructions, stalls, taken branches, and
/// flushes during execution.
pub mod stats;
