//! Simulation statistics collection and reporting.
//!
//! Tracks cycle counts, retired instructions, stalls, taken branches, and
//! flushes during execution.

/// Counters accumulated while the pipeline runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimStats {
    /// Elapsed cycles.
    pub cycles: u64,
    /// Instructions that reached writeback.
    pub instructions_retired: u64,
    /// Cycles spent stalled on a data hazard.
    pub stall_cycles: u64,
    /// Taken branches.
    pub branch_count: u64,
    /// Pipeline flushes caused by taken branches.
    pub flush_count: u64,
}

impl SimStats {
    /// Prints a formatted summary of the run.
    pub fn print(&self) {
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let ipc = self.instructions_retired as f64 / cyc as f64;

        println!("==========================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", ipc);
        println!("------------------------------------------");
        println!(
            "stalls.data              {} ({:.2}%)",
            self.stall_cycles,
            (self.stall_cycles as f64 / cyc as f64) * 100.0
        );
        println!("branches.taken           {}", self.branch_count);
        println!("flushes                  {}", self.flush_count);
        println!("==========================================");
    }
}
