//! office: small evacuation scenario for the evac simulator.
//!
//! A 20×20 open-plan floor with two exits on adjacent walls, ten occupants,
//! three seed fires and five obstacles.  Writes per-step CSV output and a
//! JSON run summary to the directory given as the first argument
//! (default `./output`).
//!
//! Set `RUST_LOG=evac_sim=debug` to see individual escapes and deaths.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use serde_json::json;
use tracing::info;

use evac_behavior::PanicTieredPolicy;
use evac_core::{Cell, SimConfig, Timestep};
use evac_output::{CsvWriter, SimOutputObserver};
use evac_output::writer::OutputWriter;
use evac_sim::{SimBuilder, SimObserver, StepSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_WIDTH:     i32   = 20;
const GRID_HEIGHT:    i32   = 20;
const PERSON_COUNT:   usize = 10;
const FIRE_COUNT:     usize = 3;
const OBSTACLE_COUNT: usize = 5;
const STEPS:          u64   = 10;
const SEED:           u64   = 42;

// ── Observer wrapper to echo progress ────────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summaries:     Vec<StepSummary>,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summaries: Vec::new() }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_step_end(&mut self, summary: &StepSummary) {
        println!(
            "{:<6} {:>8} {:>6} {:>8} {:>6} {:>12}",
            summary.timestep.0,
            summary.escaped_total,
            summary.dead_total,
            summary.living,
            summary.fires,
            summary.bottlenecks,
        );
        self.summaries.push(*summary);
        self.inner.on_step_end(summary);
    }

    fn on_snapshot(
        &mut self,
        timestep: Timestep,
        persons:  &[evac_agent::Person],
        world:    &evac_world::World,
    ) {
        self.snapshot_rows += persons.len();
        self.inner.on_snapshot(timestep, persons, world);
    }

    fn on_sim_end(&mut self, final_timestep: Timestep) {
        self.inner.on_sim_end(final_timestep);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output"));

    println!("=== office: crowd evacuation ===");
    println!(
        "Grid: {GRID_WIDTH}x{GRID_HEIGHT}  |  Persons: {PERSON_COUNT}  |  Fires: {FIRE_COUNT}  \
         |  Obstacles: {OBSTACLE_COUNT}  |  Seed: {SEED}"
    );
    println!();

    // 1. Config.
    let exits = vec![Cell::new(10, 0), Cell::new(0, 10)];
    let config = SimConfig::new(GRID_WIDTH, GRID_HEIGHT, PERSON_COUNT, FIRE_COUNT, OBSTACLE_COUNT, exits)
        .with_seed(SEED)
        .with_max_steps(STEPS);

    // 2. Build sim.
    let mut sim = SimBuilder::new(config.clone(), PanicTieredPolicy).build()?;
    info!(out_dir = %out_dir.display(), "writing output");

    // 3. Output.
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    println!(
        "{:<6} {:>8} {:>6} {:>8} {:>6} {:>12}",
        "Step", "Escaped", "Dead", "Inside", "Fires", "Bottlenecks"
    );
    println!("{}", "-".repeat(51));
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  person_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  step_summaries.csv   : {} rows", obs.summaries.len());

    let stats = sim.escape_stats();
    if let Some(s) = &stats {
        println!(
            "  escape time          : mean {:.2}, min {}, max {}",
            s.mean, s.min, s.max
        );
    }

    let summary = json!({
        "config":           config,
        "steps":            sim.timestep().0,
        "escaped":          sim.escaped_total(),
        "dead":             sim.dead_total(),
        "inside":           sim.persons().len(),
        "fires":            sim.world().fire_count(),
        "escaped_counts":   sim.escaped_counts(),
        "death_counts":     sim.death_counts(),
        "bottleneck_areas": sim.bottleneck_areas(),
        "escape_time": stats.map(|s| json!({
            "count": s.count,
            "mean":  s.mean,
            "min":   s.min.0,
            "max":   s.max.0,
        })),
    });
    let summary_path = out_dir.join("summary.json");
    std::fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  summary.json         : {}", summary_path.display());

    Ok(())
}
