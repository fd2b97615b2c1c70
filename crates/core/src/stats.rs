//! Reporting: per-policy summaries and page-table dumps.
//!
//! Presentation layer only; nothing here affects policy decisions. The
//! report ranks selected policies by descending hit ratio (declaration
//! order on ties) and prints one summary line each. The page-table dump is
//! a four-row view of a frame table: slot index, held page (underscore for
//! an empty slot), the per-policy extra value, and the wall timestamp
//! modded down to something readable.

use crate::cache::Frame;
use crate::sim::{Engine, PolicyRun};

/// Modulus applied to wall timestamps in the dump, purely to keep the
/// columns narrow.
const TIME_DISPLAY_MOD: u64 = 200_000_000;

/// Width of the row labels in the dump.
const LABEL_WIDTH: usize = 12;

/// Width of one frame column in the dump.
const COL_WIDTH: usize = 9;

/// One summary line for a finished run.
pub fn summary(run: &PolicyRun) -> String {
    let state = &run.state;
    format!(
        "{} Algorithm\nFrames in Mem: {}, Hits: {}, Misses: {}, Hit Ratio: {:.6}, Total Execution Time: {:.6} seconds\n",
        run.label(),
        state.frames(),
        state.hits,
        state.misses,
        state.hit_ratio(),
        state.exec_time.as_secs_f64(),
    )
}

/// Four-row dump of a frame table.
pub fn page_table(frames: &[Frame]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<LABEL_WIDTH$} : ", "Frame #"));
    for frame in frames {
        out.push_str(&format!("{:>COL_WIDTH$}", frame.index));
    }
    out.push('\n');

    out.push_str(&format!("{:<LABEL_WIDTH$} : ", "Page Ref"));
    for frame in frames {
        if frame.is_empty() {
            out.push_str(&format!("{:>COL_WIDTH$}", "_"));
        } else {
            out.push_str(&format!("{:>COL_WIDTH$}", frame.page));
        }
    }
    out.push('\n');

    out.push_str(&format!("{:<LABEL_WIDTH$} : ", "Extra"));
    for frame in frames {
        out.push_str(&format!("{:>COL_WIDTH$}", frame.extra));
    }
    out.push('\n');

    out.push_str(&format!("{:<LABEL_WIDTH$} : ", "Time"));
    for frame in frames {
        out.push_str(&format!("{:>COL_WIDTH$}", frame.wall_time % TIME_DISPLAY_MOD));
    }
    out.push_str("\n\n");

    out
}

/// Prints the per-reference view of one run: summary plus table dump.
///
/// LFRU has no meaningful flat table, so its dump shows both partitions.
pub fn print_step(run: &PolicyRun) {
    print!("{}", summary(run));
    match &run.state.lfru {
        Some(pair) => {
            println!("Privileged:");
            print!("{}", page_table(pair.privileged.frames()));
            println!("Unprivileged:");
            print!("{}", page_table(pair.unprivileged.frames()));
        }
        None => print!("{}", page_table(&run.state.table)),
    }
}

/// Prints the final report: the LFRU adjustment note when present, then
/// one summary per selected run in descending hit-ratio order.
pub fn print_report(engine: &Engine) {
    if let Some(raised_to) = engine.adjusted_frames() {
        println!(
            "[!] LFRU needs at least its combined partition capacity; frames raised to {}",
            raised_to
        );
    }
    for run in engine.ranked() {
        print!("{}", summary(run));
    }
}
