//! Result tables on stdout.
//!
//! Rows are printed as results stream in through [`ProgressReporter`]. Table
//! headers are printed lazily, so a `dns --check` run shows the status table
//! and then the speed table without the caller tracking phases.

use dns_unlocker_application::ports::ProgressReporter;
use dns_unlocker_domain::{BestServer, ProbeResult, SpeedResult, Throughput};
use std::io::IsTerminal;
use std::sync::{Mutex, MutexGuard};

const STATUS_RULE: &str = "+--------------------+------------+";
const SPEED_RULE: &str = "+--------------------+----------------+";

#[derive(Clone, Copy)]
struct Palette {
    green: &'static str,
    red: &'static str,
    reset: &'static str,
}

impl Palette {
    fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self {
                green: "\x1b[32m",
                red: "\x1b[31m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                green: "",
                red: "",
                reset: "",
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Status,
    Speed,
}

struct State {
    phase: Phase,
    reachable: usize,
}

pub struct TableRenderer {
    palette: Palette,
    target: String,
    timeout_secs: u64,
    reachable_file: String,
    state: Mutex<State>,
}

impl TableRenderer {
    pub fn new(target: &str, timeout_secs: u64, reachable_file: &str) -> Self {
        Self {
            palette: Palette::detect(),
            target: target.to_string(),
            timeout_secs,
            reachable_file: reachable_file.to_string(),
            state: Mutex::new(State {
                phase: Phase::Idle,
                reachable: 0,
            }),
        }
    }

    /// Closes whatever table is open.
    pub fn finish(&self) {
        let mut state = self.state();
        self.close(&mut state);
    }

    pub fn best(&self, best: Option<&BestServer>) {
        let p = self.palette;
        println!();
        match best {
            Some(best) => {
                let speed = Throughput::over(best.bytes_transferred, self.timeout_secs);
                println!(
                    "Best DNS: {}{}{} ({}{}{})",
                    p.green, best.server, p.reset, p.green, speed, p.reset
                );
            }
            None => println!("No DNS server was able to download any data."),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn close(&self, state: &mut State) {
        match state.phase {
            Phase::Idle => {}
            Phase::Status => {
                println!("{}", STATUS_RULE);
                if state.reachable > 0 {
                    println!(
                        "Cached {} valid DNS servers to {}",
                        state.reachable, self.reachable_file
                    );
                } else {
                    println!("No valid DNS servers found to cache.");
                }
            }
            Phase::Speed => println!("{}", SPEED_RULE),
        }
        state.phase = Phase::Idle;
    }
}

impl ProgressReporter for TableRenderer {
    fn probe_finished(&self, result: &ProbeResult) {
        let mut state = self.state();
        if state.phase != Phase::Status {
            self.close(&mut state);
            println!();
            println!("{}", STATUS_RULE);
            println!("| {:<18} | {:<10} |", "DNS Server", "Status");
            println!("{}", STATUS_RULE);
            state.phase = Phase::Status;
        }

        if result.is_reachable() {
            state.reachable += 1;
        }
        println!("{}", status_row(self.palette, result));
    }

    fn speed_measured(&self, result: &SpeedResult, throughput: Throughput) {
        let mut state = self.state();
        if state.phase != Phase::Speed {
            self.close(&mut state);
            println!();
            println!("Timeout: {} seconds", self.timeout_secs);
            println!("URL: {}", self.target);
            println!();
            println!("{}", SPEED_RULE);
            println!("| {:<18} | {:<14} |", "DNS Server", "Download Speed");
            println!("{}", SPEED_RULE);
            state.phase = Phase::Speed;
        }

        println!("{}", speed_row(self.palette, result, throughput));
    }
}

fn status_row(p: Palette, result: &ProbeResult) -> String {
    let color = if result.is_reachable() { p.green } else { p.red };
    format!(
        "| {:<18} | {}{:<10}{} |",
        result.server,
        color,
        result.outcome.label(),
        p.reset
    )
}

fn speed_row(p: Palette, result: &SpeedResult, throughput: Throughput) -> String {
    let speed = throughput.to_string();
    if result.bytes_transferred == 0 {
        format!("| {:<18} | {}{:<14}{} |", result.server, p.red, speed, p.reset)
    } else {
        format!("| {:<18} | {:<14} |", result.server, speed)
    }
}
