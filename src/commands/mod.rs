//! One-shot subcommands. Each prints plain text to stdout and returns
//! errors to `main`, which reports them and exits non-zero.

pub mod alerts;
pub mod config;
pub mod jobs;
pub mod kpi;
pub mod schedule;
pub mod technicians;

pub const BULLET_GREEN: &str = "\x1b[32m●\x1b[0m";
pub const BULLET_YELLOW: &str = "\x1b[33m●\x1b[0m";
pub const BULLET_RED: &str = "\x1b[31m●\x1b[0m";
pub const BULLET_BLUE: &str = "\x1b[34m●\x1b[0m";

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
