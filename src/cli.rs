// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::{Params, ParticipationOrder};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let summary = crate::runner::run(&params)?;
    println!("Reference edition: {}", summary.reference_edition);
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-e" | "--edition" => {
                let v: u32 = args.next().ok_or("Missing value for --edition")?.parse()?;
                if v == 0 { return Err("Edition must be at least 1".into()); }
                params.edition = Some(v); }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output directory")?)),
            "--flags" => params.flags_file = Some(PathBuf::from(args.next().ok_or("Missing value for --flags")?)),
            "--by-name" => params.order = ParticipationOrder::ByName,
            "--unbounded-last" => params.bounded_last = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
