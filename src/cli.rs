// src/cli.rs
use std::{env, error::Error, path::PathBuf, process};

use crate::config::options::{Mode, Params};

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    crate::runner::run(&params)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-f" | "--filename" => {
                params.filename = args.next().ok_or("Missing value for --filename")?;}
            "-v" | "--verbosity" => {
                let v: u8 = args.next().ok_or("Missing value for --verbosity")?.parse()?;
                if !(1..=3).contains(&v) {
                    return Err("option -v requires a number between 1 and 3".into());
                }
                params.verbosity = v; }
            "-s" | "--save" => params.save = true,
            "-o" | "--outputfile" => {
                params.save = true;                 // explicit path implies save
                params.outputfile =
                    Some(PathBuf::from(args.next().ok_or("Missing output path")?));}
            "--sp" => {
                params.mode =
                    Mode::LookupPlayer(args.next().ok_or("Missing player name for --sp")?);}
            "--sd" => {
                params.mode =
                    Mode::LookupDefense(args.next().ok_or("Missing team name for --sd")?);}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
