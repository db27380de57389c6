mod cli;
mod commands;

use cli::{DumpParams, InspectParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("inspect", m)) => {
            let params = InspectParams::from_matches(m);
            commands::inspect::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
