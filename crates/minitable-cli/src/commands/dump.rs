use std::path::PathBuf;

use minitable_layout::{Colors, MiniTable, dump};

use super::loader::{self, LoadError};

pub struct DumpArgs {
    pub table_path: PathBuf,
    pub pointer_width: Option<u32>,
    pub stride: Option<usize>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match render(&args) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn render(args: &DumpArgs) -> Result<String, LoadError> {
    let platform = loader::platform(args.pointer_width, args.stride)?;
    let bytes = loader::read_aligned(&args.table_path)?;
    let table = MiniTable::from_bytes(&bytes, platform)?;
    Ok(dump(&table, Colors::new(args.color)))
}
