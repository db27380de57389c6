//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("minitable")
        .about("Inspect upb-style descriptor tables and the messages they describe")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(inspect_command())
}

/// Print a descriptor table.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print one line per descriptor of a table file")
        .after_help(
            r#"EXAMPLES:
  minitable dump person.table
  minitable dump person.table --pointer-width 32
  minitable dump padded.table --stride 16"#,
        )
        .arg(table_path_arg())
        .arg(pointer_width_arg())
        .arg(stride_arg())
        .arg(color_arg())
}

/// Read every scalar field of a message.
pub fn inspect_command() -> Command {
    Command::new("inspect")
        .about("Print the scalar fields of a message as JSON")
        .after_help(
            r#"EXAMPLES:
  minitable inspect person.table person.msg
  minitable inspect person.table person.msg --segment 0x7f0000001000=strings.bin
  minitable inspect person.table person.msg --trace -v
  minitable inspect person.table person.msg --compact --check"#,
        )
        .arg(table_path_arg())
        .arg(message_path_arg())
        .arg(segment_arg())
        .arg(pointer_width_arg())
        .arg(stride_arg())
        .arg(trace_arg())
        .arg(verbose_arg())
        .arg(compact_arg())
        .arg(check_arg())
        .arg(color_arg())
}
