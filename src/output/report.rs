//! Terminal reports for statistics and pattern matches

use crate::tree::TreeStats;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print tree statistics as an aligned table
pub fn print_stats(stats: &TreeStats, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_stats(&mut out, stats)
}

pub fn write_stats<W: WriteColor>(out: &mut W, stats: &TreeStats) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "Suffix Tree Statistics")?;
    writeln!(out, "======================")?;
    out.reset()?;

    let rows = [
        ("Text length:", stats.text_len),
        ("Nodes:", stats.node_count),
        ("Internal nodes:", stats.internal_count),
        ("Leaves:", stats.leaf_count),
        ("Suffix links:", stats.suffix_link_count),
        ("Implicit suffixes:", stats.implicit_suffixes),
        ("Deepest internal:", stats.max_internal_depth),
    ];
    for (name, value) in rows {
        writeln!(out, "{:20}{}", name, value)?;
    }
    Ok(())
}

/// Print the offsets at which `pattern` occurs
pub fn print_matches(pattern: &[u8], offsets: &[usize], color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_matches(&mut out, pattern, offsets)
}

pub fn write_matches<W: WriteColor>(
    out: &mut W,
    pattern: &[u8],
    offsets: &[usize],
) -> io::Result<()> {
    let pattern = String::from_utf8_lossy(pattern);
    if offsets.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(out, "\"{}\" not found", pattern)?;
        out.reset()?;
        return Ok(());
    }

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "\"{}\"", pattern)?;
    out.reset()?;
    writeln!(
        out,
        " found {} time{}",
        offsets.len(),
        if offsets.len() == 1 { "" } else { "s" }
    )?;

    for offset in offsets {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "  {}", offset)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}
