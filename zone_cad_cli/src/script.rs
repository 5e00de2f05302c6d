//! Line-based edit scripts.
//!
//! ```text
//! # comment
//! add x y z [radius] [--defer]
//! remove x y z [radius] [--defer]
//! recompute
//! contains x y z
//! ```

use std::io::{self, Write};

use zone_cad::{BoundarySink, Point3, RenderHints, ZoneEditor};

/// One editing step.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add {
        center: Point3,
        radius: Option<f64>,
        defer: bool,
    },
    Remove {
        center: Point3,
        radius: Option<f64>,
        defer: bool,
    },
    Recompute,
    Contains(Point3),
}

fn invalid(line: usize, msg: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", line, msg))
}

fn parse_number(value: &str, line: usize) -> io::Result<f64> {
    value.parse::<f64>().map_err(|e| invalid(line, e))
}

fn parse_point(args: &[&str], line: usize) -> io::Result<Point3> {
    if args.len() < 3 {
        return Err(invalid(line, "expected x y z"));
    }
    Ok(Point3::new(
        parse_number(args[0], line)?,
        parse_number(args[1], line)?,
        parse_number(args[2], line)?,
    ))
}

fn parse_area(args: &[&str], line: usize) -> io::Result<(Point3, Option<f64>, bool)> {
    let defer = args.last() == Some(&"--defer");
    let args = if defer { &args[..args.len() - 1] } else { args };
    let center = parse_point(args, line)?;
    let radius = match args.len() {
        3 => None,
        4 => Some(parse_number(args[3], line)?),
        _ => return Err(invalid(line, "expected x y z [radius] [--defer]")),
    };
    Ok((center, radius, defer))
}

/// Parses a script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> io::Result<Vec<Op>> {
    let mut ops = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let words: Vec<&str> = content.split_whitespace().collect();
        let (cmd, args) = (words[0], &words[1..]);
        let op = match cmd.to_ascii_lowercase().as_str() {
            "add" => {
                let (center, radius, defer) = parse_area(args, line)?;
                Op::Add {
                    center,
                    radius,
                    defer,
                }
            }
            "remove" => {
                let (center, radius, defer) = parse_area(args, line)?;
                Op::Remove {
                    center,
                    radius,
                    defer,
                }
            }
            "recompute" if args.is_empty() => Op::Recompute,
            "contains" if args.len() == 3 => Op::Contains(parse_point(args, line)?),
            _ => return Err(invalid(line, format!("unrecognized command `{}`", content))),
        };
        ops.push(op);
    }
    Ok(ops)
}

/// Prints a line whenever the editor publishes a new boundary.
pub struct RevisionPrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> RevisionPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn finish(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> BoundarySink for RevisionPrinter<W> {
    fn boundary_changed(&mut self, hints: &RenderHints<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(
            self.out,
            "revision {}: {} vertices",
            hints.revision,
            hints.points.len()
        ) {
            self.error = Some(e);
        }
    }
}

/// Applies `ops` to `editor`, writing `contains` answers and boundary
/// revisions to `out`.
pub fn run<W: Write>(editor: &mut ZoneEditor, ops: &[Op], out: W) -> io::Result<()> {
    let mut printer = RevisionPrinter::new(out);
    // the initial empty boundary is not interesting
    editor.publish_to(&mut NullSink);
    for op in ops {
        match *op {
            Op::Add {
                center,
                radius,
                defer,
            } => {
                let r = radius.unwrap_or(editor.config().default_radius);
                editor.add_area(center, r, !defer);
            }
            Op::Remove {
                center,
                radius,
                defer,
            } => {
                let r = radius.unwrap_or(editor.config().default_radius);
                editor.remove_area(center, r, !defer);
            }
            Op::Recompute => editor.recompute(),
            Op::Contains(p) => {
                let answer = if editor.contains(p) { "inside" } else { "outside" };
                writeln!(printer.out, "{}", answer)?;
            }
        }
        editor.publish_to(&mut printer);
        printer.finish()?;
    }
    Ok(())
}

struct NullSink;

impl BoundarySink for NullSink {
    fn boundary_changed(&mut self, _hints: &RenderHints<'_>) {}
}
