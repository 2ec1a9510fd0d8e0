// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path command - cheapest flight between two airports
//!
//! Without `--from`/`--to` this runs an interactive session that keeps
//! asking for airport pairs. Naming an unknown departure airport ends the
//! session normally; an unknown arrival airport is reported as an error.
//!
//! A one-shot query has no session to end, so an unknown airport on either
//! side is an error.

use crate::config::Config;
use crate::graph::RouteGraph;
use crate::types::{Path, Vertex};
use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the path command
pub fn run(config: &Config, from: Option<String>, to: Option<String>) -> Result<()> {
    let graph = super::load_graph(config)?;
    let mut stdout = std::io::stdout().lock();

    match (from, to) {
        (Some(from), Some(to)) => {
            let from = Vertex::new(from);
            let to = Vertex::new(to);
            if !graph.contains(&from) {
                bail!("no such airport for departure: {from}");
            }
            if !graph.contains(&to) {
                bail!("no such airport for arrival: {to}");
            }
            writeln!(stdout, "{}", describe(&graph, &from, &to)?)?;
            Ok(())
        }
        (None, None) => {
            let stdin = std::io::stdin().lock();
            session(&graph, stdin, &mut stdout)
        }
        _ => bail!("--from and --to must be given together"),
    }
}

/// Prompt for airport pairs until input ends or an unknown departure is named
pub fn session<R: BufRead, W: Write>(graph: &RouteGraph, mut input: R, out: &mut W) -> Result<()> {
    loop {
        let Some(from) = prompt(&mut input, out, "Start airport? ")? else {
            return Ok(());
        };
        if !graph.contains(&from) {
            writeln!(out, "no such airport for departure")?;
            return Ok(());
        }

        let Some(to) = prompt(&mut input, out, "Destination airport? ")? else {
            return Ok(());
        };
        if !graph.contains(&to) {
            writeln!(out, "no such airport for arrival")?;
            bail!("no such airport for arrival: {to}");
        }

        writeln!(out, "{}", describe(graph, &from, &to)?)?;
    }
}

/// Answer a single query as a sentence
pub fn describe(graph: &RouteGraph, from: &Vertex, to: &Vertex) -> Result<String> {
    let answer = match graph.shortest_path(from, to)? {
        Some(path) => sentence(&path),
        None => format!("No path from {from} to {to} exists."),
    };
    debug!(%from, %to, "{answer}");
    Ok(answer)
}

fn sentence(path: &Path) -> String {
    let stops: Vec<&str> = path.vertices().iter().map(Vertex::name).collect();
    format!(
        "The cheapest flight from {} costs ${}.",
        stops.join(" to "),
        path.cost()
    )
}

/// Print `question`, read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<Option<Vertex>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(Vertex::new(line.trim_end_matches(['\r', '\n']))))
}
