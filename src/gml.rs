// src/gml.rs
use std::io::{self, Write};

use crate::model::{Attrs, Value};

/* ---------------- Options ---------------- */

/// How `Value::Null` attributes are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NullPolicy {
    /// `key ""`
    #[default]
    EmptyString,
    /// Key left out of the block.
    Omit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GmlOptions {
    pub nulls: NullPolicy,
    /// Write `&` and `"` in strings as `&amp;` / `&quot;`. Off by default:
    /// strings go out verbatim.
    pub escape_entities: bool,
}

/* ---------------- Writing ---------------- */

/// Escape the two characters GML readers unescape as HTML entities.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('"', "&quot;")
}

fn write_value<W: Write>(w: &mut W, key: &str, value: &Value, opts: &GmlOptions) -> io::Result<()> {
    match value {
        Value::Str(s) if opts.escape_entities => write!(w, "\n\t {key} \"{}\"", escape(s)),
        Value::Str(s) => write!(w, "\n\t {key} \"{s}\""),
        Value::Int(i) => write!(w, "\n\t {key} {i}"),
        Value::Bool(b) => write!(w, "\n\t {key} \"{}\"", if *b { "True" } else { "False" }),
        Value::Null => match opts.nulls {
            NullPolicy::EmptyString => write!(w, "\n\t {key} \"\""),
            NullPolicy::Omit => Ok(()),
        },
    }
}

fn write_block<W: Write>(w: &mut W, kind: &str, attrs: &Attrs, opts: &GmlOptions) -> io::Result<()> {
    write!(w, "\n\t{kind}[")?;
    for (key, value) in attrs.iter() {
        write_value(w, key, value, opts)?;
    }
    write!(w, "\n\t]")
}

/// Stream a directed multigraph to any writer. Nodes first, then edges,
/// each block keeping its attribute order.
pub fn write_gml<W: Write>(mut w: W, nodes: &[Attrs], edges: &[Attrs], opts: &GmlOptions) -> io::Result<()> {
    write!(w, "graph[\n\tmultigraph 1\n\tdirected 1")?;
    for node in nodes {
        write_block(&mut w, "node", node, opts)?;
    }
    for edge in edges {
        write_block(&mut w, "edge", edge, opts)?;
    }
    write!(w, "\n]")?;
    w.flush()
}

/// Encode with default options.
pub fn encode(nodes: &[Attrs], edges: &[Attrs]) -> String {
    encode_with(nodes, edges, &GmlOptions::default())
}

pub fn encode_with(nodes: &[Attrs], edges: &[Attrs], opts: &GmlOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_gml(&mut buf, nodes, edges, opts);
    String::from_utf8_lossy(&buf).into_owned()
}
