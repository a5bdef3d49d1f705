//! Rendering analysis results
//!
//! The analysis itself never prints; a [`Reporter`] decides what the caller
//! sees and where it goes.

use crate::{algebra::Element, core::Analysis, Result};
use serde::Serialize;
use std::io::Write;

const SECTION_MARKER: &str = "---------------------------------------------------";

/// Consumer of a finished analysis
pub trait Reporter<T> {
    /// Emit the analysis
    fn report(&mut self, analysis: &Analysis<T>) -> Result<()>;
}

/// Plain-text report in three sections: basic properties, special
/// elements, classification.
pub struct TextReporter<W> {
    out: W,
    show_inverses: bool,
}

impl<W: Write> TextReporter<W> {
    /// Report into `out`
    pub fn new(out: W) -> Self {
        TextReporter {
            out,
            show_inverses: true,
        }
    }

    /// Toggle the per-element inverse listing
    pub fn with_inverses(mut self, show: bool) -> Self {
        self.show_inverses = show;
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn verdict(&mut self, name: &str, holds: bool) -> Result<()> {
        let word = if holds { "satisfied" } else { "not satisfied" };
        writeln!(self.out, "{}: {}", name, word)?;
        Ok(())
    }

    fn inverse_line<T: Element>(
        &mut self,
        side: &str,
        element: &T,
        found: &Option<Vec<T>>,
    ) -> Result<()> {
        match found {
            None => writeln!(self.out, "{} has no {} inverse", element, side)?,
            Some(values) => {
                let listed: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                writeln!(
                    self.out,
                    "{} inverse of {}: {}",
                    capitalize(side),
                    element,
                    listed.join(" ")
                )?;
            }
        }
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<T: Element, W: Write> Reporter<T> for TextReporter<W> {
    fn report(&mut self, a: &Analysis<T>) -> Result<()> {
        writeln!(self.out, "For this algebraic system:")?;
        self.verdict("Closure", a.closure)?;
        self.verdict("Commutativity", a.commutative)?;
        self.verdict("Associativity", a.associative)?;
        self.verdict("Idempotence", a.idempotent)?;

        writeln!(self.out, "{}", SECTION_MARKER)?;

        match &a.identity {
            Some(e) => writeln!(self.out, "Identity element exists: {}", e)?,
            None => writeln!(self.out, "Identity element does not exist")?,
        }
        let zero = if a.has_zero { "exists" } else { "does not exist" };
        writeln!(self.out, "Zero element {}", zero)?;

        if self.show_inverses {
            for inv in &a.inverses {
                self.inverse_line("left", &inv.element, &inv.left)?;
                self.inverse_line("right", &inv.element, &inv.right)?;
            }
        }

        writeln!(self.out, "{}", SECTION_MARKER)?;

        let lines = [
            (
                a.groupoid,
                "Is a groupoid: the operation is closed",
                "Not a groupoid: the operation is not closed",
            ),
            (
                a.semigroup,
                "Is a semigroup: a groupoid with an associative operation",
                "Not a semigroup: requires a groupoid with an associative operation",
            ),
            (
                a.monoid,
                "Is a monoid: a semigroup with an identity element",
                "Not a monoid: requires a semigroup with an identity element",
            ),
            (
                a.group,
                "Is a group: a monoid in which every element has a unique inverse",
                "Not a group: requires a monoid in which every element has a unique inverse",
            ),
        ];
        for (holds, yes, no) in lines {
            writeln!(self.out, "{}", if holds { yes } else { no })?;
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON document of the whole analysis
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Report into `out`
    pub fn new(out: W) -> Self {
        JsonReporter { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<T: Element + Serialize, W: Write> Reporter<T> for JsonReporter<W> {
    fn report(&mut self, analysis: &Analysis<T>) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, analysis)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
