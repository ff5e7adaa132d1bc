use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("cannot compute composition of an empty sequence")]
    EmptySequence,
}

/// Base counts of a generated sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionStats {
    pub count_a: usize,
    pub count_c: usize,
    pub count_g: usize,
    pub count_t: usize,
    pub total: usize,
}

impl CompositionStats {
    /// Count bases in `bases`, which must be the undecorated sequence.
    ///
    /// `total` is the full length, so any symbol outside A/C/G/T would lower
    /// every percentage rather than being ignored.
    pub fn from_bases(bases: &str) -> Result<Self, CompositionError> {
        if bases.is_empty() {
            return Err(CompositionError::EmptySequence);
        }

        let mut stats = Self {
            count_a: 0,
            count_c: 0,
            count_g: 0,
            count_t: 0,
            total: bases.chars().count(),
        };
        for c in bases.chars() {
            match c {
                'A' => stats.count_a += 1,
                'C' => stats.count_c += 1,
                'G' => stats.count_g += 1,
                'T' => stats.count_t += 1,
                _ => {}
            }
        }
        Ok(stats)
    }

    fn percent(&self, count: usize) -> f64 {
        count as f64 / self.total as f64 * 100.0
    }

    pub fn percent_a(&self) -> f64 {
        self.percent(self.count_a)
    }

    pub fn percent_c(&self) -> f64 {
        self.percent(self.count_c)
    }

    pub fn percent_g(&self) -> f64 {
        self.percent(self.count_g)
    }

    pub fn percent_t(&self) -> f64 {
        self.percent(self.count_t)
    }

    pub fn percent_gc(&self) -> f64 {
        self.percent(self.count_c + self.count_g)
    }
}

impl std::fmt::Display for CompositionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "A: {:.1}%", self.percent_a())?;
        writeln!(f, "C: {:.1}%", self.percent_c())?;
        writeln!(f, "G: {:.1}%", self.percent_g())?;
        writeln!(f, "T: {:.1}%", self.percent_t())?;
        write!(f, "%GC: {:.1}%", self.percent_gc())
    }
}
