use std::fmt;
use std::io::Write;

use num_bigint::BigUint;
use rand::Rng;

use crate::error::Result;
use crate::format::{is_truncated, Hex};
use crate::op::{Descriptor, Op, Operand};
use crate::sample::sample_pair;

/// One `(lhs, rhs, result)` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    pub lhs: BigUint,
    pub rhs: Operand,
    pub result: BigUint,
}

impl Vector {
    pub fn compute(op: Op, lhs: BigUint, rhs: Operand) -> Result<Self> {
        let result = op.apply(&lhs, &rhs)?;
        Ok(Vector { lhs, rhs, result })
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R, desc: &Descriptor) -> Result<Self> {
        let (lhs, rhs) = sample_pair(rng, desc)?;
        Self::compute(desc.op, lhs, rhs)
    }

    /// Whether any hex field of this vector loses digits when written.
    pub fn is_truncated(&self) -> bool {
        let rhs = match &self.rhs {
            Operand::Wide(n) => is_truncated(n),
            Operand::Shift(_) => false,
        };

        rhs || is_truncated(&self.lhs) || is_truncated(&self.result)
    }
}

/// `lhs<TAB>rhs<TAB>result`, without the line terminator.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", Hex(&self.lhs), self.rhs, Hex(&self.result))
    }
}

/// Generates `count` vectors for `desc` and writes one per line to `out`.
///
/// Stops at the first failed write.
pub fn write_vectors<R, W>(
    rng: &mut R,
    desc: &Descriptor,
    count: usize,
    mut out: W,
) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    for _ in 0..count {
        let vector = Vector::generate(rng, desc)?;

        if vector.is_truncated() {
            tracing::warn!(op = %desc.op, "vector field exceeds 128 hex digits, truncating");
        }

        writeln!(out, "{vector}")?;
    }

    out.flush()?;
    Ok(())
}
