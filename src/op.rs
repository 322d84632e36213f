use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::format::Hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Rem,
    Div,
    Shr,
    Shl,
    BitAnd,
    BitOr,
    BitXor,
}

/// Inclusive range `[2^lo, 2^hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    pub lo: u32,
    pub hi: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhsRange {
    /// Big operand drawn from `[2^lo, 2^hi]`.
    Wide(BitRange),
    /// Shift count drawn from `[lo, hi]` directly.
    Shift { lo: u32, hi: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub op: Op,
    pub file_name: &'static str,
    pub lhs: BitRange,
    pub rhs: RhsRange,
    /// Operands are swapped when needed so that `lhs >= rhs`.
    pub ordered: bool,
}

const fn bits(lo: u32, hi: u32) -> BitRange {
    BitRange { lo, hi }
}

const fn wide(lo: u32, hi: u32) -> RhsRange {
    RhsRange::Wide(BitRange { lo, hi })
}

macro_rules! descriptor {
    ($op:ident, $file:literal, $lhs:expr, $rhs:expr) => {
        descriptor!($op, $file, $lhs, $rhs, false)
    };
    ($op:ident, $file:literal, $lhs:expr, $rhs:expr, $ordered:expr) => {
        Descriptor {
            op: Op::$op,
            file_name: $file,
            lhs: $lhs,
            rhs: $rhs,
            ordered: $ordered,
        }
    };
}

/// All operations, in the order the driver runs them.
pub static DESCRIPTORS: [Descriptor; 10] = [
    descriptor!(Div, "division.data", bits(255, 511), wide(20, 511)),
    descriptor!(Rem, "remainder.data", bits(255, 511), wide(20, 511)),
    descriptor!(Mul, "multiplication.data", bits(100, 254), wide(100, 254)),
    descriptor!(Add, "addition.data", bits(255, 511), wide(255, 511)),
    descriptor!(Sub, "subtraction.data", bits(255, 511), wide(255, 511), true),
    descriptor!(Shr, "shift_right.data", bits(255, 511), RhsRange::Shift { lo: 0, hi: 255 }),
    descriptor!(Shl, "shift_left.data", bits(4, 200), RhsRange::Shift { lo: 0, hi: 312 }),
    descriptor!(BitAnd, "bit_and.data", bits(255, 511), wide(255, 511)),
    descriptor!(BitOr, "bit_or.data", bits(255, 511), wide(255, 511)),
    descriptor!(BitXor, "bit_xor.data", bits(255, 511), wide(255, 511)),
];

/// Second operand of a vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Wide(BigUint),
    Shift(u32),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Wide(n) => fmt::Display::fmt(&Hex(n), f),
            Operand::Shift(count) => write!(f, "{count}"),
        }
    }
}

impl Op {
    pub const ALL: [Op; 10] = [
        Op::Div,
        Op::Rem,
        Op::Mul,
        Op::Add,
        Op::Sub,
        Op::Shr,
        Op::Shl,
        Op::BitAnd,
        Op::BitOr,
        Op::BitXor,
    ];

    pub fn descriptor(self) -> &'static Descriptor {
        DESCRIPTORS
            .iter()
            .find(|d| d.op == self)
            .unwrap_or_else(|| unreachable!("every op has a descriptor"))
    }

    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Rem => "rem",
            Op::Div => "div",
            Op::Shr => "shr",
            Op::Shl => "shl",
            Op::BitAnd => "and",
            Op::BitOr => "or",
            Op::BitXor => "xor",
        }
    }

    pub fn is_shift(self) -> bool {
        matches!(self, Op::Shr | Op::Shl)
    }

    /// Exact result of `lhs <op> rhs`, with no fixed width.
    pub fn apply(self, lhs: &BigUint, rhs: &Operand) -> Result<BigUint> {
        let r = match (self, rhs) {
            (Op::Shl, Operand::Shift(count)) => lhs << *count,
            (Op::Shr, Operand::Shift(count)) => lhs >> *count,
            (_, Operand::Shift(_)) => return Err(Error::OperandMismatch { op: self }),
            (Op::Shl | Op::Shr, Operand::Wide(_)) => {
                return Err(Error::OperandMismatch { op: self })
            }

            (Op::Add, Operand::Wide(rhs)) => lhs + rhs,
            (Op::Sub, Operand::Wide(rhs)) => {
                if lhs < rhs {
                    return Err(Error::NegativeDifference);
                }
                lhs - rhs
            }
            (Op::Mul, Operand::Wide(rhs)) => lhs * rhs,
            (Op::Div | Op::Rem, Operand::Wide(rhs)) if rhs.is_zero() => {
                return Err(Error::DivisionByZero)
            }
            (Op::Div, Operand::Wide(rhs)) => lhs / rhs,
            (Op::Rem, Operand::Wide(rhs)) => lhs % rhs,
            (Op::BitAnd, Operand::Wide(rhs)) => lhs & rhs,
            (Op::BitOr, Operand::Wide(rhs)) => lhs | rhs,
            (Op::BitXor, Operand::Wide(rhs)) => lhs ^ rhs,
        };

        Ok(r)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Op {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Op::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOp(s.to_owned()))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Op {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Op::ALL).unwrap()
    }
}
