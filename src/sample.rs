use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;

use crate::error::{Error, Result};
use crate::op::{BitRange, Descriptor, Operand, RhsRange};

/// Uniform draw from `[2^lo, 2^hi]`.
pub fn sample_bits<R: Rng + ?Sized>(rng: &mut R, range: &BitRange) -> Result<BigUint> {
    let BitRange { lo, hi } = *range;
    if lo > hi {
        return Err(Error::InvalidRange { lo, hi });
    }

    let low = BigUint::one() << lo;
    // gen_biguint_range excludes its upper bound.
    let high = (BigUint::one() << hi) + 1_u32;

    Ok(rng.gen_biguint_range(&low, &high))
}

/// Uniform draw from `[lo, hi]`.
pub fn sample_shift<R: Rng + ?Sized>(rng: &mut R, lo: u32, hi: u32) -> Result<u32> {
    if lo > hi {
        return Err(Error::InvalidRange { lo, hi });
    }

    Ok(rng.gen_range(lo..=hi))
}

pub fn sample_rhs<R: Rng + ?Sized>(rng: &mut R, range: &RhsRange) -> Result<Operand> {
    match range {
        RhsRange::Wide(bits) => sample_bits(rng, bits).map(Operand::Wide),
        RhsRange::Shift { lo, hi } => sample_shift(rng, *lo, *hi).map(Operand::Shift),
    }
}

/// Draws one operand pair for `desc`, swapping it if the descriptor
/// requires `lhs >= rhs`.
pub fn sample_pair<R: Rng + ?Sized>(
    rng: &mut R,
    desc: &Descriptor,
) -> Result<(BigUint, Operand)> {
    let lhs = sample_bits(rng, &desc.lhs)?;
    let rhs = sample_rhs(rng, &desc.rhs)?;

    let pair = match rhs {
        Operand::Wide(rhs) if desc.ordered && lhs < rhs => (rhs, Operand::Wide(lhs)),
        rhs => (lhs, rhs),
    };

    Ok(pair)
}
