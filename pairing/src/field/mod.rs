//! Prime fields and the `Fp2` / `Fp6` / `Fp12` extension tower.

mod backend;
mod dbl;
mod fp;
mod fp12;
mod fp2;
mod fp6;
mod mont;

pub use self::{
    backend::{MAX_LIMBS, Mode},
    dbl::{Fp2Dbl, FpDbl},
    fp::{Fp, Fr},
    fp2::Fp2,
    fp6::Fp6,
    fp12::Fp12,
    mont::MontField,
};

pub(crate) use self::backend::Limbs;
