#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use ate_pairing::{CurveId, Mode, Pairing};
//!
//! let e = Pairing::new(CurveId::Fp254BNb, Mode::Auto)?;
//! let (p, q) = (e.g1_generator(), e.g2_generator());
//!
//! // e(2P, Q) = e(P, Q)^2
//! let lhs = e.pairing(&p.double(), &q);
//! let rhs = e.pairing(&p, &q).square();
//! assert_eq!(lhs, rhs);
//! # Ok::<(), ate_pairing::Error>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod field;

mod config;
mod curve_param;
mod error;
mod family;
mod group;
mod hash;
mod pairing;
mod params;

pub use crate::{
    config::{CurveConfig, TwistBType},
    curve_param::{CurveId, CurveParam, Family, Twist},
    error::{Error, Result},
    family::{Bls12Family, BnFamily, CurveFamily},
    field::{Fp, Fp2, Fp6, Fp12, Fr, Mode},
    group::{Ec, EcField, G1, G2},
    pairing::Pairing,
    params::CommonParams,
};
pub use rand_core;
pub use subtle;
pub use vint;
pub use zeroize;
