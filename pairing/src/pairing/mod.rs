//! Optimal ate pairing engine.

mod compress;
pub(crate) mod final_exp;
pub(crate) mod line;
mod miller;
mod sparse;

use crate::family::CurveFamily;
use crate::field::{Fp, Fp2, Fr, Limbs, Mode};
use crate::group::{G1, G2};
use crate::{CommonParams, CurveConfig, CurveId, CurveParam, Error, Result, hash};
use rand_core::RngCore;

/// A selected curve together with everything derived from it.
///
/// Construction derives `p` and `r`, builds the field contexts and tower
/// constants and finds the canonical generators. The engine is immutable
/// afterwards; elements and points borrow it and it may be shared between
/// threads.
#[derive(Clone, Debug)]
pub struct Pairing {
    curve: Option<CurveId>,
    param: CurveParam,
    params: CommonParams,
    family: &'static dyn CurveFamily,
    cfg: CurveConfig,
    g1: [Limbs; 2],
    g2: [[Limbs; 2]; 2],
}

impl Pairing {
    /// Selects a built-in curve.
    pub fn new(curve: CurveId, mode: Mode) -> Result<Self> {
        Self::with_param(curve.param(), mode)
    }

    /// Selects a curve from raw parameters. Parameters equal to a built-in
    /// curve are recognized as that curve.
    pub fn with_param(param: CurveParam, mode: Mode) -> Result<Self> {
        let curve = CurveId::ALL.into_iter().find(|c| c.param() == param);
        let params = CommonParams::new(&param)?;
        let cfg = CurveConfig::new(
            &params.p,
            &params.r,
            param.b,
            param.xi_a,
            param.twist,
            mode,
        )?;

        let (g1, g2) = {
            let cfg = &cfg;
            let g1 = hash::map_to_g1_with(cfg, &Fp::one(cfg), &params.g1_cofactor);
            let g2 = hash::map_to_g2_with(cfg, &Fp2::one(cfg), &params.g2_cofactor);
            let (g1, g2) = match (g1.to_affine(), g2.to_affine()) {
                (Some(g1), Some(g2)) => (g1, g2),
                _ => return Err(Error::InvalidParameter("generator is the identity")),
            };
            ([g1.0.v, g1.1.v], [g2.0.to_raw(), g2.1.to_raw()])
        };

        log::debug!(
            "selected curve {}: {}-bit p, {}-bit r, {} loop digits (naf: {}), {:?} twist, {} backend",
            curve.map_or("custom", CurveId::name),
            params.p.bit_len(),
            params.r.bit_len(),
            params.si.len(),
            params.use_naf,
            param.twist,
            cfg.fp().backend_name(),
        );

        Ok(Self {
            curve,
            param,
            family: param.family.strategy(),
            params,
            cfg,
            g1,
            g2,
        })
    }

    /// Built-in curve identifier, if the parameters match one.
    pub fn curve(&self) -> Option<CurveId> {
        self.curve
    }

    /// Parameters the engine was built from.
    pub fn param(&self) -> &CurveParam {
        &self.param
    }

    /// Derived integer parameters.
    pub fn params(&self) -> &CommonParams {
        &self.params
    }

    /// Field contexts and tower constants.
    pub fn config(&self) -> &CurveConfig {
        &self.cfg
    }

    /// Family strategy.
    pub fn family(&self) -> &'static dyn CurveFamily {
        self.family
    }

    /// Limb backend selection mode.
    pub fn mode(&self) -> Mode {
        self.cfg.fp().mode()
    }

    /// Canonical G1 generator, the image of `1` under [`Pairing::map_to_g1`].
    pub fn g1_generator(&self) -> G1<'_> {
        let cfg = &self.cfg;
        G1::new_unchecked(
            Fp::from_raw(cfg, self.g1[0]),
            Fp::from_raw(cfg, self.g1[1]),
            Fp::one(cfg),
        )
    }

    /// Canonical G2 generator, the image of `1` under [`Pairing::map_to_g2`].
    pub fn g2_generator(&self) -> G2<'_> {
        let cfg = &self.cfg;
        G2::new_unchecked(
            Fp2::from_raw(cfg, &self.g2[0]),
            Fp2::from_raw(cfg, &self.g2[1]),
            Fp2::one(cfg),
        )
    }

    /// Uniformly random scalar modulo `r`.
    pub fn random_scalar<R: RngCore + ?Sized>(&self, rng: &mut R) -> Fr<'_> {
        Fr::random(self.cfg.fr(), rng)
    }
}
