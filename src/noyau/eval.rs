//! Noyau — évaluation exacte en un point.
//!
//! X -> valeur donnée, puis réduction récursive (entiers non bornés).
//! Division : plancher (arrondi vers -∞), comme la division entière d'origine.
//! Seule erreur possible : diviseur évalué à 0.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use thiserror::Error;
use tracing::debug;

use super::expr::Expr;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("division par zéro")]
    DivisionByZero,
}

/// Division plancher : a / b arrondi vers -∞.
///
/// `/` sur BigInt tronque vers 0 ; on corrige d'une unité quand le reste
/// est non nul et que les signes diffèrent.
///
/// Précondition : b != 0 (les appelants le vérifient).
pub(crate) fn div_floor_bigint(a: &BigInt, b: &BigInt) -> BigInt {
    let q = a / b;
    let r = a % b;
    if !r.is_zero() && (r.is_negative() != b.is_negative()) {
        q - 1
    } else {
        q
    }
}

impl Expr {
    /// Évalue l'expression pour X = `x`.
    ///
    /// Échoue (sans résultat partiel) dès qu'un diviseur vaut 0.
    pub fn evaluate(&self, x: &BigInt) -> Result<BigInt, ErreurEval> {
        use Expr::*;

        match self {
            X => Ok(x.clone()),
            Int(v) => Ok(v.clone()),

            Add(a, b) => Ok(a.evaluate(x)? + b.evaluate(x)?),
            Sub(a, b) => Ok(a.evaluate(x)? - b.evaluate(x)?),
            Mul(a, b) => Ok(a.evaluate(x)? * b.evaluate(x)?),

            Div(a, b) => {
                let va = a.evaluate(x)?;
                let vb = b.evaluate(x)?;
                if vb.is_zero() {
                    debug!(%x, numerateur = %va, "evaluate: division par zéro");
                    return Err(ErreurEval::DivisionByZero);
                }
                Ok(div_floor_bigint(&va, &vb))
            }
        }
    }

    /// Raccourci pour un point entier machine.
    pub fn evaluate_i64(&self, x: i64) -> Result<BigInt, ErreurEval> {
        self.evaluate(&BigInt::from(x))
    }
}
