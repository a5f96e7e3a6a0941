//! Polynômes en X — représentation exacte, rendu, évaluation, simplification.
//!
//! ```
//! use num_bigint::BigInt;
//! use polynome_x::Expr;
//!
//! let p = Expr::int(2) * Expr::x() - Expr::int(1) + Expr::int(6) / Expr::int(2);
//! assert_eq!(p.render(), "2 * X - 1 + 6 / 2");
//! assert_eq!(p.evaluate_i64(4).unwrap(), BigInt::from(10));
//! assert_eq!(p.simplify().render(), "2 * X - 1 + 3");
//! ```

pub mod noyau;

pub use noyau::{format_expr, ErreurEval, Expr};
