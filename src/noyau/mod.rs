//! Noyau exact — polynômes en X à coefficients entiers
//!
//! Organisation interne :
//! - expr.rs     : AST exact + construction + simplify
//! - format.rs   : rendu infixe (parenthèses par genre d'enfant)
//! - eval.rs     : évaluation en un point (division plancher, erreur typée)

pub mod eval;
pub mod expr;
pub mod format;


#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use eval::ErreurEval;
pub use expr::Expr;
pub use format::format_expr;
