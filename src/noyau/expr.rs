// src/noyau/expr.rs
//
// AST exact d'un polynôme en X (coefficients entiers, sans flottants).
// - X   : la variable libre
// - Int : entier exact (BigInt, pas de dépassement)
// - Add / Sub / Mul / Div : noeuds binaires, enfants possédés (arbre strict)
//
// IMPORTANT (SAFE):
// - simplify() ne modifie rien en place : il consomme et reconstruit.
// - simplify() ne doit jamais échouer, même sur une division par 0 littérale
//   (l'erreur est laissée à evaluate()).

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::trace;

use std::ops;

use super::eval::div_floor_bigint;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    X,
    Int(BigInt),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

/* ------------------------ Construction ------------------------ */

impl Expr {
    pub fn x() -> Expr {
        Expr::X
    }

    pub fn int(v: impl Into<BigInt>) -> Expr {
        Expr::Int(v.into())
    }

    pub fn add(a: Expr, b: Expr) -> Expr {
        Expr::Add(Box::new(a), Box::new(b))
    }

    pub fn sub(a: Expr, b: Expr) -> Expr {
        Expr::Sub(Box::new(a), Box::new(b))
    }

    pub fn mul(a: Expr, b: Expr) -> Expr {
        Expr::Mul(Box::new(a), Box::new(b))
    }

    pub fn div(a: Expr, b: Expr) -> Expr {
        Expr::Div(Box::new(a), Box::new(b))
    }

    /// Valeur du littéral, si ce noeud en est un.
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Expr::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Détecte si X apparaît dans l'arbre.
    /// Itératif : pas de récursion sur la pile d'appel.
    pub fn contient_x(&self) -> bool {
        use Expr::*;

        let mut pile: Vec<&Expr> = Vec::with_capacity(16);
        pile.push(self);

        while let Some(e) = pile.pop() {
            match e {
                X => return true,
                Int(_) => {}
                Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) => {
                    pile.push(a.as_ref());
                    pile.push(b.as_ref());
                }
            }
        }

        false
    }
}

/* ------------------------ Simplification ------------------------ */

fn est_zero(e: &Expr) -> bool {
    e.as_int().is_some_and(|v| v.is_zero())
}

fn est_un(e: &Expr) -> bool {
    e.as_int().is_some_and(|v| v.is_one())
}

fn regle(nom: &'static str, noeud: &'static str) {
    trace!(regle = nom, noeud, "simplify: règle appliquée");
}

impl Expr {
    /// Simplification locale, de bas en haut.
    ///
    /// Les enfants sont simplifiés d'abord ; les règles du noeud courant
    /// ne regardent que les enfants déjà simplifiés.
    pub fn simplify(self) -> Expr {
        use Expr::*;

        match self {
            // Feuilles: rien à faire
            X | Int(_) => self,

            Add(a, b) => {
                let a = a.simplify();
                let b = b.simplify();

                if est_zero(&a) {
                    regle("0 + e => e", "Add");
                    return b;
                }
                if est_zero(&b) {
                    regle("e + 0 => e", "Add");
                    return a;
                }
                match (a.as_int(), b.as_int()) {
                    (Some(x), Some(y)) => {
                        regle("pliage constant", "Add");
                        Int(x + y)
                    }
                    _ => Add(Box::new(a), Box::new(b)),
                }
            }

            Mul(a, b) => {
                let a = a.simplify();
                let b = b.simplify();

                if est_zero(&a) || est_zero(&b) {
                    regle("0 * e => 0", "Mul");
                    return Int(BigInt::zero());
                }
                if est_un(&a) {
                    regle("1 * e => e", "Mul");
                    return b;
                }
                if est_un(&b) {
                    regle("e * 1 => e", "Mul");
                    return a;
                }
                match (a.as_int(), b.as_int()) {
                    (Some(x), Some(y)) => {
                        regle("pliage constant", "Mul");
                        Int(x * y)
                    }
                    _ => Mul(Box::new(a), Box::new(b)),
                }
            }

            Sub(a, b) => {
                let a = a.simplify();
                let b = b.simplify();

                // pas de règle 0 - e => -e : pas de noeud de négation
                if est_zero(&b) {
                    regle("e - 0 => e", "Sub");
                    return a;
                }
                match (a.as_int(), b.as_int()) {
                    (Some(x), Some(y)) => {
                        regle("pliage constant", "Sub");
                        Int(x - y)
                    }
                    _ => Sub(Box::new(a), Box::new(b)),
                }
            }

            Div(a, b) => {
                let a = a.simplify();
                let b = b.simplify();

                if est_un(&b) {
                    regle("e / 1 => e", "Div");
                    return a;
                }
                match (a.as_int(), b.as_int()) {
                    // division par zéro : on garde symbolique ici (evaluate gérera l'erreur)
                    (Some(x), Some(y)) if !y.is_zero() => {
                        regle("pliage constant (division plancher)", "Div");
                        Int(div_floor_bigint(x, y))
                    }
                    _ => Div(Box::new(a), Box::new(b)),
                }
            }
        }
    }
}

/* ------------------------ Opérateurs (construction seulement) ------------------------ */

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::add(self, rhs)
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::sub(self, rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::mul(self, rhs)
    }
}

impl ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::div(self, rhs)
    }
}
