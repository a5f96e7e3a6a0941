// src/noyau/format.rs
//
// Rendu infixe lisible ("4 + 3 + X + 1 * ( X * X + 1 )").
//
// Les parenthèses dépendent seulement du genre de l'enfant immédiat,
// pas d'un calcul de précédence :
//   Mul : enfant Add                    -> ( ... )
//   Sub : gauche Add, droite Add | Sub  -> ( ... )
//   Div : gauche Add | Sub, droite idem -> ( ... )
//   Add : jamais
// Ne pas "corriger" cette table : la sortie doit rester stable.

use std::fmt;

use super::expr::Expr;

fn est_add(e: &Expr) -> bool {
    matches!(e, Expr::Add(_, _))
}

fn est_add_ou_sub(e: &Expr) -> bool {
    matches!(e, Expr::Add(_, _) | Expr::Sub(_, _))
}

fn ecrire_enfant(out: &mut String, e: &Expr, entre_parentheses: bool) {
    if entre_parentheses {
        out.push_str("( ");
        ecrire(out, e);
        out.push_str(" )");
    } else {
        ecrire(out, e);
    }
}

fn ecrire_binaire(out: &mut String, a: &Expr, op: &str, b: &Expr, par_a: bool, par_b: bool) {
    ecrire_enfant(out, a, par_a);
    out.push(' ');
    out.push_str(op);
    out.push(' ');
    ecrire_enfant(out, b, par_b);
}

fn ecrire(out: &mut String, e: &Expr) {
    use Expr::*;

    match e {
        X => out.push('X'),
        Int(v) => out.push_str(&v.to_str_radix(10)),

        Add(a, b) => ecrire_binaire(out, a, "+", b, false, false),
        Mul(a, b) => ecrire_binaire(out, a, "*", b, est_add(a), est_add(b)),
        Sub(a, b) => ecrire_binaire(out, a, "-", b, est_add(a), est_add_ou_sub(b)),
        Div(a, b) => ecrire_binaire(out, a, "/", b, est_add_ou_sub(a), est_add_ou_sub(b)),
    }
}

/// Rendu texte d'une expression (un seul buffer pour tout l'arbre).
pub fn format_expr(e: &Expr) -> String {
    let mut out = String::new();
    ecrire(&mut out, e);
    out
}

impl Expr {
    pub fn render(&self) -> String {
        format_expr(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_expr(self))
    }
}
