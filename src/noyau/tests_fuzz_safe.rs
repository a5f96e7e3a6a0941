//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! Arbres aléatoires (graine fixe, profondeur bornée) passés à
//! simplify / evaluate / render. Seule erreur admise : division par zéro.
//! Invariants vérifiés :
//! - simplify(simplify(e)) == simplify(e)
//! - evaluate(simplify(e), x) == evaluate(e, x) quand evaluate(e, x) réussit
//! - simplify ne panique jamais, même avec des diviseurs nuls
//!
//! Pas de chrono : on borne le travail en nombre de noeuds générés.

use num_bigint::BigInt;

use super::{ErreurEval, Expr};

/* ------------------------ Générateur d'arbres (graine fixe) ------------------------ */

/// Générateur congruentiel + constructeur d'arbres.
/// Compte les noeuds produits pour borner le travail total.
struct Generateur {
    graine: u64,
    noeuds: usize,
}

impl Generateur {
    fn new(graine: u64) -> Self {
        Self { graine, noeuds: 0 }
    }

    fn tirer(&mut self, n: u32) -> u32 {
        self.graine = self
            .graine
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.graine >> 33) as u32) % n.max(1)
    }

    fn feuille(&mut self) -> Expr {
        self.noeuds += 1;
        // 0 et 1 sur-représentés : ce sont eux qui déclenchent les règles
        match self.tirer(10) {
            0..=2 => Expr::x(),
            3 | 4 => Expr::int(0),
            5 | 6 => Expr::int(1),
            _ => Expr::int(self.tirer(15) as i64 - 7),
        }
    }

    fn arbre(&mut self, profondeur: usize) -> Expr {
        if profondeur == 0 {
            return self.feuille();
        }
        let genre = self.tirer(6);
        if genre == 0 {
            return self.feuille();
        }
        self.noeuds += 1;
        let a = self.arbre(profondeur - 1);
        let b = self.arbre(profondeur - 1);
        match genre {
            1 => Expr::add(a, b),
            2 => Expr::sub(a, b),
            3 => Expr::mul(a, b),
            _ => Expr::div(a, b),
        }
    }
}

/// Borne haute du travail : nombre d'arbres × taille max d'un arbre complet.
fn noeuds_max(arbres: usize, profondeur: usize) -> usize {
    arbres * ((1usize << (profondeur + 1)) - 1)
}

const POINTS: [i64; 7] = [-5, -2, -1, 0, 1, 2, 7];

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: Expr, n: usize) -> Expr {
    let mut items: Vec<Expr> = (0..n).map(|_| terme.clone()).collect();
    while items.len() > 1 {
        let mut next = Vec::with_capacity(items.len() / 2 + 1);
        let mut it = items.into_iter();
        while let Some(a) = it.next() {
            match it.next() {
                Some(b) => next.push(Expr::add(a, b)),
                None => next.push(a),
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| Expr::int(0))
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_simplify_preserve_la_semantique() {
    let mut generateur = Generateur::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        let e = generateur.arbre(5);
        let s = e.clone().simplify();

        for p in POINTS {
            match e.evaluate_i64(p) {
                Ok(v) => {
                    assert_eq!(s.evaluate_i64(p), Ok(v), "e={e} s={s} x={p}");
                    seen_ok += 1;
                }
                Err(ErreurEval::DivisionByZero) => seen_err += 1,
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop “sage”");
    assert!(generateur.noeuds <= noeuds_max(300, 5));
}

#[test]
fn fuzz_safe_simplify_idempotent() {
    let mut generateur = Generateur::new(0xBADC0DE_u64);

    for _ in 0..300 {
        let e = generateur.arbre(6);
        let s1 = e.clone().simplify();
        let s2 = s1.clone().simplify();
        assert_eq!(s1, s2, "e={e}");
    }
    assert!(generateur.noeuds <= noeuds_max(300, 6));
}

#[test]
fn fuzz_safe_determinisme_rendu() {
    // Même seed => mêmes arbres => mêmes rendus
    let mut a = Generateur::new(42);
    let mut b = Generateur::new(42);

    for _ in 0..50 {
        let ea = a.arbre(4);
        let eb = b.arbre(4);
        assert_eq!(ea.render(), eb.render());
        assert_eq!(ea.clone().simplify().render(), eb.simplify().render());
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let e = somme_balancee(Expr::mul(Expr::int(1), Expr::x()), 800);

    assert_eq!(e.evaluate_i64(3), Ok(BigInt::from(2400)));

    let s = e.simplify();
    assert!(s.contient_x());
    assert_eq!(s.evaluate_i64(-1), Ok(BigInt::from(-800)));
}
