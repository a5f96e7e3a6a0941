// src/main.rs
//
// Polynômes en X — démonstration (console)
// ----------------------------------------
// But:
// - construire les polynômes d'exemple
// - afficher rendu / évaluation / forme simplifiée
// - montrer qu'une division par zéro est rapportée sans arrêter la démo
//
// Journalisation : RUST_LOG (ex: RUST_LOG=trace pour voir les règles de simplify).
// Les tests de conformité passent par `cargo test`.

use num_bigint::BigInt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use polynome_x::Expr;

/// Point d'évaluation du polynôme mixte.
const X_MIXTE: i64 = 4;

/// Point d'évaluation du polynôme original.
const X_ORIGINAL: i64 = 2;

/// Point où le diviseur X - 2 s'annule.
const X_POLE: i64 = 2;

/// Filtre par défaut si RUST_LOG est absent.
const LOG_DEFAUT: &str = "warn";

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_DEFAUT));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

/* ------------------------ Polynômes d'exemple ------------------------ */

fn polynome_original() -> Expr {
    Expr::add(
        Expr::add(Expr::int(4), Expr::int(3)),
        Expr::add(
            Expr::x(),
            Expr::mul(
                Expr::int(1),
                Expr::add(Expr::mul(Expr::x(), Expr::x()), Expr::int(1)),
            ),
        ),
    )
}

fn polynome_mixte() -> Expr {
    Expr::int(2) * Expr::x() - Expr::int(1) + Expr::int(6) / Expr::int(2)
}

/* ------------------------ Scénarios ------------------------ */

/// Forme simplifiée + mention de la dépendance en X.
fn decrire_simplifie(p: &Expr) -> String {
    let s = p.clone().simplify();
    if s.contient_x() {
        format!("{s} (dépend de X)")
    } else if s.as_int().is_some() {
        format!("{s} (constante)")
    } else {
        format!("{s} (sans X, non réductible)")
    }
}

fn montrer_evaluation(nom: &str, p: &Expr, x: i64) {
    match p.evaluate(&BigInt::from(x)) {
        Ok(v) => println!("Évaluation de {nom} pour X={x} : {v}"),
        Err(e) => {
            warn!(polynome = %p, x, erreur = %e, "évaluation impossible");
            println!("Évaluation de {nom} pour X={x} : erreur ({e})");
        }
    }
}

fn main() {
    installer_journal();
    info!("démarrage de la démonstration");

    let poly = polynome_original();
    println!("Polynôme original : {poly}");

    println!();
    println!("--- Sub et Div ---");
    println!("Soustraction : {}", Expr::sub(Expr::int(10), Expr::int(3)));
    println!("Division : {}", Expr::div(Expr::int(15), Expr::int(3)));

    println!();
    println!("--- Évaluation ---");
    let mixte = polynome_mixte();
    println!("Polynôme de test : {mixte}");
    montrer_evaluation("le polynôme de test", &mixte, X_MIXTE);
    println!("Simplifié : {}", decrire_simplifie(&mixte));

    montrer_evaluation("le polynôme original", &poly, X_ORIGINAL);
    println!("Simplifié : {}", decrire_simplifie(&poly));

    println!();
    println!("--- Division par zéro ---");
    let pole = Expr::div(Expr::x(), Expr::sub(Expr::x(), Expr::int(2)));
    println!("Polynôme : {pole}");
    montrer_evaluation("le polynôme", &pole, X_POLE);
    println!("Simplifié (sans erreur) : {}", decrire_simplifie(&pole));
    let constante = Expr::div(Expr::int(15), Expr::int(0));
    println!("Simplifié (sans erreur) : {}", decrire_simplifie(&constante));

    println!();
    println!("Pour la suite de tests complète : cargo test");
}
