//! Tests scientifiques (campagne) : scénarios + invariants + limites contrôlées.
//!
//! - scénarios de référence (précédence, parenthèses, moins unaire)
//! - politique division par zéro : la même pour TOUS les cas x/0
//! - parenthèses déséquilibrées : toujours une erreur de syntaxe, jamais un nombre
//! - stress borné : sommes longues, imbrication profonde (algorithme itératif, pas de récursion)
//! - appels concurrents : aucun état partagé

use std::time::{Duration, Instant};

use super::erreur::{Erreur, ErreurSyntaxe, GenreErreur};
use super::{eval_postfix, evaluate, evaluate_avec, to_postfix, Reglages};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert_eq!(v, attendu, "expr={expr:?}");
}

fn assert_genre(expr: &str, attendu: GenreErreur) {
    match evaluate(expr) {
        Ok(v) => panic!("expr={expr:?} devait échouer ({attendu:?}), obtenu {v}"),
        Err(e) => assert_eq!(e.genre(), attendu, "expr={expr:?} err={e}"),
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn sci_scenarios() {
    assert_val("2+3*4", 14.0);
    assert_val("(2+3)*4", 20.0);
    assert_val("2+(-5)*(7-8)", 7.0);
    assert_val("-5+3", -2.0);
}

#[test]
fn sci_moins_unaire_lie_comme_zero_moins() {
    // "-x" devient "0 - x" : le reste de l'expression garde la précédence normale
    assert_val("-5*2", -10.0);
    assert_val("-2-3", -5.0);
    assert_val("(-(-4))", 4.0);
    assert_val("3*(-2)", -6.0);
}

#[test]
fn sci_espaces_toleres() {
    assert_val(" 2 + 3 * 4 ", 14.0);
    assert_val("( - 5 ) * 2", -10.0);
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn sci_division_ieee_coherente() {
    for expr in ["10/0", "1/(3-3)", "2.5/0.0", "(1+1)/(0*7)"] {
        let v = eval_ok(expr);
        assert!(v.is_infinite() && v > 0.0, "expr={expr:?} v={v}");
    }
    assert!(eval_ok("-1/0").is_infinite());
    assert!(eval_ok("(0-1)/0") < 0.0);
    assert!(eval_ok("0/0").is_nan());
}

#[test]
fn sci_division_stricte_coherente() {
    let r = Reglages::strict();
    for expr in ["10/0", "1/(3-3)", "2.5/0.0", "(1+1)/(0*7)", "-1/0", "0/0"] {
        assert_eq!(
            evaluate_avec(expr, &r),
            Err(Erreur::DivisionParZero),
            "expr={expr:?}"
        );
    }
    // le reste ne change pas
    assert_eq!(evaluate_avec("2+3*4", &r), Ok(14.0));
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn sci_parentheses_desequilibrees() {
    for expr in ["(1+2", "1+2)", "((1+2)", ")(", "(", ")", "2*(3+(4-1)"] {
        assert_genre(expr, GenreErreur::Syntaxe);
    }
}

#[test]
fn sci_fermante_position_exacte() {
    assert_eq!(
        evaluate("(1)+2)"),
        Err(Erreur::Syntaxe(ErreurSyntaxe::ParentheseFermante {
            position: 5
        }))
    );
}

/* ------------------------ Entrées mal formées ------------------------ */

#[test]
fn sci_entrees_mal_formees() {
    assert_genre("", GenreErreur::ExpressionMalformee);
    assert_genre("4 5", GenreErreur::ExpressionMalformee);
    assert_genre("(1)(2)", GenreErreur::ExpressionMalformee);
    assert_genre("1+", GenreErreur::PileInsuffisante);
    assert_genre("*3", GenreErreur::PileInsuffisante);
    assert_genre("1..5", GenreErreur::Lexicale);
    assert_genre("2 x 3", GenreErreur::Lexicale);
}

/* ------------------------ Aller-retour + idempotence ------------------------ */

#[test]
fn sci_aller_retour_et_idempotence() {
    for expr in [
        "2+3*4",
        "(2+3)*4",
        "2+(-5)*(7-8)",
        "1/3+1/3+1/3",
        "0.1+0.2",
        "-(2.5*4)/(1-3)",
    ] {
        let direct = eval_ok(expr);
        let rpn = to_postfix(expr).unwrap();
        let via_rpn = eval_postfix(&rpn).unwrap();
        assert_eq!(direct.to_bits(), via_rpn.to_bits(), "expr={expr:?}");
        assert_eq!(direct.to_bits(), eval_ok(expr).to_bits(), "expr={expr:?}");
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = vec!["1"; 10_000].join("+");
    budget(t0, max);

    assert_val(&expr, 10_000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 5000 niveaux : ((((...(-1)...)))) ; pile Vec, aucune récursion
    let n = 5_000;
    let expr = format!("{}-1{}", "(".repeat(n), ")".repeat(n));
    assert_val(&expr, -1.0);
    budget(t0, max);

    let bancal = format!("{}1{}", "(".repeat(n), ")".repeat(n - 1));
    assert_eq!(
        evaluate(&bancal),
        Err(Erreur::Syntaxe(ErreurSyntaxe::ParentheseNonFermee {
            ouvertes: 1
        }))
    );
    budget(t0, max);
}

/* ------------------------ Concurrence ------------------------ */

#[test]
fn sci_appels_concurrents() {
    let exprs = ["2+3*4", "(2+3)*4", "2+(-5)*(7-8)", "-5+3", "7/2"];
    let attendus: Vec<u64> = exprs.iter().map(|e| eval_ok(e).to_bits()).collect();

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..200 {
                    for (e, a) in exprs.iter().zip(&attendus) {
                        assert_eq!(eval_ok(e).to_bits(), *a, "expr={e:?}");
                    }
                }
            });
        }
    });
}
