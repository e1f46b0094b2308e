//! Calculatrice RPN : compilateur d’expressions arithmétiques.
//!
//! `evaluate("2+(-5)*(7-8)")` passe par deux étapes indépendantes :
//! - `to_postfix` : tokenisation + shunting-yard -> suite postfixée (RPN)
//! - `eval_postfix` : machine à pile -> `f64`
//!
//! Le noyau est pur : pas d’I/O, pas de journalisation, pas d’état global.

pub mod noyau;

pub use noyau::{
    eval_postfix, evaluate, evaluate_avec, to_postfix, Erreur, GenreErreur, Reglages, Token,
};
