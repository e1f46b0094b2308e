//! Noyau RPN
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées (lexique, syntaxe, pile, division)
//! - reglages.rs : politiques division par zéro / caractères inconnus
//! - jetons.rs   : tokenisation + opérateurs
//! - rpn.rs      : shunting-yard -> suite postfixée
//! - eval.rs     : machine à pile + pipeline complet
//! - format.rs   : affichage du résultat
//!
//! Aucun état partagé : chaque appel possède ses piles.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reglages;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::{Erreur, GenreErreur};
pub use eval::{eval_expression, eval_postfix, eval_postfix_avec, evaluate, evaluate_avec};
pub use reglages::{PolitiqueCaracteres, PolitiqueDivision, Reglages};
pub use rpn::{to_postfix, to_postfix_avec, Token};
