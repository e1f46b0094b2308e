//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> machine à pile -> f64
//!
//! Remarque : l'évaluateur accepte n'importe quelle suite postfixée (pas seulement
//! celles produites par `to_rpn`), donc il vérifie lui-même la pile.

use super::erreur::Erreur;
use super::jetons::{format_tokens, tokenize, Operateur};
use super::reglages::{PolitiqueDivision, Reglages};
use super::rpn::{format_postfix, to_rpn, Token};

/// Résultat complet d'une évaluation : valeur + démarche (jetons, rpn).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression infixe, réglages par défaut
/// (division IEEE-754, caractères inconnus rejetés).
pub fn evaluate(expr: &str) -> Result<f64, Erreur> {
    evaluate_avec(expr, &Reglages::default())
}

pub fn evaluate_avec(expr: &str, reglages: &Reglages) -> Result<f64, Erreur> {
    let jetons = tokenize(expr, reglages)?;
    let rpn = to_rpn(&jetons)?;
    eval_postfix_avec(&rpn, reglages)
}

/// Comme `evaluate_avec`, mais garde la démarche pour l'affichage.
pub fn eval_expression(expr: &str, reglages: &Reglages) -> Result<Evaluation, Erreur> {
    let jetons = tokenize(expr, reglages)?;
    let rpn = to_rpn(&jetons)?;
    let valeur = eval_postfix_avec(&rpn, reglages)?;

    Ok(Evaluation {
        valeur,
        jetons: format_tokens(&jetons),
        rpn: format_postfix(&rpn),
    })
}

pub fn eval_postfix(tokens: &[Token]) -> Result<f64, Erreur> {
    eval_postfix_avec(tokens, &Reglages::default())
}

/// Machine à pile : un passage, gauche -> droite.
///
/// Pour un opérateur, le premier dépilé est l'opérande DROITE (b),
/// le second l'opérande GAUCHE (a) : on empile a op b.
pub fn eval_postfix_avec(tokens: &[Token], reglages: &Reglages) -> Result<f64, Erreur> {
    let mut st: Vec<f64> = Vec::with_capacity(tokens.len() / 2 + 1);

    for tok in tokens {
        match *tok {
            Token::Number(v) => st.push(v),

            Token::Operator(op) => {
                let disponibles = st.len();
                let (Some(b), Some(a)) = (st.pop(), st.pop()) else {
                    return Err(Erreur::PileInsuffisante {
                        operateur: op,
                        disponibles,
                    });
                };

                if op == Operateur::Slash
                    && b == 0.0
                    && reglages.division == PolitiqueDivision::Erreur
                {
                    return Err(Erreur::DivisionParZero);
                }

                st.push(op.applique(a, b));
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        reste => Err(Erreur::ExpressionMalformee {
            restants: reste.len(),
        }),
    }
}
