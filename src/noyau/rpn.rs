// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - précédence: * / = 2 ; + - = 1 ; tout est associatif à gauche (égalité => on dépile)
// - Moins unaire:
//    - si '-' est le premier jeton, ou suit directement '(', on injecte 0 : "-x" => "0 x -"
//    - ailleurs ("2*-3") le '-' reste binaire ; l'évaluateur signalera la pile insuffisante
// - parenthèses: jamais présentes dans la sortie (le type Token ne peut pas les porter)

use std::fmt;

use super::erreur::{Erreur, ErreurSyntaxe};
use super::jetons::{tokenize, Operateur, Place, Tok};
use super::reglages::Reglages;

/// Jeton de la suite postfixée.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operateur),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{v}"),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Élément de la pile d'opérateurs.
#[derive(Clone, Copy, Debug)]
enum Empile {
    Op(Operateur),
    LPar,
}

/// Convertit une expression infixe en RPN, réglages par défaut.
pub fn to_postfix(expr: &str) -> Result<Vec<Token>, Erreur> {
    to_postfix_avec(expr, &Reglages::default())
}

pub fn to_postfix_avec(expr: &str, reglages: &Reglages) -> Result<Vec<Token>, Erreur> {
    let jetons = tokenize(expr, reglages)?;
    Ok(to_rpn(&jetons)?)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [LPar, Minus, Num(5), RPar, Star, Num(2)]
///   rpn:    [0, 5, -, 2, *]
pub fn to_rpn(tokens: &[Place]) -> Result<Vec<Token>, ErreurSyntaxe> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len() + 1);
    let mut ops: Vec<Empile> = Vec::new();

    // vrai au début et juste après '(' : un '-' y est unaire
    let mut position_unaire = true;

    for place in tokens {
        match place.tok {
            Tok::Num(v) => {
                out.push(Token::Number(v));
                position_unaire = false;
            }

            Tok::LPar => {
                ops.push(Empile::LPar);
                position_unaire = true;
            }

            Tok::RPar => {
                // dépile jusqu'à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Empile::LPar) => break,
                        Some(Empile::Op(op)) => out.push(Token::Operator(op)),
                        None => {
                            return Err(ErreurSyntaxe::ParentheseFermante {
                                position: place.position,
                            })
                        }
                    }
                }
                position_unaire = false;
            }

            Tok::Op(op) => {
                if op == Operateur::Minus && position_unaire {
                    out.push(Token::Number(0.0));
                }

                while let Some(Empile::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Token::Operator(*top));
                    ops.pop();
                }

                ops.push(Empile::Op(op));
                position_unaire = false;
            }
        }
    }

    // vide la pile ops
    let ouvertes = ops.iter().filter(|e| matches!(e, Empile::LPar)).count();
    if ouvertes > 0 {
        return Err(ErreurSyntaxe::ParentheseNonFermee { ouvertes });
    }
    while let Some(Empile::Op(op)) = ops.pop() {
        out.push(Token::Operator(op));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : suite postfixée en texte.
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
