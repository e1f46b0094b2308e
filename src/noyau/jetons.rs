// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurLexicale;
use super::reglages::{PolitiqueCaracteres, Reglages};

/// Les quatre opérateurs binaires (tous associatifs à gauche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Star | Self::Slash => 2,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
        }
    }

    /// a op b, en flottant brut (la politique de division est gérée par l'évaluateur).
    pub fn applique(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Minus => a - b,
            Self::Star => a * b,
            Self::Slash => a / b,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Jeton + position (indice de caractère) dans l'entrée.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Place {
    pub tok: Tok,
    pub position: usize,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.) : point décimal fixe, pas de locale
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés
///
/// Tout autre caractère est refusé (ou sauté si `PolitiqueCaracteres::Ignorer`).
pub fn tokenize(s: &str, reglages: &Reglages) -> Result<Vec<Place>, ErreurLexicale> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => Operateur::depuis_char(c).map(Tok::Op),
        };
        if let Some(tok) = tok {
            out.push(Place { tok, position: i });
            i += 1;
            continue;
        }

        // Nombre : plus longue suite de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let v = texte
                .parse::<f64>()
                .map_err(|_| ErreurLexicale::NombreInvalide {
                    texte: texte.clone(),
                    position: start,
                })?;

            out.push(Place {
                tok: Tok::Num(v),
                position: start,
            });
            continue;
        }

        match reglages.caracteres {
            PolitiqueCaracteres::Ignorer => i += 1,
            PolitiqueCaracteres::Rejeter => {
                return Err(ErreurLexicale::CaractereInattendu {
                    caractere: c,
                    position: i,
                })
            }
        }
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Place]) -> String {
    tokens
        .iter()
        .map(|p| match p.tok {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
