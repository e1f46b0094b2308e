// src/noyau/erreur.rs
//
// Erreurs du noyau : une famille par étape du pipeline.
// - Lexicale : caractère ou littéral numérique illisible
// - Syntaxe  : parenthèses déséquilibrées
// - Évaluation : pile insuffisante, reste != 1 valeur, division par zéro (mode strict)

use thiserror::Error;

use super::jetons::Operateur;

/// Erreur de lecture des caractères (jetons).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurLexicale {
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInattendu { caractere: char, position: usize },

    #[error("nombre invalide: '{texte}' (position {position})")]
    NombreInvalide { texte: String, position: usize },
}

/// Erreur de structure (parenthèses).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("parenthèse fermante sans ouvrante (position {position})")]
    ParentheseFermante { position: usize },

    #[error("parenthèses non fermées ({ouvertes} ouverte(s))")]
    ParentheseNonFermee { ouvertes: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Erreur {
    #[error(transparent)]
    Lexicale(#[from] ErreurLexicale),

    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error("pile insuffisante pour '{operateur}': 2 opérandes attendues, {disponibles} disponible(s)")]
    PileInsuffisante {
        operateur: Operateur,
        disponibles: usize,
    },

    #[error("expression invalide: {restants} valeur(s) restante(s) au lieu d'une")]
    ExpressionMalformee { restants: usize },

    #[error("division par zéro")]
    DivisionParZero,
}

/// Genre d'erreur, pour trier sans regarder le détail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Lexicale,
    Syntaxe,
    PileInsuffisante,
    ExpressionMalformee,
    DivisionParZero,
}

impl Erreur {
    pub fn genre(&self) -> GenreErreur {
        match self {
            Erreur::Lexicale(_) => GenreErreur::Lexicale,
            Erreur::Syntaxe(_) => GenreErreur::Syntaxe,
            Erreur::PileInsuffisante { .. } => GenreErreur::PileInsuffisante,
            Erreur::ExpressionMalformee { .. } => GenreErreur::ExpressionMalformee,
            Erreur::DivisionParZero => GenreErreur::DivisionParZero,
        }
    }
}
