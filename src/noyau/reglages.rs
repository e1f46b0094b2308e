// src/noyau/reglages.rs
//
// Réglages du noyau : deux politiques explicites, rien d'autre.
// Copy + Default : chaque appel reçoit ses réglages, aucun état global.

/// Que faire d'une division dont le diviseur vaut 0 ?
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolitiqueDivision {
    /// Flottant IEEE-754 : 1/0 = ∞, -1/0 = -∞, 0/0 = NaN.
    #[default]
    Ieee754,
    /// Erreur::DivisionParZero.
    Erreur,
}

/// Que faire d'un caractère hors alphabet (chiffres, '.', + - * /, parenthèses) ?
/// Les espaces sont toujours ignorés.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolitiqueCaracteres {
    #[default]
    Rejeter,
    /// Compatibilité : on saute le caractère sans rien dire.
    Ignorer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub division: PolitiqueDivision,
    pub caracteres: PolitiqueCaracteres,
}

impl Reglages {
    /// Division par zéro = erreur, caractères inconnus rejetés.
    pub fn strict() -> Self {
        Self {
            division: PolitiqueDivision::Erreur,
            caracteres: PolitiqueCaracteres::Rejeter,
        }
    }
}
