//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, digits, réglages, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - digits borné par DIGITS_MAX.

use calculatrice_rpn::noyau::format::{format_nombre, DIGITS_DEFAUT, DIGITS_MAX};
use calculatrice_rpn::noyau::Reglages;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // valeur formatée (digits)
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)
    valeur: Option<f64>,  // dernière valeur brute, pour reformater si digits change

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec(Reglages::default(), DIGITS_DEFAUT)
    }
}

impl AppCalc {
    /// État initial avec réglages choisis (ligne de commande).
    pub fn avec(reglages: Reglages, digits: usize) -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            valeur: None,
            demarche: Demarche::default(),
            digits: digits.min(DIGITS_MAX),
            reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.valeur = None;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (elle décrirait une évaluation qui n’a pas abouti).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.valeur = Some(valeur);
        self.resultat = format_nombre(valeur, self.digits);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite digits, et reformate le résultat affiché.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        if let Some(v) = self.valeur {
            self.resultat = format_nombre(v, self.digits);
        }
        self.focus_entree = true;
    }
}
