// src/cli.rs
//
// Ligne de commande (natif seulement).
// - `calculatrice_rpn "2+3*4"`  : évalue et affiche le résultat
// - `calculatrice_rpn --demo`   : évalue l’expression d’exemple intégrée
// - sans expression             : la calculatrice graphique s’ouvre (main.rs)

use std::io::{self, Write};

use clap::Parser;
use log::{debug, info, warn};

use calculatrice_rpn::noyau::format::{format_nombre, DIGITS_DEFAUT};
use calculatrice_rpn::noyau::{eval_expression, PolitiqueCaracteres, PolitiqueDivision, Reglages};

/// Expression d’exemple (mode --demo).
pub const EXEMPLE: &str = "2+(-5)*(7-8)";

/// Calculatrice RPN : convertit une expression infixe en notation polonaise
/// inversée, puis l’évalue avec une pile.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Expression à évaluer. Sans expression (ni --demo), la calculatrice
    /// graphique s’ouvre.
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Évalue l’expression d’exemple intégrée.
    #[arg(long, conflicts_with = "expression")]
    pub demo: bool,

    /// Affiche aussi les jetons et la suite RPN.
    #[arg(long)]
    pub rpn: bool,

    /// Une division par zéro devient une erreur (sinon : IEEE-754, 1/0 = ∞).
    #[arg(long)]
    pub division_stricte: bool,

    /// Saute les caractères inconnus au lieu de les refuser.
    #[arg(long)]
    pub ignorer_inconnus: bool,

    /// Nombre de décimales affichées.
    #[arg(short, long, default_value_t = DIGITS_DEFAUT)]
    pub digits: usize,
}

impl Args {
    pub fn reglages(&self) -> Reglages {
        Reglages {
            division: if self.division_stricte {
                PolitiqueDivision::Erreur
            } else {
                PolitiqueDivision::Ieee754
            },
            caracteres: if self.ignorer_inconnus {
                PolitiqueCaracteres::Ignorer
            } else {
                PolitiqueCaracteres::Rejeter
            },
        }
    }

    /// Expression à évaluer en mode texte, `None` => mode graphique.
    pub fn a_evaluer(&self) -> Option<&str> {
        if self.demo {
            Some(EXEMPLE)
        } else {
            self.expression.as_deref()
        }
    }
}

/// Évalue et écrit le résultat sur `out` (ou l’erreur sur `err`).
/// Renvoie `Ok(true)` si l’évaluation a réussi.
pub fn executer(
    args: &Args,
    expr: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let reglages = args.reglages();
    info!("évaluation de {expr:?} ({reglages:?})");

    if args.demo {
        writeln!(out, "Exemple d'expression : {expr}")?;
    }

    match eval_expression(expr, &reglages) {
        Ok(ev) => {
            debug!("jetons: {} | rpn: {}", ev.jetons, ev.rpn);
            if args.rpn {
                writeln!(out, "Jetons : {}", ev.jetons)?;
                writeln!(out, "RPN : {}", ev.rpn)?;
            }
            writeln!(out, "Résultat : {}", format_nombre(ev.valeur, args.digits))?;
            Ok(true)
        }
        Err(e) => {
            warn!("échec de l’évaluation de {expr:?}: {e}");
            writeln!(err, "Erreur : {e}")?;
            Ok(false)
        }
    }
}
