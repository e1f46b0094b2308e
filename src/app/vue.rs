// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;
use log::{debug, info, warn};

use calculatrice_rpn::noyau::format::DIGITS_MAX;
use calculatrice_rpn::noyau::{eval_expression, PolitiqueCaracteres, PolitiqueDivision};

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+(-5)*(7-8), (2+3)*4, -5+3")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / DEL / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + précision
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(4.0);
        self.ui_reglages(ui);

        ui.add_space(8.0);

        // Touches rapides + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            self.bouton_insert(ui, "+", InsertKind::Op);
            self.bouton_insert(ui, "-", InsertKind::Op);
            self.bouton_insert(ui, "*", InsertKind::Op);
            self.bouton_insert(ui, "/", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let mut stricte = self.reglages.division == PolitiqueDivision::Erreur;
            if ui
                .checkbox(&mut stricte, "Division par zéro = erreur")
                .on_hover_text("Sinon : IEEE-754 (1/0 = ∞, 0/0 = indéfini)")
                .changed()
            {
                self.reglages.division = if stricte {
                    PolitiqueDivision::Erreur
                } else {
                    PolitiqueDivision::Ieee754
                };
                self.focus_entree = true;
            }

            let mut ignorer = self.reglages.caracteres == PolitiqueCaracteres::Ignorer;
            if ui
                .checkbox(&mut ignorer, "Ignorer les caractères inconnus")
                .on_hover_text("Sinon : tout caractère hors 0-9 . + - * / ( ) est refusé")
                .changed()
            {
                self.reglages.caracteres = if ignorer {
                    PolitiqueCaracteres::Ignorer
                } else {
                    PolitiqueCaracteres::Rejeter
                };
                self.focus_entree = true;
            }
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                self.bouton_insert(ui, "/", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                self.bouton_insert(ui, "*", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", InsertKind::Digit);
                self.bouton_insert(ui, "-", InsertKind::Op);
                self.bouton_insert(ui, "+", InsertKind::Op);
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.insere(symbole, kind);
        }
    }

    /// Backspace : retire le dernier symbole et les espaces ajoutés autour des opérateurs.
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    /// Insertion d’un symbole depuis un bouton, avec espacement lisible “a + b”.
    fn insere(&mut self, symbole: &str, kind: InsertKind) {
        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(symbole);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if let Some(c) = last {
                    if c.is_ascii_digit() || c == ')' {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(symbole);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                // pas d’espace après '(' : "(-5" reste lisible comme un moins unaire
                if !self.entree.is_empty() && !self.entree.ends_with('(') {
                    self.entree.push(' ');
                }
                self.entree.push_str(symbole);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(symbole);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();
        self.focus_entree = true;

        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        info!("évaluation de {s:?} ({:?})", self.reglages);

        match eval_expression(&s, &self.reglages) {
            Ok(ev) => {
                debug!("jetons: {} | rpn: {} | valeur: {}", ev.jetons, ev.rpn, ev.valeur);
                self.set_resultat(
                    ev.valeur,
                    Demarche {
                        jetons: ev.jetons,
                        rpn: ev.rpn,
                    },
                );
            }
            Err(e) => {
                warn!("échec de l’évaluation de {s:?}: {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
