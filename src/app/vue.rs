// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand un champ est focus)
// - Tactile : gros boutons, focus redonné au champ actif après clic (focus_entree)
// - Le pavé écrit dans le champ actif (a ou b)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;
use tracing::warn;

use fraction_qpur::noyau::{eval_operation, OPERATIONS};

use super::etat::{AppCalc, Champ};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Fractions Q-pur");
                ui.add_space(6.0);

                self.ui_entrees(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entrees(&mut self, ui: &mut egui::Ui) {
        self.ui_champ(ui, Champ::A, "a :", "Ex: 9/4, -1 1/2, 0.(3), 123.45'6'");

        ui.horizontal_wrapped(|ui| {
            ui.label("Opération :");
            for op in OPERATIONS {
                ui.selectable_value(&mut self.operation, op, op.symbole());
            }
        });

        self.ui_champ(ui, Champ::B, "b :", "Ex: 1/2 (vide avec mod : reste entier de a)");

        ui.add_space(6.0);

        // Actions + chiffres
        ui.horizontal(|ui| {
            // Contrat: C = champ actif ; CLR = résultats ; AC = tout
            self.bouton_action(ui, "C", "Efface le champ actif", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultats + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=200)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_champ(&mut self, ui: &mut egui::Ui, champ: Champ, titre: &str, aide: &str) {
        ui.label(titre);

        let texte = match champ {
            Champ::A => &mut self.a,
            Champ::B => &mut self.b,
        };
        // IMPORTANT : id stable par champ
        let resp = ui.add(
            egui::TextEdit::singleline(texte)
                .desired_width(ui.available_width())
                .hint_text(aide)
                .id_salt(titre)
                .code_editor(),
        );

        if resp.gained_focus() {
            self.champ = champ;
        }

        if self.focus_entree && self.champ == champ {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_qpur")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "/", "/");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "'", "'");
                self.bouton_insert(ui, "␠", " ");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, "-", "-");
                self.bouton_action(ui, "a|b", "Change de champ actif", Action::ChangeChamp);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        if self.sans_resultat {
            ui.monospace("pas de résultat rationnel exact");
            return;
        }
        let Some(r) = &self.rendu else {
            ui.monospace("(aucun résultat)");
            return;
        };

        egui::Grid::new("rendus_qpur")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for (titre, id, contenu) in [
                    ("Fraction", "rendu_fraction", &r.fraction),
                    ("Mixte", "rendu_mixte", &r.mixte),
                    ("LaTeX", "rendu_latex", &r.latex),
                    ("Décimal", "rendu_decimal", &r.decimal),
                    ("Approx.", "rendu_approx", &r.approx),
                    ("Fraction continue", "rendu_continue", &r.termes),
                    ("Simplifiée", "rendu_simplifie", &r.simplifie),
                ] {
                    ui.label(format!("{titre} :"));
                    Self::champ_monospace(ui, id, contenu, 1);
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        let Some(r) = &self.rendu else {
            return;
        };

        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &r.jetons);
                if let Some(cmp) = &r.comparaison {
                    Self::champ_demarche(ui, "Comparaison", "demarche_cmp", cmp);
                }
                if let Some(divisible) = r.divisible {
                    let texte = if divisible {
                        "a est un multiple de b"
                    } else {
                        "a n’est pas un multiple de b"
                    };
                    Self::champ_demarche(ui, "Divisibilité", "demarche_div", texte);
                }
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
                Action::Backspace => {
                    self.entree_active().pop();
                }
                Action::ChangeChamp => {
                    self.champ = match self.champ {
                        Champ::A => Champ::B,
                        Champ::B => Champ::A,
                    };
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree_active().push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Évalue `a op b` via le noyau, puis dépose les rendus dans l’état UI.
    fn eval_via_noyau(&mut self) {
        if self.a.trim().is_empty() {
            self.set_erreur("Entrée a vide");
            return;
        }

        match eval_operation(&self.a, self.operation, &self.b, self.digits) {
            Ok(rendu) => self.set_rendu(rendu),
            Err(e) => {
                warn!(
                    a = %self.a,
                    b = %self.b,
                    op = self.operation.symbole(),
                    erreur = %e,
                    "évaluation refusée"
                );
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
    ChangeChamp,
}
