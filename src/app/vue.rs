// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Pavé de touches seulement : chaque bouton appelle une action de etat.rs.
// Écran : description (au-dessus) + saisie/résultat (en dessous).

use eframe::egui;

use super::etat::{AppCalc, VARIABLE_MEMOIRE};

const TAILLE_TOUCHE: [f32; 2] = [56.0, 36.0];

// Lignes du pavé scientifique (symboles envoyés tels quels au cerveau).
const FONCTIONS: [[&str; 4]; 4] = [
    ["sin", "cos", "tan", "π"],
    ["sinh", "cosh", "tanh", "e"],
    ["ln", "log₁₀", "1/⒳", "±"],
    ["⒳²", "⒳³", "√", "∛"],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_fonctions(ui);
        ui.add_space(6.0);
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.monospace(self.description.as_str());
                    ui.label(
                        egui::RichText::new(self.saisie.texte.as_str())
                            .monospace()
                            .size(28.0),
                    );
                });
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_fonctions")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in FONCTIONS {
                    for symbole in ligne {
                        self.bouton(ui, symbole, Touche::Operation(symbole));
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", Touche::ToutEffacer);
                self.bouton(ui, "C", Touche::Purger);
                self.bouton(ui, "DEL", Touche::Effacer);
                self.bouton(ui, VARIABLE_MEMOIRE, Touche::Variable);
                self.bouton(ui, "→M", Touche::Memoriser);
                ui.end_row();

                for (chiffres, op) in [("789", "÷"), ("456", "✕"), ("123", "-")] {
                    for c in chiffres.chars() {
                        self.bouton(ui, &c.to_string(), Touche::Chiffre(c));
                    }
                    self.bouton(ui, op, Touche::Operation(op));
                    ui.label("");
                    ui.end_row();
                }

                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Operation("="));
                self.bouton(ui, "+", Touche::Operation("+"));
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.appuyer_chiffre(c),
            Touche::Point => self.appuyer_point(),
            Touche::Operation(s) => self.appuyer_operation(s),
            Touche::Variable => self.inserer_variable(),
            Touche::Memoriser => self.memoriser_variable(),
            Touche::Effacer => self.effacer_dernier(),
            Touche::Purger => self.purger(),
            Touche::ToutEffacer => self.tout_effacer(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Point,
    Operation(&'static str),
    Variable,
    Memoriser,
    Effacer,
    Purger,
    ToutEffacer,
}
