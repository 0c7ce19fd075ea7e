// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - deux lignes : entrée (haut), résultat (bas)
// - pavé 4 colonnes : AC C % / | 7 8 9 * | 4 5 6 - | 1 2 3 + | 0 . =
// - Démarche repliable (jetons / RPN / brut) pour le dernier calcul réussi

use calculatrice_decimale::Op;
use eframe::egui;

use super::etat::AppCalc;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Operateur(Op),
    Effacer,
    ToutEffacer,
    Egal,
}

impl Touche {
    fn libelle(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Operateur(op) => op.to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::ToutEffacer => "AC".to_string(),
            Touche::Egal => "=".to_string(),
        }
    }
}

const PAVE: [&[Touche]; 5] = [
    &[
        Touche::ToutEffacer,
        Touche::Effacer,
        Touche::Operateur(Op::Percent),
        Touche::Operateur(Op::Slash),
    ],
    &[
        Touche::Chiffre('7'),
        Touche::Chiffre('8'),
        Touche::Chiffre('9'),
        Touche::Operateur(Op::Star),
    ],
    &[
        Touche::Chiffre('4'),
        Touche::Chiffre('5'),
        Touche::Chiffre('6'),
        Touche::Operateur(Op::Minus),
    ],
    &[
        Touche::Chiffre('1'),
        Touche::Chiffre('2'),
        Touche::Chiffre('3'),
        Touche::Operateur(Op::Plus),
    ],
    &[Touche::Chiffre('0'), Touche::Chiffre('.'), Touche::Egal],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        self.ui_demarche(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&self.entree).monospace().size(22.0));
                    ui.label(
                        egui::RichText::new(&self.resultat)
                            .monospace()
                            .size(28.0)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for &touche in rangee {
                        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(touche.libelle()));
                        if resp.clicked() {
                            self.appuyer(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.monospace(format!("Jetons : {}", self.demarche.jetons));
                ui.monospace(format!("RPN    : {}", self.demarche.rpn));
                ui.monospace(format!("Brut   : {}", self.demarche.brut));
            });
    }

    fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Operateur(op) => self.saisir_operateur(op),
            Touche::Effacer => self.effacer_dernier(),
            Touche::ToutEffacer => self.reset_total(),
            Touche::Egal => self.egal(),
        }
    }
}
