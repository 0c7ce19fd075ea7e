//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (ligne d’entrée, ligne de résultat)
//! et les règles d’édition des touches (chiffre, opérateur, C, AC, =).
//!
//! Contrats :
//! - Aucun parsing ici : "=" délègue tout au noyau.
//! - Actions déterministes, sans effet de bord caché.
//! - Une erreur du noyau ne touche pas à l’entrée (on peut corriger puis refaire "=").

use calculatrice_decimale::{eval_expression, Demarche, Op};
use tracing::info;

/// Texte affiché sur la ligne résultat quand le noyau échoue.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- lignes affichées ---
    pub entree: String,
    pub resultat: String,

    // "=" n’évalue que si un opérateur a été saisi depuis le dernier résultat
    pub operateur_saisi: bool,

    // --- démarche du dernier calcul réussi (debug) ---
    pub demarche: Demarche,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre ou point : simple ajout.
    pub fn saisir_chiffre(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.entree.push(c);
        }
    }

    /// Opérateur : remplace un opérateur final éventuel ("3+" puis "*" => "3*").
    pub fn saisir_operateur(&mut self, op: Op) {
        if self.entree.chars().last().and_then(Op::from_char).is_some() {
            self.entree.pop();
        }
        self.entree.push(op.symbole());
        self.operateur_saisi = true;
    }

    /// Saisie clavier : chiffres, point et opérateurs ; le reste est ignoré.
    pub fn saisir_texte(&mut self, texte: &str) {
        for c in texte.chars() {
            match Op::from_char(c) {
                Some(op) => self.saisir_operateur(op),
                None => self.saisir_chiffre(c),
            }
        }
    }

    /// C : efface le dernier caractère.
    pub fn effacer_dernier(&mut self) {
        self.entree.pop();
    }

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// = : évalue l’entrée via le noyau.
    ///
    /// Succès : le résultat affiché devient la nouvelle entrée.
    /// Échec : "Error" sur la ligne résultat, entrée conservée.
    pub fn egal(&mut self) {
        if self.entree.is_empty() || !self.operateur_saisi {
            return;
        }

        match eval_expression(&self.entree) {
            Ok((affiche, demarche)) => {
                info!(entree = %self.entree, resultat = %affiche, "calcul");
                self.resultat = affiche.clone();
                self.entree = affiche;
                self.demarche = demarche;
                self.operateur_saisi = false;
            }
            Err(e) => {
                info!(entree = %self.entree, erreur = %e, "calcul refusé");
                self.resultat = TEXTE_ERREUR.to_string();
            }
        }
    }
}
