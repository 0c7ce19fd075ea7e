// src/noyau/operations.rs
//
// Table des opérations (+ - * / %) sur Decimal + table de précédence.
// Tous les opérateurs sont associatifs à gauche.

use tracing::trace;

use super::decimal::Decimal;
use super::erreur::EvaluationError;
use super::jetons::Op;

/// Échelle fixe des résultats de `/` et `%`.
pub const ECHELLE_DIVISION: u32 = 4;

/// Précédence par opérateur (plus grand = lie plus fort).
/// Immuable ; partagée en lecture seule par le shunting-yard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TablePrecedence {
    additif: u8,
    multiplicatif: u8,
}

impl TablePrecedence {
    pub const fn new(additif: u8, multiplicatif: u8) -> Self {
        Self {
            additif,
            multiplicatif,
        }
    }

    pub fn de(&self, op: Op) -> u8 {
        match op {
            Op::Plus | Op::Minus => self.additif,
            Op::Star | Op::Slash | Op::Percent => self.multiplicatif,
        }
    }
}

/// {+:1, -:1, *:2, /:2, %:2}
pub const PRECEDENCE: TablePrecedence = TablePrecedence::new(1, 2);

impl Op {
    /// Applique l’opérateur : `gauche op droite`.
    pub fn apply(self, gauche: &Decimal, droite: &Decimal) -> Result<Decimal, EvaluationError> {
        let r = match self {
            Op::Plus => gauche + droite,
            Op::Minus => gauche - droite,
            Op::Star => gauche * droite,
            Op::Slash => gauche
                .div_arrondi(droite, ECHELLE_DIVISION)
                .ok_or(EvaluationError::DivisionByZero)?,
            Op::Percent => gauche
                .reste(droite)
                .ok_or(EvaluationError::DivisionByZero)?
                .avec_echelle(ECHELLE_DIVISION),
        };
        trace!(%gauche, op = %self, %droite, resultat = %r, "opération");
        Ok(r)
    }
}
