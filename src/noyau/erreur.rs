// src/noyau/erreur.rs

use thiserror::Error;

use super::jetons::Op;

/// Échec d’une évaluation. Aucune valeur partielle n’accompagne une erreur.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("nombre invalide: {0:?}")]
    MalformedNumber(String),

    #[error("division par zéro")]
    DivisionByZero,

    /// `Some(op)` : opérateur sans ses deux opérandes.
    /// `None` : pile vide en fin d’évaluation (entrée vide).
    #[error("{}", message_pile_vide(.operateur))]
    StackUnderflow { operateur: Option<Op> },

    #[error("expression invalide: {restants} valeurs restantes sur la pile")]
    StackOverflow { restants: usize },
}

fn message_pile_vide(operateur: &Option<Op>) -> String {
    match operateur {
        Some(op) => format!("opérande manquante pour '{op}'"),
        None => "expression vide".to_string(),
    }
}
