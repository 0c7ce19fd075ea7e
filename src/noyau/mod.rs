//! Noyau décimal exact
//!
//! Organisation interne :
//! - decimal.rs    : Decimal (big int + échelle), arrondi demi loin de zéro
//! - jetons.rs     : Tok / Op + tokenisation
//! - operations.rs : table des opérations + table de précédence
//! - rpn.rs        : shunting-yard + évaluation de la RPN
//! - erreur.rs     : EvaluationError
//! - format.rs     : affichage du résultat (zéros retirés, sans exposant)
//! - eval.rs       : pipeline complet

pub mod decimal;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operations;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use decimal::Decimal;
pub use erreur::EvaluationError;
pub use eval::{eval_expression, evaluate, Demarche};
pub use format::format_resultat;
pub use jetons::{Op, Tok};
pub use operations::{TablePrecedence, PRECEDENCE};
