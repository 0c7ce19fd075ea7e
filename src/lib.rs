//! Calculatrice décimale : évaluateur d’expressions infixes `+ - * / %`
//! sur des décimaux exacts (aucune erreur de flottant binaire).
//!
//! ```
//! use calculatrice_decimale::{evaluate, format_resultat};
//!
//! let v = evaluate("7/2").unwrap();
//! assert_eq!(v.to_string(), "3.5000");
//! assert_eq!(format_resultat(&v), "3.5");
//! ```

pub mod noyau;

pub use noyau::{
    eval_expression, evaluate, format_resultat, Decimal, Demarche, EvaluationError, Op,
    TablePrecedence, Tok, PRECEDENCE,
};
