//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de Decimal -> résultat exact
//!
//! Chaque appel alloue ses propres piles : aucune donnée partagée hormis
//! `PRECEDENCE` (constante), donc réentrant et sûr entre threads.

use tracing::debug;

use super::decimal::Decimal;
use super::erreur::EvaluationError;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::operations::PRECEDENCE;
use super::rpn::{eval_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    /// Résultat avant mise en forme (échelle conservée, ex: 3.5000).
    pub brut: String,
}

/// API publique : valeur exacte de l’expression, ou l’erreur qui a tout arrêté.
pub fn evaluate(expression: &str) -> Result<Decimal, EvaluationError> {
    eval_expression_brute(expression).map(|(valeur, _)| valeur)
}

/// Comme `evaluate`, mais retourne le texte affichable + la démarche.
pub fn eval_expression(expression: &str) -> Result<(String, Demarche), EvaluationError> {
    let (valeur, mut d) = eval_expression_brute(expression)?;
    d.brut = valeur.to_string();
    Ok((format_resultat(&valeur), d))
}

fn eval_expression_brute(expression: &str) -> Result<(Decimal, Demarche), EvaluationError> {
    // 1) Jetons
    let jetons = tokenize(expression);

    // 2) RPN
    let rpn = to_rpn(&jetons, &PRECEDENCE);

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        brut: String::new(),
    };
    debug!(entree = expression, jetons = %d.jetons, rpn = %d.rpn, "expression convertie");

    // 3) Valeur
    match eval_rpn(&rpn) {
        Ok(v) => {
            debug!(resultat = %v, "expression évaluée");
            Ok((v, d))
        }
        Err(e) => {
            debug!(erreur = %e, "évaluation abandonnée");
            Err(e)
        }
    }
}
