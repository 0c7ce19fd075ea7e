// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), sans parenthèses
// - Puis évaluer la RPN avec une pile de Decimal
//
// Règles:
// - tous les opérateurs sont associatifs à gauche : à précédence égale, on dépile
// - pas de moins unaire : "-3" finit en StackUnderflow à l’évaluation

use super::decimal::Decimal;
use super::erreur::EvaluationError;
use super::jetons::Tok;
use super::operations::TablePrecedence;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
///
/// Ne vérifie pas l’alternance nombre/opérateur : une entrée mal formée
/// donne une RPN mal formée, rejetée par `eval_rpn`.
pub fn to_rpn(tokens: &[Tok], table: &TablePrecedence) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok.clone()),

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    if table.de(top) >= table.de(*op) {
                        ops.pop();
                        out.push(Tok::Op(top));
                    } else {
                        break;
                    }
                }
                ops.push(*op);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(Tok::Op(op));
    }

    out
}

/// Évalue une RPN.
///
/// - Num : parse décimal (MalformedNumber) puis empile
/// - Op  : dépile droite puis gauche, applique, empile
/// - à la fin, exactement une valeur doit rester
pub fn eval_rpn(rpn: &[Tok]) -> Result<Decimal, EvaluationError> {
    let mut st: Vec<Decimal> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(litteral) => st.push(litteral.parse()?),

            Tok::Op(op) => {
                let manque = || EvaluationError::StackUnderflow {
                    operateur: Some(*op),
                };
                let droite = st.pop().ok_or_else(manque)?;
                let gauche = st.pop().ok_or_else(manque)?;
                st.push(op.apply(&gauche, &droite)?);
            }
        }
    }

    match st.len() {
        0 => Err(EvaluationError::StackUnderflow { operateur: None }),
        1 => st.pop().ok_or(EvaluationError::StackUnderflow { operateur: None }),
        restants => Err(EvaluationError::StackOverflow { restants }),
    }
}
