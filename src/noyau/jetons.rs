// src/noyau/jetons.rs

use std::fmt;

/// Les cinq opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
}

impl Op {
    pub const TOUS: [Op; 5] = [Op::Plus, Op::Minus, Op::Star, Op::Slash, Op::Percent];

    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '%' => Some(Op::Percent),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Percent => '%',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Littéral brut : le parse décimal est fait à l’évaluation (MalformedNumber)
    Num(String),
    Op(Op),
}

/// Tokenize une chaîne en jetons.
///
/// - chiffres et '.' consécutifs => un seul Num (non interprété ici : "1.2.3" passe)
/// - + - * / % => Op, ferme le nombre en cours
/// - tout autre caractère est ignoré SANS couper le nombre ("3 4" => Num("34"))
///
/// Jamais d’erreur : une entrée vide donne une liste vide.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut nombre = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        if let Some(op) = Op::from_char(c) {
            if !nombre.is_empty() {
                out.push(Tok::Num(std::mem::take(&mut nombre)));
            }
            out.push(Tok::Op(op));
        }
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(n) => n.clone(),
            Tok::Op(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
