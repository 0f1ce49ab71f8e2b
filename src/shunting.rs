//! Infix to postfix conversion.

use crate::list::TokenList;
use crate::token::{Op, Token};
use tracing::debug;

/// Convert an infix token sequence to postfix order with the shunting-yard
/// algorithm.
///
/// Operators of equal precedence pop each other, so every operator is left
/// associative: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`. Parentheses are never emitted.
/// Negation is a prefix operator: it is pushed without popping anything, and
/// binds tighter than everything else, so `2 / -x` is `2 / (-x)`.
/// Unbalanced parentheses are not an error: a `)` without a matching `(` stops
/// after draining the operator stack, and a `(` left open is dropped.
pub fn to_postfix(infix: &TokenList<Token>) -> TokenList<Token> {
    let mut output = TokenList::new();
    let mut operators = TokenList::new();

    for token in infix {
        match token {
            Token::LParen | Token::Function(_) | Token::Op(Op::Negate) => {
                operators.push(token.clone());
            }
            Token::RParen => close_parenthesis(&mut output, &mut operators),
            Token::Op(op) => {
                while operators
                    .last()
                    .map_or(false, |top: &Token| top.precedence() >= op.precedence())
                {
                    operators.move_tail_to(&mut output);
                }
                operators.push(token.clone());
            }
            Token::Number(_) | Token::Name(_) | Token::Unit(_) | Token::Unknown(_) => {
                output.push(token.clone());
            }
        }
    }

    while let Some(token) = operators.pop() {
        if token != Token::LParen {
            output.push(token);
        }
    }

    debug!(postfix = ?output, "converted to postfix");
    output
}

/// Move operators to the output until the matching `(`, which is discarded
fn close_parenthesis(output: &mut TokenList<Token>, operators: &mut TokenList<Token>) {
    while let Some(top) = operators.last() {
        if *top == Token::LParen {
            operators.pop();
            return;
        }
        operators.move_tail_to(output);
    }
}
