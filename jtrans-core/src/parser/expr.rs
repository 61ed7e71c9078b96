//! Expression grammar: precedence climbing plus the speculative
//! disambiguations named in `spec.md` §4.3, grounded in `parser.py`'s
//! `parse_expr` through `parse_primary` chain.

use super::Parser;
use crate::ast::*;
use crate::error::ParseResult;
use crate::token::{Token, TokenKind};

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> ParseResult<Expr> {
        let target = self.parse_conditional()?;
        let op = match self.cur().kind {
            TokenKind::Assign => Some(AssignOp::Assign),
            TokenKind::CompoundAssign => Some(compound_op_from_lexeme(&self.cur().lexeme)),
            _ => None,
        };
        if let Some(op) = op {
            self.buf.advance();
            let value = self.parse_assignment()?;
            return Ok(Expr::Assignment {
                op,
                target: Box::new(target),
                value: Box::new(value),
            });
        }
        Ok(target)
    }

    /// Lambda-vs-parenthesised-expression and ternary conditional, per
    /// `spec.md` §4.3.
    fn parse_conditional(&mut self) -> ParseResult<Expr> {
        if self.at_lambda_start() {
            if let Ok(lambda) = self.try_parse_lambda() {
                return self.parse_conditional_tail(lambda);
            }
        }
        let cond = self.parse_logic_or()?;
        self.parse_conditional_tail(cond)
    }

    fn parse_conditional_tail(&mut self, cond: Expr) -> ParseResult<Expr> {
        if self.accept(TokenKind::Question).is_some() {
            let then_branch = self.parse_expr()?;
            self.require(TokenKind::Colon, "':'")?;
            let else_branch = self.parse_conditional()?;
            Ok(Expr::Conditional {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            })
        } else {
            Ok(cond)
        }
    }

    fn at_lambda_start(&self) -> bool {
        if self.at(TokenKind::Name) && self.look(1).kind == TokenKind::Arrow {
            return true;
        }
        self.at(TokenKind::LParen)
    }

    fn try_parse_lambda(&mut self) -> ParseResult<Expr> {
        self.buf.speculate(|p| p.parse_lambda())
    }

    pub(crate) fn parse_lambda(&mut self) -> ParseResult<Expr> {
        let params = if self.at(TokenKind::Name) {
            let name = self.buf.advance().lexeme;
            vec![LambdaParam { name, ty: None }]
        } else {
            self.require(TokenKind::LParen, "'('")?;
            let mut params = Vec::new();
            while !self.at(TokenKind::RParen) {
                let (ty, name) = self.parse_lambda_param()?;
                params.push(LambdaParam { name, ty });
                if self.accept(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.require(TokenKind::RParen, "')'")?;
            params
        };
        self.require(TokenKind::Arrow, "'->'")?;
        let body = if self.at(TokenKind::LBrace) {
            LambdaBody::Block(self.parse_block()?)
        } else {
            LambdaBody::Expr(Box::new(self.parse_expr()?))
        };
        Ok(Expr::Lambda { params, body })
    }

    fn parse_lambda_param(&mut self) -> ParseResult<(Option<Type>, String)> {
        self.buf.push_mark();
        let typed: ParseResult<(Option<Type>, String)> = (|| {
            let (_, _annotations) = self.parse_modifiers_and_annotations()?;
            let ty = self.parse_type()?;
            let name = self.require(TokenKind::Name, "parameter name")?.lexeme;
            Ok((Some(ty), name))
        })();
        match typed {
            Ok(v) => {
                self.buf.pop_mark(false);
                Ok(v)
            }
            Err(_) => {
                self.buf.pop_mark(true);
                let name = self.require(TokenKind::Name, "parameter name")?.lexeme;
                Ok((None, name))
            }
        }
    }

    fn parse_logic_or(&mut self) -> ParseResult<Expr> {
        self.parse_binary_left(Self::parse_logic_and, &[(TokenKind::OrOr, BinaryOp::Or)])
    }

    fn parse_logic_and(&mut self) -> ParseResult<Expr> {
        self.parse_binary_left(Self::parse_bitwise_or, &[(TokenKind::AndAnd, BinaryOp::And)])
    }

    fn parse_bitwise_or(&mut self) -> ParseResult<Expr> {
        self.parse_binary_left(Self::parse_bitwise_xor, &[(TokenKind::Pipe, BinaryOp::BitOr)])
    }

    fn parse_bitwise_xor(&mut self) -> ParseResult<Expr> {
        self.parse_binary_left(Self::parse_bitwise_and, &[(TokenKind::Caret, BinaryOp::BitXor)])
    }

    fn parse_bitwise_and(&mut self) -> ParseResult<Expr> {
        self.parse_binary_left(Self::parse_equality, &[(TokenKind::Amp, BinaryOp::BitAnd)])
    }

    fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_binary_left(
            Self::parse_relational,
            &[(TokenKind::Eq, BinaryOp::Eq), (TokenKind::Ne, BinaryOp::Ne)],
        )
    }

    /// Relational operators plus `instanceof`, per SPEC_FULL.md's
    /// restored "`instanceof` binds at relational precedence" behavior.
    fn parse_relational(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_shift()?;
        loop {
            if self.accept_keyword("instanceof").is_some() {
                let ty = self.parse_generic_type_or_array()?;
                let binding = if self.at(TokenKind::Name) {
                    Some(self.buf.advance().lexeme)
                } else {
                    None
                };
                left = Expr::InstanceOf {
                    expr: Box::new(left),
                    ty,
                    binding,
                };
                continue;
            }
            let op = match self.cur().kind {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::Le => BinaryOp::Le,
                TokenKind::Ge => BinaryOp::Ge,
                _ => break,
            };
            self.buf.advance();
            let right = self.parse_shift()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// `<<` is a single scanned token, but `>>`/`>>>` never are — the
    /// scanner only fuses `>>=`/`>>>=` (the compound-assignment spellings),
    /// leaving a bare `>>`/`>>>` as two/three individual `>` (`Gt`) tokens
    /// (`spec.md` §4.3/§8 "Generic call vs comparison"). So a right-shift
    /// is recognised here by checking that the next one or two `Gt` tokens
    /// immediately follow the current one by position, per
    /// `original_source/javapy/parser.py`'s `parse_shift` adjacency check.
    /// `List<Map<A,B>>` never reaches here as a shift because the
    /// type-argument parser consumes its own `>` first, one generic level
    /// at a time.
    fn parse_shift(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_additive()?;
        loop {
            if self.accept(TokenKind::Shl).is_some() {
                let right = self.parse_additive()?;
                left = Expr::Binary { op: BinaryOp::Shl, left: Box::new(left), right: Box::new(right) };
                continue;
            }
            if let Some(op) = self.fused_right_shift_op() {
                let n = if op == BinaryOp::UShr { 3 } else { 2 };
                for _ in 0..n {
                    self.buf.advance();
                }
                let right = self.parse_additive()?;
                left = Expr::Binary { op, left: Box::new(left), right: Box::new(right) };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Returns `Some(UShr)`/`Some(Shr)` when the current token and the next
    /// one (or two) are all `Gt` and lexically adjacent with no gap between
    /// them — i.e. the source actually wrote `>>>`/`>>`, not `> >` or a
    /// generic-type close followed by a separate comparison.
    fn fused_right_shift_op(&self) -> Option<BinaryOp> {
        if !self.at(TokenKind::Gt) {
            return None;
        }
        let first = self.cur();
        let second = self.look(1);
        if second.kind != TokenKind::Gt || !second.immediately_follows(&first) {
            return None;
        }
        let third = self.look(2);
        if third.kind == TokenKind::Gt && third.immediately_follows(&second) {
            Some(BinaryOp::UShr)
        } else {
            Some(BinaryOp::Shr)
        }
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_binary_left(
            Self::parse_multiplicative,
            &[(TokenKind::Plus, BinaryOp::Add), (TokenKind::Minus, BinaryOp::Sub)],
        )
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_binary_left(
            Self::parse_unary,
            &[
                (TokenKind::Star, BinaryOp::Mul),
                (TokenKind::Slash, BinaryOp::Div),
                (TokenKind::Percent, BinaryOp::Rem),
            ],
        )
    }

    fn parse_binary_left(
        &mut self,
        next: fn(&mut Self) -> ParseResult<Expr>,
        ops: &[(TokenKind, BinaryOp)],
    ) -> ParseResult<Expr> {
        let mut left = next(self)?;
        loop {
            let found = ops.iter().find(|(k, _)| self.cur().kind == *k);
            let Some((_, op)) = found else { break };
            let op = *op;
            self.buf.advance();
            let right = next(self)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// Unary operators plus the cast-vs-parenthesis speculation, per
    /// `spec.md` §4.3.
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.cur().kind {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::Not => Some(UnaryOp::Not),
            _ => None,
        };
        if let Some(op) = op {
            self.buf.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }
        if self.at(TokenKind::PlusPlus) || self.at(TokenKind::MinusMinus) {
            let op = if self.at(TokenKind::PlusPlus) {
                IncDecOp::Inc
            } else {
                IncDecOp::Dec
            };
            self.buf.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::PreIncDec {
                op,
                operand: Box::new(operand),
            });
        }
        if self.at(TokenKind::LParen) {
            if let Some(expr) = self.try_parse_cast()? {
                return Ok(expr);
            }
        }
        self.parse_postfix()
    }

    fn try_parse_cast(&mut self) -> ParseResult<Option<Expr>> {
        let result = self.buf.speculate(|p| -> ParseResult<Expr> {
            p.require(TokenKind::LParen, "'('")?;
            let ty = p.parse_type()?;
            p.require(TokenKind::RParen, "')'")?;
            if !p.can_start_unary_or_lambda() {
                return Err(p.error("not a cast"));
            }
            let operand = p.parse_unary()?;
            Ok(Expr::Cast {
                ty,
                expr: Box::new(operand),
            })
        });
        Ok(result.ok())
    }

    fn can_start_unary_or_lambda(&self) -> bool {
        if self.at_lambda_start() {
            return true;
        }
        matches!(
            self.cur().kind,
            TokenKind::Name
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
                | TokenKind::LParen
                | TokenKind::Not
                | TokenKind::Tilde
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
        ) || self.at_keyword("this")
            || self.at_keyword("super")
            || self.at_keyword("new")
            || self.at_keyword("true")
            || self.at_keyword("false")
            || self.at_keyword("null")
    }

    fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_ref_expr()?;
        loop {
            if self.at(TokenKind::PlusPlus) || self.at(TokenKind::MinusMinus) {
                let op = if self.at(TokenKind::PlusPlus) {
                    IncDecOp::Inc
                } else {
                    IncDecOp::Dec
                };
                self.buf.advance();
                expr = Expr::PostIncDec {
                    op,
                    operand: Box::new(expr),
                };
                continue;
            }
            break;
        }
        Ok(expr)
    }

    /// Method references (`::`, `::new`), grounded in `parser.py`'s
    /// `parse_ref_expr`.
    fn parse_ref_expr(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_dot_expr()?;
        while self.accept(TokenKind::DoubleColon).is_some() {
            self.parse_optional_type_arguments_discard()?;
            let name = if self.accept_keyword("new").is_some() {
                "new".to_string()
            } else {
                self.require(TokenKind::Name, "method name")?.lexeme
            };
            expr = Expr::MethodReference {
                object: Box::new(expr),
                name,
            };
        }
        Ok(expr)
    }

    fn parse_optional_type_arguments_discard(&mut self) -> ParseResult<()> {
        if self.at(TokenKind::Lt) {
            let _ = self.parse_type_parameters_as_args();
        }
        Ok(())
    }

    fn parse_type_parameters_as_args(&mut self) -> ParseResult<()> {
        self.buf.push_mark();
        let res: ParseResult<()> = (|| {
            self.require(TokenKind::Lt, "'<'")?;
            while !self.at(TokenKind::Gt) {
                self.parse_type()?;
                if self.accept(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.require(TokenKind::Gt, "'>'")?;
            Ok(())
        })();
        match res {
            Ok(()) => {
                self.buf.pop_mark(false);
                Ok(())
            }
            Err(e) => {
                self.buf.pop_mark(true);
                Err(e)
            }
        }
    }

    /// `this`/`super`/generic-dot-call forms and plain `.name`/`.name(...)`
    /// chains, grounded in `parser.py`'s `parse_dot_expr`.
    fn parse_dot_expr(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.accept(TokenKind::Dot).is_some() {
                if self.accept_keyword("class").is_some() {
                    expr = Expr::ClassLiteral(Type::simple(placeholder_type_name(&expr)));
                    continue;
                }
                if self.accept_keyword("this").is_some() {
                    expr = Expr::QualifiedThis(name_of(&expr));
                    continue;
                }
                if self.accept_keyword("super").is_some() {
                    expr = Expr::QualifiedSuper(name_of(&expr));
                    continue;
                }
                if self.accept_keyword("new").is_some() {
                    let ty = self.parse_generic_type_or_array_no_array_dims()?;
                    let args = self.parse_args()?;
                    expr = Expr::ClassCreator {
                        ty,
                        args,
                        anonymous_body: self.parse_optional_anonymous_body()?,
                        qualifier: Some(Box::new(expr)),
                    };
                    continue;
                }
                // A `<` directly after `.` can only be an explicit generic
                // method invocation's type witness (`object.<Type>method(args)`,
                // including the `.<T>this(...)`/`.<T>super(...)` constructor-call
                // forms) — an ordinary member access never has `<` in this
                // position, so this isn't ambiguous with a later relational
                // `<` (`spec.md` §4.3 "Generic call vs comparison").
                if self.at(TokenKind::Lt) {
                    let type_args = self.try_parse_type_arguments()?;
                    let name = if self.accept_keyword("this").is_some() {
                        "this".to_string()
                    } else if self.accept_keyword("super").is_some() {
                        "super".to_string()
                    } else {
                        self.require(TokenKind::Name, "method name")?.lexeme
                    };
                    let args = self.parse_args()?;
                    expr = Expr::FunctionCall {
                        object: Some(Box::new(expr)),
                        type_args: Some(type_args),
                        name,
                        args,
                    };
                    continue;
                }
                let name = self.require(TokenKind::Name, "member name")?.lexeme;
                if self.at(TokenKind::LParen) {
                    let args = self.parse_args()?;
                    expr = Expr::FunctionCall {
                        object: Some(Box::new(expr)),
                        type_args: None,
                        name,
                        args,
                    };
                } else {
                    expr = Expr::MemberAccess {
                        object: Box::new(expr),
                        name,
                    };
                }
                continue;
            }
            if self.at(TokenKind::LBracket) && self.look(1).kind != TokenKind::RBracket {
                self.buf.advance();
                let index = self.parse_expr()?;
                self.require(TokenKind::RBracket, "']'")?;
                expr = Expr::FunctionCall {
                    object: Some(Box::new(expr)),
                    type_args: None,
                    name: "[]".to_string(),
                    args: vec![index],
                };
                continue;
            }
            break;
        }
        Ok(expr)
    }

    fn parse_generic_type_or_array_no_array_dims(&mut self) -> ParseResult<Type> {
        self.parse_type()
    }

    pub(crate) fn parse_args(&mut self) -> ParseResult<Vec<Expr>> {
        self.require(TokenKind::LParen, "'('")?;
        let mut args = Vec::new();
        while !self.at(TokenKind::RParen) {
            args.push(self.parse_expr()?);
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.require(TokenKind::RParen, "')'")?;
        Ok(args)
    }

    fn parse_optional_anonymous_body(&mut self) -> ParseResult<Option<AnonymousBody>> {
        if self.at(TokenKind::LBrace) {
            let members = self.parse_class_body()?;
            Ok(Some(AnonymousBody { members }))
        } else {
            Ok(None)
        }
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let t = self.cur();
        match t.kind {
            TokenKind::IntLiteral => {
                self.buf.advance();
                Ok(Expr::IntLiteral(NumericLiteral { text: t.lexeme, is_float: false }))
            }
            TokenKind::FloatLiteral => {
                self.buf.advance();
                Ok(Expr::FloatLiteral(NumericLiteral { text: t.lexeme, is_float: true }))
            }
            TokenKind::StringLiteral => {
                self.buf.advance();
                Ok(Expr::StringLiteral(t.lexeme))
            }
            TokenKind::CharLiteral => {
                self.buf.advance();
                Ok(Expr::CharLiteral(t.lexeme))
            }
            TokenKind::FstringBegin => self.parse_fstring(),
            TokenKind::LBracket => self.parse_list_literal(),
            TokenKind::LBrace => {
                let elems = self.parse_array_initializer()?;
                Ok(Expr::ArrayInit(elems))
            }
            TokenKind::LParen => {
                self.buf.advance();
                let inner = self.parse_expr()?;
                self.require(TokenKind::RParen, "')'")?;
                Ok(Expr::Paren(Box::new(inner)))
            }
            TokenKind::Keyword => self.parse_keyword_primary(t),
            TokenKind::Name => self.parse_name_primary(),
            _ => Err(self.error(format!("illegal start of expression: {}", super::describe(&t)))),
        }
    }

    fn parse_fstring(&mut self) -> ParseResult<Expr> {
        let mut parts = Vec::new();
        let begin = self.require(TokenKind::FstringBegin, "f-string")?;
        parts.push(FStringPart::Literal(begin.lexeme));
        loop {
            if self.at(TokenKind::FstringEnd) {
                let end = self.buf.advance();
                parts.push(FStringPart::Literal(end.lexeme));
                break;
            }
            if self.at(TokenKind::FstringMiddle) {
                let mid = self.buf.advance();
                parts.push(FStringPart::Literal(mid.lexeme));
                continue;
            }
            let hole = self.parse_expr()?;
            parts.push(FStringPart::Hole(Box::new(hole)));
        }
        Ok(Expr::FString(parts))
    }

    /// `[a, b, c]` lowers to `java.util.List.of(a, b, c)`, per `spec.md`
    /// §4.3 "List literal sugar".
    fn parse_list_literal(&mut self) -> ParseResult<Expr> {
        self.require(TokenKind::LBracket, "'['")?;
        let mut args = Vec::new();
        while !self.at(TokenKind::RBracket) {
            args.push(self.parse_expr()?);
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.require(TokenKind::RBracket, "']'")?;
        let list_type = Expr::MemberAccess {
            object: Box::new(Expr::MemberAccess {
                object: Box::new(Expr::Name(crate::qualified_name::QualifiedName::new("java.util"))),
                name: "List".to_string(),
            }),
            name: String::new(),
        };
        let object = if let Expr::MemberAccess { object, .. } = list_type {
            *object
        } else {
            unreachable!()
        };
        Ok(Expr::FunctionCall {
            object: Some(Box::new(Expr::MemberAccess {
                object,
                name: "List".to_string(),
            })),
            type_args: None,
            name: "of".to_string(),
            args,
        })
    }

    pub(crate) fn parse_array_initializer(&mut self) -> ParseResult<Vec<Expr>> {
        self.require(TokenKind::LBrace, "'{'")?;
        let mut elems = Vec::new();
        while !self.at(TokenKind::RBrace) {
            if self.at(TokenKind::LBrace) {
                elems.push(Expr::ArrayInit(self.parse_array_initializer()?));
            } else {
                elems.push(self.parse_expr()?);
            }
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.require(TokenKind::RBrace, "'}'")?;
        Ok(elems)
    }

    fn parse_keyword_primary(&mut self, t: Token) -> ParseResult<Expr> {
        match t.lexeme.as_str() {
            "true" => {
                self.buf.advance();
                Ok(Expr::BoolLiteral(true))
            }
            "false" => {
                self.buf.advance();
                Ok(Expr::BoolLiteral(false))
            }
            "null" => {
                self.buf.advance();
                Ok(Expr::NullLiteral)
            }
            "this" => {
                self.buf.advance();
                if self.at(TokenKind::LParen) {
                    let args = self.parse_args()?;
                    return Ok(Expr::FunctionCall {
                        object: None,
                        type_args: None,
                        name: "this".to_string(),
                        args,
                    });
                }
                Ok(Expr::This)
            }
            "super" => {
                self.buf.advance();
                if self.at(TokenKind::LParen) {
                    let args = self.parse_args()?;
                    return Ok(Expr::FunctionCall {
                        object: None,
                        type_args: None,
                        name: "super".to_string(),
                        args,
                    });
                }
                Ok(Expr::Super)
            }
            "switch" => self.parse_switch_expr(),
            "new" => self.parse_creator(),
            "void" | "boolean" | "byte" | "short" | "char" | "int" | "long" | "float" | "double" => {
                let ty = self.parse_type_keyword_only()?;
                self.require(TokenKind::Dot, "'.'")?;
                self.require_keyword("class")?;
                Ok(Expr::ClassLiteral(ty))
            }
            _ => Err(self.error(format!("illegal start of expression: '{}'", t.lexeme))),
        }
    }

    fn parse_type_keyword_only(&mut self) -> ParseResult<Type> {
        let t = self.buf.advance();
        if t.lexeme == "void" {
            return Ok(Type::Void);
        }
        Ok(Type::Primitive(Primitive::from_keyword(&t.lexeme).expect("checked by caller")))
    }

    fn parse_name_primary(&mut self) -> ParseResult<Expr> {
        let name_tok = self.buf.advance();
        if self.at(TokenKind::LParen) {
            let args = self.parse_args()?;
            return Ok(Expr::FunctionCall {
                object: None,
                type_args: None,
                name: name_tok.lexeme,
                args,
            });
        }
        Ok(Expr::Name(crate::qualified_name::QualifiedName::new(name_tok.lexeme)))
    }

    /// `switch` expression, per `spec.md` §4.3 "Switch expressions and
    /// cases" and concrete scenario 5.
    fn parse_switch_expr(&mut self) -> ParseResult<Expr> {
        self.require_keyword("switch")?;
        self.require(TokenKind::LParen, "'('")?;
        let discriminant = self.parse_expr()?;
        self.require(TokenKind::RParen, "')'")?;
        let cases = self.parse_switch_cases()?;
        Ok(Expr::Switch(SwitchExpr {
            discriminant: Box::new(discriminant),
            cases,
        }))
    }

    /// A switch body: `{ cases... }` or, in the indented dialect,
    /// `: NEWLINE INDENT cases... DEDENT`.
    pub(crate) fn parse_switch_cases(&mut self) -> ParseResult<Vec<SwitchCase>> {
        let closer = if self.at(TokenKind::LBrace) {
            self.buf.advance();
            TokenKind::RBrace
        } else {
            self.require(TokenKind::Colon, "':'")?;
            self.require(TokenKind::Newline, "newline")?;
            self.require(TokenKind::Indent, "indent")?;
            TokenKind::Dedent
        };
        self.skip_newlines();
        let mut cases = Vec::new();
        while !self.at(closer) {
            cases.push(self.parse_switch_case()?);
            self.skip_newlines();
        }
        self.require(closer, if closer == TokenKind::RBrace { "'}'" } else { "dedent" })?;
        Ok(cases)
    }

    fn parse_switch_case(&mut self) -> ParseResult<SwitchCase> {
        let is_default = self.accept_keyword("default").is_some();
        let mut labels = Vec::new();
        if !is_default {
            self.require_keyword("case")?;
            labels.push(self.parse_case_label()?);
            while self.accept(TokenKind::Comma).is_some() {
                labels.push(self.parse_case_label()?);
            }
        }
        let arrow = self.accept(TokenKind::Arrow).is_some();
        if arrow {
            let body = self.parse_arrow_case_body()?;
            Ok(SwitchCase { labels, is_default, arrow, body })
        } else {
            self.require(TokenKind::Colon, "':'")?;
            self.skip_newlines();
            let mut body = Vec::new();
            while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Dedent) && !self.at_keyword("case") && !self.at_keyword("default") {
                body.push(self.parse_stmt()?);
                self.skip_newlines();
            }
            Ok(SwitchCase { labels, is_default, arrow, body })
        }
    }

    fn parse_case_label(&mut self) -> ParseResult<Expr> {
        self.parse_conditional()
    }

    /// An arrow case's body is exactly one of: an expression statement, a
    /// brace/indented block, or a throw (`spec.md` §3 invariant) — `body`
    /// always holds exactly that one `Stmt`, with block contents nested
    /// inside a `Stmt::Block` rather than spliced into the case directly.
    fn parse_arrow_case_body(&mut self) -> ParseResult<Vec<crate::ast::Stmt>> {
        if self.at(TokenKind::LBrace) {
            Ok(vec![crate::ast::Stmt::Block(self.parse_block()?)])
        } else if self.at_keyword("throw") {
            Ok(vec![self.parse_stmt()?])
        } else {
            let expr = self.parse_expr()?;
            self.accept(TokenKind::Semi);
            self.skip_newlines();
            Ok(vec![crate::ast::Stmt::Expression(Box::new(expr))])
        }
    }

    /// Class-creator and array-creator forms, grounded in `parser.py`'s
    /// `parse_creator`.
    fn parse_creator(&mut self) -> ParseResult<Expr> {
        self.require_keyword("new")?;
        let elem_base = self.parse_generic_type_or_array_for_creator()?;
        if self.at(TokenKind::LBracket) {
            return self.parse_array_creator(elem_base);
        }
        let args = self.parse_args()?;
        let anonymous_body = self.parse_optional_anonymous_body()?;
        Ok(Expr::ClassCreator {
            ty: elem_base,
            args,
            anonymous_body,
            qualifier: None,
        })
    }

    fn parse_generic_type_or_array_for_creator(&mut self) -> ParseResult<Type> {
        self.parse_type_no_array_dims()
    }

    fn parse_type_no_array_dims(&mut self) -> ParseResult<Type> {
        let t = self.cur();
        if t.kind == TokenKind::Keyword {
            if let Some(p) = Primitive::from_keyword(&t.lexeme) {
                self.buf.advance();
                return Ok(Type::Primitive(p));
            }
        }
        let first = self.require(TokenKind::Name, "type name")?.lexeme;
        let mut container: Option<Box<Type>> = None;
        let mut name = first;
        let mut typeargs = self.parse_optional_type_arguments()?;
        while self.at(TokenKind::Dot) && matches!(self.look(1).kind, TokenKind::Name) {
            self.buf.advance();
            let seg = self.require(TokenKind::Name, "identifier")?.lexeme;
            container = Some(Box::new(Type::Generic {
                name: crate::qualified_name::QualifiedName::new(name.clone()),
                typeargs: typeargs.take(),
                container: container.take(),
            }));
            name = seg;
            typeargs = self.parse_optional_type_arguments()?;
        }
        Ok(Type::Generic {
            name: crate::qualified_name::QualifiedName::new(name),
            typeargs,
            container,
        })
    }

    fn parse_array_creator(&mut self, elem_type: Type) -> ParseResult<Expr> {
        let mut dimension_exprs = Vec::new();
        let mut extra_dimensions = 0;
        while self.at(TokenKind::LBracket) {
            self.buf.advance();
            if self.at(TokenKind::RBracket) {
                self.buf.advance();
                extra_dimensions += 1;
            } else {
                dimension_exprs.push(self.parse_expr()?);
                self.require(TokenKind::RBracket, "']'")?;
            }
        }
        let initializer = if self.at(TokenKind::LBrace) {
            Some(self.parse_array_initializer()?)
        } else {
            None
        };
        Ok(Expr::ArrayCreator {
            elem_type,
            dimension_exprs,
            extra_dimensions,
            initializer,
        })
    }
}

fn compound_op_from_lexeme(lexeme: &str) -> AssignOp {
    match lexeme {
        "+=" => AssignOp::AddAssign,
        "-=" => AssignOp::SubAssign,
        "*=" => AssignOp::MulAssign,
        "/=" => AssignOp::DivAssign,
        "%=" => AssignOp::RemAssign,
        "&=" => AssignOp::AndAssign,
        "|=" => AssignOp::OrAssign,
        "^=" => AssignOp::XorAssign,
        "<<=" => AssignOp::ShlAssign,
        ">>=" => AssignOp::ShrAssign,
        ">>>=" => AssignOp::UShrAssign,
        _ => AssignOp::Assign,
    }
}

fn name_of(expr: &Expr) -> crate::qualified_name::QualifiedName {
    match expr {
        Expr::Name(n) => n.clone(),
        _ => crate::qualified_name::QualifiedName::new("this"),
    }
}

fn placeholder_type_name(expr: &Expr) -> String {
    match expr {
        Expr::Name(n) => n.as_str().to_string(),
        _ => "Object".to_string(),
    }
}
