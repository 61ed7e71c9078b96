//! Statement grammar, grounded in `parser.py`'s `parse_statement` and its
//! `parse_if`/`parse_for`/`parse_try`/… siblings.

use super::Parser;
use crate::ast::*;
use crate::error::ParseResult;
use crate::token::TokenKind;

impl Parser {
    pub(crate) fn parse_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.require(TokenKind::LBrace, "'{'")?;
        self.skip_newlines();
        let mut stmts = Vec::new();
        while !self.at(TokenKind::RBrace) {
            stmts.push(self.parse_stmt()?);
            self.skip_newlines();
        }
        self.require(TokenKind::RBrace, "'}'")?;
        Ok(stmts)
    }

    /// A brace block or, in the indented dialect, `: NEWLINE INDENT ...
    /// DEDENT` (`spec.md` §6 "Indented surface").
    pub(crate) fn parse_block_or_indented(&mut self) -> ParseResult<Vec<Stmt>> {
        if self.at(TokenKind::LBrace) {
            return self.parse_block();
        }
        self.require(TokenKind::Colon, "':'")?;
        self.require(TokenKind::Newline, "newline")?;
        self.require(TokenKind::Indent, "indent")?;
        let mut stmts = Vec::new();
        while !self.at(TokenKind::Dedent) {
            stmts.push(self.parse_stmt()?);
            self.skip_newlines();
        }
        self.require(TokenKind::Dedent, "dedent")?;
        Ok(stmts)
    }

    pub(crate) fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        self.skip_newlines();
        if self.at(TokenKind::LBrace) {
            return Ok(Stmt::Block(self.parse_block()?));
        }
        if self.at(TokenKind::Semi) {
            self.buf.advance();
            return Ok(Stmt::Empty);
        }
        if self.at_keyword("if") {
            return self.parse_if();
        }
        if self.at_keyword("while") {
            return self.parse_while();
        }
        if self.at_keyword("do") {
            return self.parse_do_while();
        }
        if self.at_keyword("for") {
            return self.parse_for();
        }
        if self.at_keyword("switch") {
            return self.parse_switch_stmt();
        }
        if self.at_keyword("synchronized") {
            return self.parse_synchronized();
        }
        if self.at_keyword("try") {
            return self.parse_try();
        }
        if self.at_keyword("throw") {
            self.buf.advance();
            let e = self.parse_expr()?;
            self.end_stmt()?;
            return Ok(Stmt::Throw(Box::new(e)));
        }
        if self.at_keyword("return") {
            self.buf.advance();
            let e = if self.at_stmt_end() {
                None
            } else {
                Some(Box::new(self.parse_expr()?))
            };
            self.end_stmt()?;
            return Ok(Stmt::Return(e));
        }
        if self.at_keyword("break") {
            self.buf.advance();
            if self.at(TokenKind::Name) && !self.at_stmt_end() {
                let label = self.buf.advance().lexeme;
                self.end_stmt()?;
                return Ok(Stmt::Break(Some(label)));
            }
            // `break v;` inside a classic switch-expression case body is a
            // parse-time synonym for `yield v;`, normalized to the same
            // AST node (SPEC_FULL.md Open Question 2).
            if !self.at_stmt_end() {
                let e = self.parse_expr()?;
                self.end_stmt()?;
                return Ok(Stmt::Yield(Box::new(e)));
            }
            self.end_stmt()?;
            return Ok(Stmt::Break(None));
        }
        if self.at_keyword("continue") {
            self.buf.advance();
            let label = if self.at(TokenKind::Name) && !self.at_stmt_end() {
                Some(self.buf.advance().lexeme)
            } else {
                None
            };
            self.end_stmt()?;
            return Ok(Stmt::Continue(label));
        }
        if self.at_name("yield") {
            self.buf.advance();
            let e = self.parse_expr()?;
            self.end_stmt()?;
            return Ok(Stmt::Yield(Box::new(e)));
        }
        if self.at_keyword("assert") {
            self.buf.advance();
            let cond = self.parse_expr()?;
            let message = if self.accept(TokenKind::Colon).is_some() {
                Some(Box::new(self.parse_expr()?))
            } else {
                None
            };
            self.end_stmt()?;
            return Ok(Stmt::Assert { cond: Box::new(cond), message });
        }
        if self.at(TokenKind::Name) && self.look(1).kind == TokenKind::Colon {
            let label = self.buf.advance().lexeme;
            self.buf.advance();
            let body = self.parse_stmt()?;
            return Ok(Stmt::Labeled { label, body: Box::new(body) });
        }

        self.parse_local_decl_or_expr_stmt()
    }

    fn at_stmt_end(&self) -> bool {
        self.at(TokenKind::Semi) || self.at(TokenKind::Newline) || self.at(TokenKind::RBrace) || self.at(TokenKind::Dedent)
    }

    /// Consumes the statement terminator: `;` in the brace dialect, or
    /// `NEWLINE` in the indented dialect (either may be present; the
    /// scanner only emits `NEWLINE` at statement scope).
    fn end_stmt(&mut self) -> ParseResult<()> {
        self.accept(TokenKind::Semi);
        if self.at(TokenKind::Newline) {
            self.buf.advance();
        }
        Ok(())
    }

    /// A statement that may be a local variable declaration is attempted
    /// with a checkpoint; on failure it falls back to an expression
    /// statement, chaining the declaration failure so the more
    /// informative error wins (`spec.md` §4.3 "Statements").
    fn parse_local_decl_or_expr_stmt(&mut self) -> ParseResult<Stmt> {
        let decl_attempt = self.buf.speculate(|p| -> ParseResult<VariableDeclaration> {
            let (modifiers, annotations) = p.parse_modifiers_and_annotations()?;
            let ty = p.parse_type_allow_var()?;
            if !p.at(TokenKind::Name) {
                return Err(p.error("not a declaration"));
            }
            let declarators = p.parse_declarators()?;
            if ty.is_var() && declarators.len() != 1 {
                return Err(p.error("'var' is only allowed with a single declarator"));
            }
            Ok(VariableDeclaration::new(modifiers, annotations, ty, declarators))
        });
        match decl_attempt {
            Ok(decl) => {
                self.end_stmt()?;
                Ok(Stmt::VarDecl(decl))
            }
            Err(decl_err) => {
                let expr = self.parse_expr().map_err(|e| decl_err.chain(e))?;
                self.end_stmt()?;
                Ok(Stmt::Expression(Box::new(expr)))
            }
        }
    }

    pub(crate) fn parse_declarators(&mut self) -> ParseResult<Vec<VariableDeclarator>> {
        let mut decls = Vec::new();
        loop {
            let name = self.require(TokenKind::Name, "variable name")?.lexeme;
            let mut extra_dimensions = 0;
            while self.at(TokenKind::LBracket) && self.look(1).kind == TokenKind::RBracket {
                self.buf.advance();
                self.buf.advance();
                extra_dimensions += 1;
            }
            let initializer = if self.accept(TokenKind::Assign).is_some() {
                if self.at(TokenKind::LBrace) {
                    Some(Expr::ArrayInit(self.parse_array_initializer()?))
                } else {
                    Some(self.parse_expr()?)
                }
            } else {
                None
            };
            decls.push(VariableDeclarator { name, extra_dimensions, initializer });
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        Ok(decls)
    }

    fn parse_if(&mut self) -> ParseResult<Stmt> {
        self.require_keyword("if")?;
        let cond = self.parse_paren_or_bare_expr()?;
        let then_branch = self.parse_stmt_or_block_or_indented()?;
        self.skip_newlines();
        let else_branch = if self.at_keyword("else") {
            self.buf.advance();
            Some(Box::new(self.parse_stmt_or_block_or_indented()?))
        } else {
            None
        };
        Ok(Stmt::If { cond: Box::new(cond), then_branch: Box::new(then_branch), else_branch })
    }

    /// `if (cond)`/`if cond` — parenthesised and unparenthesised headers
    /// both accepted and produce the same AST (SPEC_FULL.md Open
    /// Question 1).
    fn parse_paren_or_bare_expr(&mut self) -> ParseResult<Expr> {
        if self.accept(TokenKind::LParen).is_some() {
            let e = self.parse_expr()?;
            self.require(TokenKind::RParen, "')'")?;
            Ok(e)
        } else {
            self.parse_expr()
        }
    }

    fn parse_stmt_or_block_or_indented(&mut self) -> ParseResult<Stmt> {
        if self.at(TokenKind::LBrace) {
            Ok(Stmt::Block(self.parse_block()?))
        } else if self.at(TokenKind::Colon) {
            Ok(Stmt::Block(self.parse_block_or_indented()?))
        } else {
            self.parse_stmt()
        }
    }

    fn parse_while(&mut self) -> ParseResult<Stmt> {
        self.require_keyword("while")?;
        let cond = self.parse_paren_or_bare_expr()?;
        let body = self.parse_stmt_or_block_or_indented()?;
        Ok(Stmt::While { cond: Box::new(cond), body: Box::new(body) })
    }

    fn parse_do_while(&mut self) -> ParseResult<Stmt> {
        self.require_keyword("do")?;
        let body = self.parse_stmt_or_block_or_indented()?;
        self.skip_newlines();
        self.require_keyword("while")?;
        let cond = self.parse_paren_or_bare_expr()?;
        self.end_stmt()?;
        Ok(Stmt::DoWhile { body: Box::new(body), cond: Box::new(cond) })
    }

    /// Classic and enhanced `for`, including the unparenthesised indented
    /// spelling `for String s : strs: ...` (`spec.md` §8 scenario 6).
    fn parse_for(&mut self) -> ParseResult<Stmt> {
        self.require_keyword("for")?;
        let parenthesised = self.accept(TokenKind::LParen).is_some();
        let control = self.parse_for_control()?;
        if parenthesised {
            self.require(TokenKind::RParen, "')'")?;
        }
        let body = self.parse_stmt_or_block_or_indented()?;
        Ok(Stmt::For { control, body: Box::new(body) })
    }

    fn parse_for_control(&mut self) -> ParseResult<ForControl> {
        let attempt = self.buf.speculate(|p| -> ParseResult<ForControl> {
            let (modifiers, annotations) = p.parse_modifiers_and_annotations()?;
            let ty = p.parse_type_allow_var()?;
            let name = p.require(TokenKind::Name, "variable name")?.lexeme;
            p.require(TokenKind::Colon, "':'")?;
            let iterable = p.parse_expr()?;
            let decl = VariableDeclaration::new(
                modifiers,
                annotations,
                ty,
                vec![VariableDeclarator { name, extra_dimensions: 0, initializer: None }],
            );
            Ok(ForControl::Enhanced(EnhancedForControl::new(decl, iterable)))
        });
        if let Ok(control) = attempt {
            return Ok(control);
        }
        let init = if self.at(TokenKind::Semi) {
            Vec::new()
        } else {
            vec![self.parse_local_decl_or_expr_stmt_for_init()?]
        };
        self.require(TokenKind::Semi, "';'")?;
        let cond = if self.at(TokenKind::Semi) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.require(TokenKind::Semi, "';'")?;
        let mut update = Vec::new();
        if !self.at(TokenKind::RParen) && !self.at(TokenKind::Colon) {
            update.push(self.parse_expr()?);
            while self.accept(TokenKind::Comma).is_some() {
                update.push(self.parse_expr()?);
            }
        }
        Ok(ForControl::Classic { init, cond, update })
    }

    fn parse_local_decl_or_expr_stmt_for_init(&mut self) -> ParseResult<Stmt> {
        let decl_attempt = self.buf.speculate(|p| -> ParseResult<VariableDeclaration> {
            let (modifiers, annotations) = p.parse_modifiers_and_annotations()?;
            let ty = p.parse_type_allow_var()?;
            if !p.at(TokenKind::Name) {
                return Err(p.error("not a declaration"));
            }
            let declarators = p.parse_declarators()?;
            if ty.is_var() && declarators.len() != 1 {
                return Err(p.error("'var' is only allowed with a single declarator"));
            }
            Ok(VariableDeclaration::new(modifiers, annotations, ty, declarators))
        });
        match decl_attempt {
            Ok(decl) => Ok(Stmt::VarDecl(decl)),
            Err(decl_err) => {
                let expr = self.parse_expr().map_err(|e| decl_err.chain(e))?;
                Ok(Stmt::Expression(Box::new(expr)))
            }
        }
    }

    fn parse_switch_stmt(&mut self) -> ParseResult<Stmt> {
        self.require_keyword("switch")?;
        let discriminant = self.parse_paren_or_bare_expr()?;
        let cases = self.parse_switch_cases()?;
        Ok(Stmt::Switch { discriminant: Box::new(discriminant), cases })
    }

    fn parse_synchronized(&mut self) -> ParseResult<Stmt> {
        self.require_keyword("synchronized")?;
        self.require(TokenKind::LParen, "'('")?;
        let expr = self.parse_expr()?;
        self.require(TokenKind::RParen, "')'")?;
        let body = self.parse_block_or_indented()?;
        Ok(Stmt::Synchronized { expr: Box::new(expr), body })
    }

    fn parse_try(&mut self) -> ParseResult<Stmt> {
        self.require_keyword("try")?;
        let resources = if self.accept(TokenKind::LParen).is_some() {
            let mut resources = Vec::new();
            while !self.at(TokenKind::RParen) {
                resources.push(self.parse_try_resource()?);
                if self.accept(TokenKind::Semi).is_none() {
                    break;
                }
            }
            self.require(TokenKind::RParen, "')'")?;
            resources
        } else {
            Vec::new()
        };
        let block = self.parse_block_or_indented()?;
        let mut catches = Vec::new();
        self.skip_newlines();
        while self.at_keyword("catch") {
            catches.push(self.parse_catch()?);
            self.skip_newlines();
        }
        let finally_block = if self.at_keyword("finally") {
            self.buf.advance();
            Some(self.parse_block_or_indented()?)
        } else {
            None
        };
        Ok(Stmt::Try { resources, block, catches, finally_block })
    }

    fn parse_try_resource(&mut self) -> ParseResult<TryResource> {
        let attempt = self.buf.speculate(|p| -> ParseResult<VariableDeclaration> {
            let (modifiers, annotations) = p.parse_modifiers_and_annotations()?;
            let ty = p.parse_type_allow_var()?;
            let name = p.require(TokenKind::Name, "resource name")?.lexeme;
            p.require(TokenKind::Assign, "'='")?;
            let init = p.parse_expr()?;
            Ok(VariableDeclaration::new(
                modifiers,
                annotations,
                ty,
                vec![VariableDeclarator { name, extra_dimensions: 0, initializer: Some(init) }],
            ))
        });
        match attempt {
            Ok(decl) => Ok(TryResource { declaration: Some(decl), existing: None }),
            Err(_) => Ok(TryResource { declaration: None, existing: Some(self.parse_expr()?) }),
        }
    }

    /// `catch (Type name)`/`catch Type name` — parenthesised and
    /// unparenthesised headers both accepted and produce the same AST,
    /// like `if`/`for`/`case` (SPEC_FULL.md Open Question 1).
    fn parse_catch(&mut self) -> ParseResult<CatchClause> {
        self.require_keyword("catch")?;
        let paren = self.accept(TokenKind::LParen).is_some();
        let (_, _annotations) = self.parse_modifiers_and_annotations()?;
        let mut exception_types = vec![self.parse_type()?];
        while self.accept(TokenKind::Pipe).is_some() {
            exception_types.push(self.parse_type()?);
        }
        let name = self.require(TokenKind::Name, "exception variable name")?.lexeme;
        if paren {
            self.require(TokenKind::RParen, "')'")?;
        }
        let body = self.parse_block_or_indented()?;
        Ok(CatchClause { exception_types, name, body })
    }
}
