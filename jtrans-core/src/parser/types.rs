//! Type and annotation grammar, grounded in `parser.py`'s
//! `parse_type`/`parse_generic_type_or_array`/`parse_annotation` family.

use super::Parser;
use crate::ast::{Annotation, AnnotationArgs, AnnotationValue, Modifier, Primitive, Type, TypeArgument, TypeParameter};
use crate::error::ParseResult;
use crate::qualified_name::QualifiedName;
use crate::token::TokenKind;

impl Parser {
    pub(crate) fn parse_modifiers_and_annotations(&mut self) -> ParseResult<(Vec<Modifier>, Vec<Annotation>)> {
        let mut modifiers = Vec::new();
        let mut annotations = Vec::new();
        loop {
            if self.at(TokenKind::At) && !self.at_interface_keyword_after_at() {
                annotations.push(self.parse_annotation()?);
                continue;
            }
            let t = self.cur();
            if t.kind == TokenKind::Keyword {
                if let Some(m) = Modifier::from_keyword(&t.lexeme) {
                    modifiers.push(m);
                    self.buf.advance();
                    continue;
                }
            }
            if self.at_name("sealed") {
                modifiers.push(Modifier::Sealed);
                self.buf.advance();
                continue;
            }
            break;
        }
        Ok((modifiers, annotations))
    }

    /// `@interface` begins an annotation-interface declaration, not an
    /// annotation use; distinguished by the token right after `@`.
    fn at_interface_keyword_after_at(&self) -> bool {
        self.look(1).kind == TokenKind::Keyword && self.look(1).lexeme == "interface"
    }

    pub(crate) fn parse_annotation(&mut self) -> ParseResult<Annotation> {
        self.require(TokenKind::At, "'@'")?;
        let name = self.parse_qualified_name()?;
        let args = if self.accept(TokenKind::LParen).is_some() {
            if self.accept(TokenKind::RParen).is_some() {
                AnnotationArgs::None
            } else if self.look(0).kind == TokenKind::Name && self.look(1).kind == TokenKind::Assign {
                let mut pairs = Vec::new();
                loop {
                    let key = self.require(TokenKind::Name, "annotation member name")?.lexeme;
                    self.require(TokenKind::Assign, "'='")?;
                    pairs.push((key, self.parse_annotation_value()?));
                    if self.accept(TokenKind::Comma).is_none() {
                        break;
                    }
                }
                self.require(TokenKind::RParen, "')'")?;
                AnnotationArgs::Named(pairs)
            } else {
                let v = self.parse_annotation_value()?;
                self.require(TokenKind::RParen, "')'")?;
                AnnotationArgs::Single(Box::new(v))
            }
        } else {
            AnnotationArgs::None
        };
        Ok(Annotation { name, args })
    }

    pub(crate) fn parse_annotation_value(&mut self) -> ParseResult<AnnotationValue> {
        if self.at(TokenKind::At) {
            return Ok(AnnotationValue::Nested(self.parse_annotation()?));
        }
        if self.accept(TokenKind::LBrace).is_some() {
            let mut values = Vec::new();
            while !self.at(TokenKind::RBrace) {
                values.push(self.parse_annotation_value()?);
                if self.accept(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.require(TokenKind::RBrace, "'}'")?;
            return Ok(AnnotationValue::Array(values));
        }
        Ok(AnnotationValue::Expr(self.parse_expr()?))
    }

    pub(crate) fn parse_qualified_name(&mut self) -> ParseResult<QualifiedName> {
        let first = self.require(TokenKind::Name, "identifier")?;
        let mut s = first.lexeme;
        while self.at(TokenKind::Dot) && matches!(self.look(1).kind, TokenKind::Name) {
            self.buf.advance();
            let seg = self.require(TokenKind::Name, "identifier")?;
            s.push('.');
            s.push_str(&seg.lexeme);
        }
        Ok(QualifiedName::new(s))
    }

    pub(crate) fn parse_type_parameters(&mut self) -> ParseResult<Vec<TypeParameter>> {
        if self.accept(TokenKind::Lt).is_none() {
            return Ok(Vec::new());
        }
        let mut params = Vec::new();
        loop {
            let (_, annotations) = self.parse_modifiers_and_annotations()?;
            let name = self.require(TokenKind::Name, "type parameter name")?.lexeme;
            let mut bounds = Vec::new();
            if self.at_keyword("extends") || self.at_name("extends") {
                self.buf.advance();
                bounds.push(self.parse_type()?);
                while self.accept(TokenKind::Amp).is_some() {
                    bounds.push(self.parse_type()?);
                }
            }
            params.push(TypeParameter { name, bounds, annotations });
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.require(TokenKind::Gt, "'>'")?;
        Ok(params)
    }

    /// Parses a full type including trailing `[]` array dimensions. `var`
    /// is rejected here; it is only legal in the single-declarator
    /// local/try-resource/enhanced-for positions that call
    /// [`Parser::parse_type_allow_var`] instead (`spec.md` §8 invariant
    /// "`var` is rejected as a type name in every syntactic position
    /// except...").
    pub(crate) fn parse_type(&mut self) -> ParseResult<Type> {
        if self.at_name("var") {
            return Err(self.error("'var' cannot be used as a type name here"));
        }
        self.parse_type_inner()
    }

    /// Like [`Parser::parse_type`] but accepts `var`, for the handful of
    /// positions where it denotes local type inference.
    pub(crate) fn parse_type_allow_var(&mut self) -> ParseResult<Type> {
        if self.at_name("var") {
            self.buf.advance();
            return Ok(Type::Var);
        }
        self.parse_type_inner()
    }

    fn parse_type_inner(&mut self) -> ParseResult<Type> {
        let mut base = self.parse_type_no_array()?;
        let mut dims = 0;
        while self.at(TokenKind::LBracket) && self.look(1).kind == TokenKind::RBracket {
            self.buf.advance();
            self.buf.advance();
            dims += 1;
        }
        if dims > 0 {
            base = Type::array(base, dims);
        }
        Ok(base)
    }

    fn parse_type_no_array(&mut self) -> ParseResult<Type> {
        let t = self.cur();
        if t.kind == TokenKind::Keyword {
            if let Some(p) = Primitive::from_keyword(&t.lexeme) {
                self.buf.advance();
                return Ok(Type::Primitive(p));
            }
            if t.lexeme == "void" {
                self.buf.advance();
                return Ok(Type::Void);
            }
        }
        self.parse_generic_type_or_array_inner()
    }

    /// Grounded in `parser.py`'s `parse_generic_type_or_array`, used both
    /// for ordinary type positions and for the `instanceof` right-hand
    /// side (`spec.md` SPEC_FULL.md "instanceof binds at relational
    /// precedence").
    pub(crate) fn parse_generic_type_or_array(&mut self) -> ParseResult<Type> {
        self.parse_type()
    }

    fn parse_generic_type_or_array_inner(&mut self) -> ParseResult<Type> {
        let first = self.require(TokenKind::Name, "type name")?;
        if first.lexeme == "var" {
            return Err(self.error("'var' cannot be used as a type name"));
        }
        let mut container: Option<Box<Type>> = None;
        let mut name = first.lexeme;
        let mut typeargs = self.parse_optional_type_arguments()?;

        while self.at(TokenKind::Dot) && matches!(self.look(1).kind, TokenKind::Name) {
            self.buf.advance();
            let seg = self.require(TokenKind::Name, "identifier")?;
            if seg.lexeme == "var" {
                return Err(self.error("'var' cannot be used as a type name"));
            }
            container = Some(Box::new(Type::Generic {
                name: QualifiedName::new(name.clone()),
                typeargs: typeargs.take(),
                container: container.take(),
            }));
            name = seg.lexeme;
            typeargs = self.parse_optional_type_arguments()?;
        }

        Ok(Type::Generic {
            name: QualifiedName::new(name),
            typeargs,
            container,
        })
    }

    pub(crate) fn parse_optional_type_arguments(&mut self) -> ParseResult<Option<Vec<TypeArgument>>> {
        if !self.at(TokenKind::Lt) {
            return Ok(None);
        }
        self.buf.push_mark();
        match self.try_parse_type_arguments() {
            Ok(args) => {
                self.buf.pop_mark(false);
                Ok(Some(args))
            }
            Err(_) => {
                self.buf.pop_mark(true);
                Ok(None)
            }
        }
    }

    pub(crate) fn try_parse_type_arguments(&mut self) -> ParseResult<Vec<TypeArgument>> {
        self.require(TokenKind::Lt, "'<'")?;
        let mut args = Vec::new();
        if self.accept(TokenKind::Gt).is_some() {
            return Ok(args);
        }
        loop {
            if self.accept(TokenKind::Question).is_some() {
                if self.accept_keyword("extends").is_some() || self.accept_name("extends") {
                    args.push(TypeArgument::Wildcard {
                        extends: Some(Box::new(self.parse_type()?)),
                        super_bound: None,
                    });
                } else if self.accept_keyword("super").is_some() {
                    args.push(TypeArgument::Wildcard {
                        extends: None,
                        super_bound: Some(Box::new(self.parse_type()?)),
                    });
                } else {
                    args.push(TypeArgument::Wildcard {
                        extends: None,
                        super_bound: None,
                    });
                }
            } else {
                args.push(TypeArgument::Type(Box::new(self.parse_type()?)));
            }
            if self.accept(TokenKind::Comma).is_some() {
                continue;
            }
            break;
        }
        self.require_closing_angle()?;
        Ok(args)
    }

    /// Closes a type-argument list. The scanner never fuses a bare
    /// `>>`/`>>>` into one token (only `>>=`/`>>>=` are fused, since those
    /// spellings are unambiguous), so each `>` here is already its own
    /// `Gt` token — `Map<String, List<Integer>>` closes its two nested
    /// generics with two separate calls to this method, one `>` apiece
    /// (`spec.md` §4.3 "Generic call vs comparison" / "`>>`/`>>>`").
    fn require_closing_angle(&mut self) -> ParseResult<()> {
        let t = self.cur();
        match t.kind {
            TokenKind::Gt => {
                self.buf.advance();
                Ok(())
            }
            _ => Err(self.error("expected '>' to close type argument list")),
        }
    }
}
