//! Declaration grammar: compilation units, imports, module declarations,
//! type declarations, and members, grounded in `parser.py`'s
//! `parse_compilation_unit`/`parse_module_declaration`/`parse_class_body`
//! family.

use super::Parser;
use crate::ast::*;
use crate::error::ParseResult;
use crate::qualified_name::QualifiedName;
use crate::token::TokenKind;

impl Parser {
    pub(crate) fn parse_compilation_unit(&mut self) -> ParseResult<CompilationUnit> {
        let package = self.parse_package_declaration()?;
        self.skip_newlines();
        let mut imports = Vec::new();
        loop {
            self.skip_newlines();
            if self.at_keyword("import") {
                imports.extend(self.parse_import_declaration()?);
            } else if self.at_name("from") {
                imports.extend(self.parse_from_import_declarations()?);
            } else {
                break;
            }
        }
        let mut types = Vec::new();
        loop {
            self.skip_newlines();
            if self.at(TokenKind::EndMarker) {
                break;
            }
            types.push(self.parse_type_declaration()?);
        }
        Ok(CompilationUnit { package, imports, types })
    }

    /// Accepts a leading `STRING` literal immediately before `package` as
    /// an alternate doc-comment source when no `/**` comment was captured
    /// (SPEC_FULL.md "Doc-comment passthrough on package").
    fn parse_package_declaration(&mut self) -> ParseResult<Option<Package>> {
        let string_doc = if self.at(TokenKind::StringLiteral) && self.look(1).kind == TokenKind::Keyword && self.look(1).lexeme == "package" {
            Some(self.buf.advance().lexeme)
        } else {
            None
        };
        let mut annotations = Vec::new();
        while self.at(TokenKind::At) {
            annotations.push(self.parse_annotation()?);
        }
        if !self.at_keyword("package") {
            return Ok(None);
        }
        let doc = self.buf.take_doc().or(string_doc);
        self.require_keyword("package")?;
        let name = self.parse_qualified_name()?;
        self.end_simple_stmt()?;
        Ok(Some(Package { name, annotations, doc }))
    }

    fn end_simple_stmt(&mut self) -> ParseResult<()> {
        self.accept(TokenKind::Semi);
        self.accept(TokenKind::Newline);
        Ok(())
    }

    fn parse_import_declaration(&mut self) -> ParseResult<Vec<Import>> {
        self.require_keyword("import")?;
        let is_static = self.accept_keyword("static").is_some();
        let mut name = self.require(TokenKind::Name, "identifier")?.lexeme;
        let mut wildcard = false;
        loop {
            if self.accept(TokenKind::Dot).is_some() {
                if self.accept(TokenKind::Star).is_some() {
                    wildcard = true;
                    break;
                }
                let seg = self.require(TokenKind::Name, "identifier")?.lexeme;
                name.push('.');
                name.push_str(&seg);
            } else {
                break;
            }
        }
        self.end_simple_stmt()?;
        Ok(vec![Import { name: QualifiedName::new(name), is_static, wildcard }])
    }

    /// `from a.b import (x, y.*, z)`, its unparenthesised single-name
    /// shorthand, and the bare `from a.b import *` wildcard
    /// (SPEC_FULL.md "FEATURES SUPPLEMENTED FROM original_source").
    fn parse_from_import_declarations(&mut self) -> ParseResult<Vec<Import>> {
        self.require(TokenKind::Name, "'from'")?; // consumes the `from` soft-keyword
        let prefix = self.parse_qualified_name()?;
        if !self.at_name("import") {
            return Err(self.error("expected 'import'"));
        }
        self.buf.advance();

        if self.accept(TokenKind::Star).is_some() {
            self.end_simple_stmt()?;
            return Ok(vec![Import { name: prefix, is_static: false, wildcard: true }]);
        }

        let names = if self.accept(TokenKind::LParen).is_some() {
            let mut names = Vec::new();
            while !self.at(TokenKind::RParen) {
                names.push(self.parse_from_import_name()?);
                if self.accept(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.require(TokenKind::RParen, "')'")?;
            names
        } else {
            vec![self.parse_from_import_name()?]
        };
        self.end_simple_stmt()?;
        Ok(names
            .into_iter()
            .map(|(suffix, wildcard)| Import { name: prefix.join(&suffix), is_static: false, wildcard })
            .collect())
    }

    fn parse_from_import_name(&mut self) -> ParseResult<(String, bool)> {
        let mut name = self.require(TokenKind::Name, "identifier")?.lexeme;
        let mut wildcard = false;
        while self.at(TokenKind::Dot) {
            self.buf.advance();
            if self.accept(TokenKind::Star).is_some() {
                wildcard = true;
                break;
            }
            let seg = self.require(TokenKind::Name, "identifier")?.lexeme;
            name.push('.');
            name.push_str(&seg);
        }
        Ok((name, wildcard))
    }

    /// `module`/`requires`/`exports`/`opens`/`uses`/`provides`/`to`/`with`/
    /// `open`/`transitive` are all contextual words in real Java, usable as
    /// ordinary identifiers outside module-declaration syntax, so the
    /// scanner classifies them as `NAME` and every check here goes through
    /// `at_name`/`accept_name`/`require_name` rather than the `_keyword`
    /// family.
    fn parse_module_compilation_unit(&mut self) -> ParseResult<ModuleCompilationUnit> {
        let doc = self.buf.take_doc();
        let open = self.accept_name("open");
        self.require_name("module")?;
        let name = self.parse_qualified_name()?;
        self.require(TokenKind::LBrace, "'{'")?;
        self.skip_newlines();
        let mut directives = Vec::new();
        while !self.at(TokenKind::RBrace) {
            directives.push(self.parse_module_directive()?);
            self.skip_newlines();
        }
        self.require(TokenKind::RBrace, "'}'")?;
        Ok(ModuleCompilationUnit {
            name,
            open,
            directives,
            annotations: Vec::new(),
            doc,
            imports: Vec::new(),
        })
    }

    fn parse_module_directive(&mut self) -> ParseResult<ModuleDirective> {
        if self.accept_name("requires") {
            let transitive = self.accept_name("transitive");
            let mut modifiers = Vec::new();
            if self.accept_keyword("static").is_some() {
                modifiers.push(Modifier::Static);
            }
            let name = self.parse_qualified_name()?;
            self.end_simple_stmt()?;
            return Ok(ModuleDirective::Requires { name, modifiers, transitive });
        }
        if self.accept_name("exports") {
            let name = self.parse_qualified_name()?;
            let to = self.parse_optional_to_list()?;
            self.end_simple_stmt()?;
            return Ok(ModuleDirective::Exports { name, to });
        }
        if self.accept_name("opens") {
            let name = self.parse_qualified_name()?;
            let to = self.parse_optional_to_list()?;
            self.end_simple_stmt()?;
            return Ok(ModuleDirective::Opens { name, to });
        }
        if self.accept_name("uses") {
            let name = self.parse_qualified_name()?;
            self.end_simple_stmt()?;
            return Ok(ModuleDirective::Uses { name });
        }
        if self.accept_name("provides") {
            let name = self.parse_qualified_name()?;
            self.require_name("with")?;
            let mut with = vec![self.parse_qualified_name()?];
            while self.accept(TokenKind::Comma).is_some() {
                with.push(self.parse_qualified_name()?);
            }
            self.end_simple_stmt()?;
            return Ok(ModuleDirective::Provides { name, with });
        }
        Err(self.error("expected a module directive"))
    }

    fn parse_optional_to_list(&mut self) -> ParseResult<Vec<QualifiedName>> {
        if !self.at_name("to") {
            return Ok(Vec::new());
        }
        self.buf.advance();
        let mut names = vec![self.parse_qualified_name()?];
        while self.accept(TokenKind::Comma).is_some() {
            names.push(self.parse_qualified_name()?);
        }
        Ok(names)
    }

    fn parse_type_declaration(&mut self) -> ParseResult<TypeDecl> {
        let doc = self.buf.take_doc();
        let (modifiers, annotations) = self.parse_modifiers_and_annotations()?;
        if self.accept_keyword("class").is_some() {
            return Ok(TypeDecl::Class(self.parse_class_decl(modifiers, annotations, doc)?));
        }
        if self.accept_keyword("interface").is_some() {
            return Ok(TypeDecl::Interface(self.parse_interface_decl(modifiers, annotations, doc)?));
        }
        if self.accept_keyword("enum").is_some() {
            return Ok(TypeDecl::Enum(self.parse_enum_decl(modifiers, annotations, doc)?));
        }
        if self.at(TokenKind::At) && self.look(1).kind == TokenKind::Keyword && self.look(1).lexeme == "interface" {
            self.buf.advance();
            self.buf.advance();
            return Ok(TypeDecl::AnnotationInterface(self.parse_annotation_interface_decl(modifiers, annotations, doc)?));
        }
        Err(self.error("expected a type declaration (class/interface/enum/@interface)"))
    }

    fn parse_class_decl(&mut self, modifiers: Vec<Modifier>, annotations: Vec<Annotation>, doc: Option<String>) -> ParseResult<ClassDecl> {
        let name = self.require(TokenKind::Name, "class name")?.lexeme;
        let type_params = self.parse_type_parameters()?;
        let superclass = if self.accept_keyword("extends").is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        let interfaces = if self.accept_keyword("implements").is_some() {
            self.parse_type_list()?
        } else {
            Vec::new()
        };
        self.skip_permits_clause()?;
        let members = self.parse_class_body()?;
        Ok(ClassDecl {
            header: TypeHeader { name, type_params, modifiers, annotations, doc },
            superclass,
            interfaces,
            members,
        })
    }

    fn parse_interface_decl(&mut self, modifiers: Vec<Modifier>, annotations: Vec<Annotation>, doc: Option<String>) -> ParseResult<InterfaceDecl> {
        let name = self.require(TokenKind::Name, "interface name")?.lexeme;
        let type_params = self.parse_type_parameters()?;
        let extends = if self.accept_keyword("extends").is_some() {
            self.parse_type_list()?
        } else {
            Vec::new()
        };
        self.skip_permits_clause()?;
        let members = self.parse_class_body()?;
        Ok(InterfaceDecl {
            header: TypeHeader { name, type_params, modifiers, annotations, doc },
            extends,
            members,
        })
    }

    fn parse_annotation_interface_decl(&mut self, modifiers: Vec<Modifier>, annotations: Vec<Annotation>, doc: Option<String>) -> ParseResult<AnnotationInterfaceDecl> {
        let name = self.require(TokenKind::Name, "annotation name")?.lexeme;
        let type_params = self.parse_type_parameters()?;
        let members = self.parse_class_body()?;
        Ok(AnnotationInterfaceDecl {
            header: TypeHeader { name, type_params, modifiers, annotations, doc },
            members,
        })
    }

    fn parse_enum_decl(&mut self, modifiers: Vec<Modifier>, annotations: Vec<Annotation>, doc: Option<String>) -> ParseResult<EnumDecl> {
        let name = self.require(TokenKind::Name, "enum name")?.lexeme;
        let interfaces = if self.accept_keyword("implements").is_some() {
            self.parse_type_list()?
        } else {
            Vec::new()
        };
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
        let mut constants = Vec::new();
        while self.at(TokenKind::Name) || self.at(TokenKind::At) {
            constants.push(self.parse_enum_constant()?);
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
            self.skip_newlines();
        }
        self.skip_newlines();
        let mut members = Vec::new();
        if self.accept(TokenKind::Semi).is_some() {
            self.skip_newlines();
            while !self.at(closer) {
                members.push(self.parse_member()?);
                self.skip_newlines();
            }
        }
        self.require(closer, if closer == TokenKind::RBrace { "'}'" } else { "dedent" })?;
        Ok(EnumDecl {
            header: TypeHeader { name, type_params: Vec::new(), modifiers, annotations, doc },
            interfaces,
            constants,
            members,
        })
    }

    fn parse_enum_constant(&mut self) -> ParseResult<EnumConstant> {
        let doc = self.buf.take_doc();
        let (_, annotations) = self.parse_modifiers_and_annotations()?;
        let name = self.require(TokenKind::Name, "enum constant name")?.lexeme;
        let args = if self.at(TokenKind::LParen) {
            self.parse_args()?
        } else {
            Vec::new()
        };
        let anonymous_body = if self.at(TokenKind::LBrace) {
            Some(self.parse_class_body()?)
        } else {
            None
        };
        Ok(EnumConstant { name, args, annotations, doc, anonymous_body })
    }

    /// `permits` (sealed classes) is parsed and discarded: sealed
    /// hierarchies don't change rendering or any other observable
    /// behavior this system models, so the clause's type list is dropped
    /// rather than threaded through `ClassDecl`.
    fn skip_permits_clause(&mut self) -> ParseResult<()> {
        if self.at_name("permits") {
            self.buf.advance();
            self.parse_type_list()?;
        }
        Ok(())
    }

    fn parse_type_list(&mut self) -> ParseResult<Vec<Type>> {
        let mut types = vec![self.parse_type()?];
        while self.accept(TokenKind::Comma).is_some() {
            types.push(self.parse_type()?);
        }
        Ok(types)
    }

    /// A class/interface/annotation-interface body: `{ members... }` or, in
    /// the indented dialect, `: NEWLINE INDENT members... DEDENT`, mirroring
    /// `parse_block_or_indented`'s statement-level counterpart.
    pub(crate) fn parse_class_body(&mut self) -> ParseResult<Vec<Member>> {
        if self.at(TokenKind::LBrace) {
            self.buf.advance();
            self.skip_newlines();
            let mut members = Vec::new();
            while !self.at(TokenKind::RBrace) {
                members.push(self.parse_member()?);
                self.skip_newlines();
            }
            self.require(TokenKind::RBrace, "'}'")?;
            Ok(members)
        } else {
            self.require(TokenKind::Colon, "':'")?;
            self.require(TokenKind::Newline, "newline")?;
            self.require(TokenKind::Indent, "indent")?;
            let mut members = Vec::new();
            while !self.at(TokenKind::Dedent) {
                members.push(self.parse_member()?);
                self.skip_newlines();
            }
            self.require(TokenKind::Dedent, "dedent")?;
            Ok(members)
        }
    }

    fn parse_member(&mut self) -> ParseResult<Member> {
        if self.accept(TokenKind::Semi).is_some() {
            return self.parse_member();
        }
        let doc = self.buf.take_doc();
        let (modifiers, annotations) = self.parse_modifiers_and_annotations()?;

        if self.at_keyword("class") || self.at_keyword("interface") || self.at_keyword("enum")
            || (self.at(TokenKind::At) && self.look(1).lexeme == "interface")
        {
            return self.parse_nested_type_declaration_member(modifiers, annotations, doc);
        }

        if self.at(TokenKind::LBrace) {
            let body = self.parse_block()?;
            return Ok(Member::Initializer(InitializerBlock {
                is_static: modifiers.contains(&Modifier::Static),
                body,
            }));
        }

        // Generic method/constructor: a leading `<...>` type parameter
        // list, per `spec.md` §4.3 "a member starting with a type
        // parameter list is a generic method or constructor".
        let type_params = self.parse_type_parameters()?;

        // Constructor: `NAME '('` lookahead distinguishes it from a
        // method/field.
        if self.at(TokenKind::Name) && self.look(1).kind == TokenKind::LParen {
            return Ok(Member::Constructor(self.parse_constructor(modifiers, annotations, doc, type_params)?));
        }

        let ty = self.parse_type()?;
        let name = self.require(TokenKind::Name, "member name")?.lexeme;
        if self.at(TokenKind::LParen) {
            return self.parse_method_or_property_tail(modifiers, annotations, doc, type_params, ty, name);
        }
        Ok(Member::Field(self.parse_field_tail(modifiers, annotations, doc, ty, name)?))
    }

    /// An annotation-interface element (`Type name() default value;`) is
    /// only distinguishable from an ordinary method after the empty
    /// parameter list, at the `default` soft keyword.
    fn parse_method_or_property_tail(
        &mut self,
        modifiers: Vec<Modifier>,
        annotations: Vec<Annotation>,
        doc: Option<String>,
        type_params: Vec<TypeParameter>,
        return_type: Type,
        name: String,
    ) -> ParseResult<Member> {
        let params = self.parse_parameters()?;
        if params.is_empty() && self.at_name("default") {
            self.buf.advance();
            let default = Some(self.parse_annotation_value()?);
            self.end_simple_stmt()?;
            return Ok(Member::AnnotationProperty(AnnotationProperty { ty: return_type, name, default, doc }));
        }
        let throws = self.parse_optional_throws()?;
        let body = if self.at(TokenKind::LBrace) || self.at(TokenKind::Colon) {
            Some(self.parse_block_or_indented()?)
        } else {
            self.end_simple_stmt()?;
            None
        };
        Ok(Member::Function(FunctionDecl { modifiers, annotations, doc, type_params, return_type, name, params, throws, body }))
    }

    fn parse_nested_type_declaration_member(&mut self, modifiers: Vec<Modifier>, annotations: Vec<Annotation>, doc: Option<String>) -> ParseResult<Member> {
        let decl = if self.accept_keyword("class").is_some() {
            TypeDecl::Class(self.parse_class_decl(modifiers, annotations, doc)?)
        } else if self.accept_keyword("interface").is_some() {
            TypeDecl::Interface(self.parse_interface_decl(modifiers, annotations, doc)?)
        } else if self.accept_keyword("enum").is_some() {
            TypeDecl::Enum(self.parse_enum_decl(modifiers, annotations, doc)?)
        } else {
            self.buf.advance(); // '@'
            self.buf.advance(); // 'interface'
            TypeDecl::AnnotationInterface(self.parse_annotation_interface_decl(modifiers, annotations, doc)?)
        };
        Ok(Member::Type(Box::new(decl)))
    }

    fn parse_constructor(
        &mut self,
        modifiers: Vec<Modifier>,
        annotations: Vec<Annotation>,
        doc: Option<String>,
        type_params: Vec<TypeParameter>,
    ) -> ParseResult<ConstructorDecl> {
        let name = self.buf.advance().lexeme;
        let params = self.parse_parameters()?;
        let throws = self.parse_optional_throws()?;
        let body = self.parse_block_or_indented()?;
        Ok(ConstructorDecl { modifiers, annotations, doc, type_params, name, params, throws, body })
    }

    fn parse_field_tail(
        &mut self,
        modifiers: Vec<Modifier>,
        annotations: Vec<Annotation>,
        doc: Option<String>,
        ty: Type,
        first_name: String,
    ) -> ParseResult<FieldDecl> {
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
        let mut declarators = vec![VariableDeclarator { name: first_name, extra_dimensions, initializer }];
        while self.accept(TokenKind::Comma).is_some() {
            declarators.extend(self.parse_declarators()?);
        }
        self.end_simple_stmt()?;
        Ok(FieldDecl {
            declaration: VariableDeclaration::new(modifiers, annotations, ty, declarators),
            doc,
        })
    }

    fn parse_parameters(&mut self) -> ParseResult<Vec<Parameter>> {
        self.require(TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        while !self.at(TokenKind::RParen) {
            let (modifiers, annotations) = self.parse_modifiers_and_annotations()?;
            let ty = self.parse_type()?;
            let varargs = self.accept(TokenKind::Ellipsis).is_some();
            let name = self.require(TokenKind::Name, "parameter name")?.lexeme;
            params.push(Parameter { modifiers, annotations, ty, name, varargs });
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.require(TokenKind::RParen, "')'")?;
        Ok(params)
    }

    fn parse_optional_throws(&mut self) -> ParseResult<Vec<Type>> {
        if self.accept_keyword("throws").is_some() {
            self.parse_type_list()
        } else {
            Ok(Vec::new())
        }
    }
}
